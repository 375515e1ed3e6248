// AppBin - RISC-V Boot Image Emitter
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "app.bin";

/// One instruction word of the boot image.
///
/// `asm` is the source line the word was assembled from. It is only ever
/// logged; nothing parses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramWord {
    pub word: u32,
    pub asm: &'static str,
}

impl ProgramWord {
    pub const fn new(word: u32, asm: &'static str) -> Self {
        Self { word, asm }
    }
}

/// Drives 0xAA onto the LED register at 0x1000_0004, then spins.
pub const LED_PROGRAM: [ProgramWord; 4] = [
    ProgramWord::new(0x1000_0537, "lui a0, 0x10000"),
    ProgramWord::new(0x0aa0_0593, "li a1, 0xAA"),
    ProgramWord::new(0x00b5_2223, "sw a1, 4(a0)"),
    ProgramWord::new(0x0000_006f, "j ."),
];

pub fn led_program_words() -> Vec<u32> {
    LED_PROGRAM.iter().map(|w| w.word).collect()
}
