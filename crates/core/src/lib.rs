// AppBin - RISC-V Boot Image Emitter
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Raw boot image emitter for the Basys 3 RISC-V soft core.

pub mod emit;
pub mod image;
pub mod program;

use std::path::PathBuf;

pub use emit::{verify_image, write_image, EmitReport};
pub use image::{decode_words, encode_words, image_digest};
pub use program::{led_program_words, ProgramWord, DEFAULT_OUTPUT, LED_PROGRAM};

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Failed to create {path:?}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read back {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path:?} is {found} bytes, expected {expected}")]
    Length {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    #[error("{path:?} differs at offset {offset:#x}: expected {expected:#010x}, found {found:#010x}")]
    Mismatch {
        path: PathBuf,
        offset: usize,
        expected: u32,
        found: u32,
    },
}

impl EmitError {
    /// True for length or content mismatches found by `verify_image`.
    pub fn is_verify_failure(&self) -> bool {
        matches!(self, EmitError::Length { .. } | EmitError::Mismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, EmitError>;
