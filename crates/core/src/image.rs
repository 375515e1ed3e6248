// AppBin - RISC-V Boot Image Emitter
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use sha2::{Digest, Sha256};

pub const WORD_SIZE: usize = 4;

/// Serializes words back to back, least significant byte first.
/// No header, padding or trailer.
pub fn encode_words(words: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(words.len() * WORD_SIZE);
    for word in words {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    bytes
}

/// Regroups a raw image into little-endian words.
///
/// Returns `None` when the length is not a multiple of the word size.
pub fn decode_words(bytes: &[u8]) -> Option<Vec<u32>> {
    if bytes.len() % WORD_SIZE != 0 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(WORD_SIZE)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
    )
}

/// Lowercase hex SHA-256 of the image bytes.
pub fn image_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
