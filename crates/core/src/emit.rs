// AppBin - RISC-V Boot Image Emitter
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::image::{decode_words, encode_words, image_digest, WORD_SIZE};
use crate::{EmitError, Result};
use serde::{Serialize, Serializer};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a completed write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    #[serde(serialize_with = "serialize_path")]
    pub path: PathBuf,
    pub words: usize,
    pub bytes: usize,
    pub sha256: String,
}

// Lossy so that non-UTF-8 paths still produce a report.
fn serialize_path<S>(path: &Path, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&path.display())
}

/// Creates or truncates `path` and writes `words` as a raw little-endian image.
///
/// The data is synced before returning, so an `Ok` means the bytes reached
/// the file. The handle is dropped on every path out of this function.
pub fn write_image(path: &Path, words: &[u32]) -> Result<EmitReport> {
    let bytes = encode_words(words);

    let mut file = File::create(path).map_err(|source| EmitError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(&bytes)
        .and_then(|_| file.sync_all())
        .map_err(|source| EmitError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    let report = EmitReport {
        path: path.to_path_buf(),
        words: words.len(),
        bytes: bytes.len(),
        sha256: image_digest(&bytes),
    };
    info!(
        "Wrote {} words ({} bytes) to {:?}, sha256={}",
        report.words, report.bytes, report.path, report.sha256
    );
    Ok(report)
}

/// Reads `path` back and checks it holds exactly `words`.
pub fn verify_image(path: &Path, words: &[u32]) -> Result<()> {
    let bytes = fs::read(path).map_err(|source| EmitError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let expected_len = words.len() * WORD_SIZE;
    let found = match decode_words(&bytes) {
        Some(found) if bytes.len() == expected_len => found,
        _ => {
            return Err(EmitError::Length {
                path: path.to_path_buf(),
                expected: expected_len,
                found: bytes.len(),
            })
        }
    };

    if let Some((i, (want, got))) = words
        .iter()
        .zip(found.iter())
        .enumerate()
        .find(|(_, (want, got))| want != got)
    {
        return Err(EmitError::Mismatch {
            path: path.to_path_buf(),
            offset: i * WORD_SIZE,
            expected: *want,
            found: *got,
        });
    }

    debug!("Verified {} words in {:?}", words.len(), path);
    Ok(())
}
