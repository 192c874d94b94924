//! Path-based wrappers around [`decode`](crate::decode) and [`encode`](crate::encode)

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::decode::decode_with;
use crate::encode::encode;
use crate::error::Result;
use crate::meta::Record;
use crate::options::DecodeOptions;

/// Read the file at `path` and decode it into `target`
///
/// Read failures, including invalid UTF-8, are returned as
/// [`IniError::Io`](crate::IniError::Io).
pub fn decode_file<R: Record + ?Sized>(path: impl AsRef<Path>, target: &mut R) -> Result<()> {
    decode_file_with(path, target, &DecodeOptions::default())
}

/// Read the file at `path` and decode it into `target` using `options`
pub fn decode_file_with<R: Record + ?Sized>(
    path: impl AsRef<Path>,
    target: &mut R,
    options: &DecodeOptions,
) -> Result<()> {
    let path = path.as_ref();
    debug!("Reading INI file {}", path.display());
    let text = fs::read_to_string(path)?;
    decode_with(&text, target, options)
}

/// Encode `value` and write it to `path`, replacing any existing file
pub fn encode_file<R: Record + ?Sized>(path: impl AsRef<Path>, value: &R) -> Result<()> {
    let path = path.as_ref();
    let text = encode(value);
    debug!("Writing {} bytes to INI file {}", text.len(), path.display());
    fs::write(path, text)?;
    Ok(())
}
