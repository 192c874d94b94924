#![doc = include_str!("../README.md")]

/// INI text to record decoding
pub mod decode;
/// Record to INI text encoding
pub mod encode;
mod error;
mod file;
mod macros;
/// Field metadata and name resolution
pub mod meta;
mod options;
mod scalar;

pub use decode::{decode, decode_with};
pub use encode::encode;
pub use error::{IniError, Result, SyntaxErrorKind, TypeErrorKind};
pub use file::{decode_file, decode_file_with, encode_file};
pub use meta::{
    Field, FieldDescriptor, FieldKind, FieldType, Record, ScalarMut, resolve_item,
    resolve_section, resolve_section_by_index, resolve_untagged_item,
};
pub use options::{DecodeOptions, UnknownPolicy};
