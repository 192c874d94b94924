//! Field implementations for primitive types
//!
//! `String` and `i64` are the two supported scalar kinds. The other
//! primitives may appear in a record so that it still compiles and encodes,
//! but decoding a value into them fails with
//! [`TypeErrorKind::UnsupportedFieldType`](crate::TypeErrorKind).

use crate::meta::{Field, FieldKind, FieldType, ScalarMut};

impl FieldType for String {
    const KIND: FieldKind = FieldKind::Text;
}

impl Field for String {
    fn scalar_mut(&mut self) -> Option<ScalarMut<'_>> {
        Some(ScalarMut::Text(self))
    }

    fn render(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl FieldType for i64 {
    const KIND: FieldKind = FieldKind::Integer64;
}

impl Field for i64 {
    fn scalar_mut(&mut self) -> Option<ScalarMut<'_>> {
        Some(ScalarMut::Integer64(self))
    }

    fn render(&self) -> Option<String> {
        Some(self.to_string())
    }
}

macro_rules! unsupported_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldType for $ty {
                const KIND: FieldKind = FieldKind::Unsupported;
            }

            impl Field for $ty {
                fn render(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

unsupported_scalar!(
    bool, char, i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
