//! Record declaration macro

/// Declare a struct that the codec can decode into and encode from.
///
/// The struct is emitted unchanged apart from the `#[ini = "..."]` field
/// attributes, which become the fields' external names. Untagged fields use
/// their Rust identifier. The macro implements [`Record`](crate::Record),
/// [`Field`](crate::Field) and [`FieldType`](crate::FieldType) for the
/// struct, so it can be used both as the top-level configuration and as a
/// section inside one.
///
/// Fields may carry doc comments before the tag; other field attributes are
/// not accepted.
///
/// # Example
///
/// ```
/// use iniconfig::ini_record;
///
/// ini_record! {
///     #[derive(Debug, Default)]
///     pub struct Server {
///         #[ini = "ip"]
///         pub ip: String,
///         #[ini = "port"]
///         pub port: i64,
///     }
/// }
///
/// ini_record! {
///     #[derive(Debug, Default)]
///     pub struct Config {
///         /// Listener settings
///         #[ini = "server"]
///         pub server: Server,
///     }
/// }
///
/// let mut config = Config::default();
/// iniconfig::decode("[server]\nip = 10.0.0.1\nport = 8080\n", &mut config).unwrap();
/// assert_eq!(config.server.ip, "10.0.0.1");
/// assert_eq!(config.server.port, 8080);
/// ```
#[macro_export]
macro_rules! ini_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[ini = $tag:literal])?
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::FieldType for $name {
            const KIND: $crate::FieldKind = $crate::FieldKind::Record;
        }

        impl $crate::Field for $name {
            fn as_record(&self) -> ::core::option::Option<&dyn $crate::Record> {
                ::core::option::Option::Some(self)
            }

            fn as_record_mut(&mut self) -> ::core::option::Option<&mut dyn $crate::Record> {
                ::core::option::Option::Some(self)
            }

            fn render(&self) -> ::core::option::Option<::std::string::String> {
                ::core::option::Option::None
            }
        }

        impl $crate::Record for $name {
            fn fields(&self) -> &'static [$crate::FieldDescriptor] {
                const FIELDS: &[$crate::FieldDescriptor] = &[
                    $(
                        $crate::FieldDescriptor::new(
                            ::core::stringify!($field),
                            $crate::__ini_tag!($($tag)?),
                            <$ty as $crate::FieldType>::KIND,
                        ),
                    )*
                ];
                FIELDS
            }

            #[allow(unused_variables)]
            fn field(&self, name: &str) -> ::core::option::Option<&dyn $crate::Field> {
                $(
                    if name == ::core::stringify!($field) {
                        return ::core::option::Option::Some(&self.$field);
                    }
                )*
                ::core::option::Option::None
            }

            #[allow(unused_variables)]
            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn $crate::Field> {
                $(
                    if name == ::core::stringify!($field) {
                        return ::core::option::Option::Some(&mut self.$field);
                    }
                )*
                ::core::option::Option::None
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ini_tag {
    () => {
        ::core::option::Option::None
    };
    ($tag:literal) => {
        ::core::option::Option::Some($tag)
    };
}
