//! Field metadata and name resolution
//!
//! Every record handled by the codec exposes a static table of
//! [`FieldDescriptor`]s in declaration order, usually generated by
//! [`ini_record!`](crate::ini_record). The resolver functions scan that table
//! to map external names (tags) to internal field names.

/// Kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// UTF-8 text, stored verbatim after trimming
    Text,
    /// Signed 64-bit integer, base 10
    Integer64,
    /// Nested record (a section when it sits at level 1)
    Record,
    /// Any other scalar; decoding into it is an error
    Unsupported,
}

/// Static description of one declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Internal field name (the Rust identifier)
    pub name: &'static str,
    /// External name attached with `#[ini = "..."]`
    pub tag: Option<&'static str>,
    /// What the field holds
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Create a descriptor
    pub const fn new(name: &'static str, tag: Option<&'static str>, kind: FieldKind) -> Self {
        Self { name, tag, kind }
    }

    /// Name used in the text format: the tag, or the internal name when untagged
    pub fn external_name(&self) -> &'static str {
        self.tag.unwrap_or(self.name)
    }

    /// Whether the field holds a nested record
    pub fn is_record(&self) -> bool {
        self.kind == FieldKind::Record
    }
}

/// Compile-time kind of a field type
///
/// Used by [`ini_record!`](crate::ini_record) to build descriptor tables in
/// const context.
pub trait FieldType {
    /// Kind recorded in the descriptor of fields of this type
    const KIND: FieldKind;
}

/// Mutable view of a supported scalar
#[derive(Debug)]
pub enum ScalarMut<'a> {
    /// Text field
    Text(&'a mut String),
    /// Integer field
    Integer64(&'a mut i64),
}

/// Object-safe access to a single field value
pub trait Field {
    /// The value as a record, if it is one
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    /// The value as a mutable record, if it is one
    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }

    /// Writable scalar slot, `None` for records and unsupported scalars
    fn scalar_mut(&mut self) -> Option<ScalarMut<'_>> {
        None
    }

    /// Textual form written by the encoder, `None` for records
    fn render(&self) -> Option<String>;
}

/// A record whose fields are addressed by internal name
///
/// Implemented by [`ini_record!`](crate::ini_record) for both the top-level
/// configuration and its section records.
pub trait Record {
    /// Declared fields in declaration order
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Field value by internal name
    fn field(&self, name: &str) -> Option<&dyn Field>;

    /// Mutable field value by internal name
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Field>;
}

fn resolve(fields: &'static [FieldDescriptor], external_name: &str) -> Option<&'static str> {
    fields
        .iter()
        .find(|f| f.external_name() == external_name)
        .map(|f| f.name)
}

/// Internal name of the level-1 field whose external name is `external_name`
///
/// Returns `None` when nothing matches; callers decide whether that is an error.
pub fn resolve_section<R: Record + ?Sized>(record: &R, external_name: &str) -> Option<&'static str> {
    resolve(record.fields(), external_name)
}

/// `(external_name, internal_name)` of the level-1 field at `index`
pub fn resolve_section_by_index<R: Record + ?Sized>(
    record: &R,
    index: usize,
) -> Option<(&'static str, &'static str)> {
    record
        .fields()
        .get(index)
        .map(|f| (f.external_name(), f.name))
}

/// Internal name of the item field tagged `external_name`
///
/// Untagged items never match here; see [`resolve_untagged_item`].
pub fn resolve_item<R: Record + ?Sized>(section: &R, external_name: &str) -> Option<&'static str> {
    section
        .fields()
        .iter()
        .find(|f| f.tag == Some(external_name))
        .map(|f| f.name)
}

/// Internal name of the untagged item field named `name`
pub fn resolve_untagged_item<R: Record + ?Sized>(section: &R, name: &str) -> Option<&'static str> {
    section
        .fields()
        .iter()
        .find(|f| f.tag.is_none() && f.name == name)
        .map(|f| f.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::ini_record! {
        #[derive(Debug, Default)]
        struct Server {
            #[ini = "ip"]
            addr: String,
            #[ini = "port"]
            port: i64,
            timeout: i64,
        }
    }

    crate::ini_record! {
        #[derive(Debug, Default)]
        struct Config {
            #[ini = "server"]
            server: Server,
            backup: Server,
            version: i64,
        }
    }

    #[test]
    fn test_descriptor_table_order_and_kinds() {
        let config = Config::default();
        let fields = config.fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], FieldDescriptor::new("server", Some("server"), FieldKind::Record));
        assert_eq!(fields[1].kind, FieldKind::Record);
        assert_eq!(fields[2].kind, FieldKind::Integer64);

        let server = Server::default();
        assert_eq!(server.fields()[0].kind, FieldKind::Text);
        assert_eq!(server.fields()[0].name, "addr");
    }

    #[test]
    fn test_resolve_section_by_tag() {
        let config = Config::default();
        assert_eq!(resolve_section(&config, "server"), Some("server"));
        assert_eq!(resolve_section(&config, "database"), None);
    }

    #[test]
    fn test_resolve_section_untagged_uses_internal_name() {
        let config = Config::default();
        assert_eq!(resolve_section(&config, "backup"), Some("backup"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let config = Config::default();
        assert_eq!(resolve_section(&config, "Server"), None);
    }

    #[test]
    fn test_resolve_section_by_index() {
        let config = Config::default();
        assert_eq!(resolve_section_by_index(&config, 0), Some(("server", "server")));
        assert_eq!(resolve_section_by_index(&config, 1), Some(("backup", "backup")));
        assert_eq!(resolve_section_by_index(&config, 3), None);
    }

    #[test]
    fn test_resolve_item() {
        let server = Server::default();
        assert_eq!(resolve_item(&server, "ip"), Some("addr"));
        assert_eq!(resolve_item(&server, "addr"), None);
        assert_eq!(resolve_item(&server, "timeout"), None);
    }

    #[test]
    fn test_resolve_untagged_item() {
        let server = Server::default();
        assert_eq!(resolve_untagged_item(&server, "timeout"), Some("timeout"));
        assert_eq!(resolve_untagged_item(&server, "addr"), None);
        assert_eq!(resolve_untagged_item(&server, "ip"), None);
    }

    #[test]
    fn test_field_access_by_internal_name() {
        let mut config = Config::default();
        assert!(config.field("server").and_then(|f| f.as_record()).is_some());
        assert!(config.field("version").and_then(|f| f.as_record()).is_none());
        assert!(config.field("missing").is_none());

        let section = config
            .field_mut("server")
            .and_then(|f| f.as_record_mut())
            .unwrap();
        if let Some(ScalarMut::Integer64(port)) = section.field_mut("port").and_then(|f| f.scalar_mut()) {
            *port = 8080;
        }
        assert_eq!(config.server.port, 8080);
    }
}
