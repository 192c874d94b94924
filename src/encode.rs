//! Record to INI text encoding

use tracing::{debug, trace};

use crate::meta::Record;

/// Encode a record as INI text
///
/// Each record-typed field becomes a `[name]` header followed by one
/// `key = value` line per item, in declaration order, with no blank lines
/// between sections. Top-level fields that are not records are skipped, as
/// are records nested inside a section.
///
/// # Example
/// ```
/// use iniconfig::ini_record;
///
/// ini_record! {
///     #[derive(Default)]
///     struct Server {
///         #[ini = "ip"]
///         ip: String,
///         #[ini = "port"]
///         port: i64,
///     }
/// }
///
/// ini_record! {
///     #[derive(Default)]
///     struct Config {
///         #[ini = "server"]
///         server: Server,
///     }
/// }
///
/// let config = Config {
///     server: Server { ip: "10.0.0.1".into(), port: 8080 },
/// };
/// assert_eq!(iniconfig::encode(&config), "[server]\nip = 10.0.0.1\nport = 8080\n");
/// ```
pub fn encode<R: Record + ?Sized>(value: &R) -> String {
    let mut output = String::new();
    let mut sections = 0usize;

    for descriptor in value.fields() {
        let Some(section) = value
            .field(descriptor.name)
            .and_then(|field| field.as_record())
        else {
            trace!("Skipping non-record field {}", descriptor.name);
            continue;
        };

        output.push('[');
        output.push_str(descriptor.external_name());
        output.push_str("]\n");
        sections += 1;

        for item in section.fields() {
            let Some(rendered) = section.field(item.name).and_then(|field| field.render()) else {
                trace!("Skipping nested record {}.{}", descriptor.name, item.name);
                continue;
            };
            output.push_str(item.external_name());
            output.push_str(" = ");
            output.push_str(&rendered);
            output.push('\n');
        }
    }

    debug!("Encoded {} sections ({} bytes)", sections, output.len());
    output
}
