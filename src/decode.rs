//! INI text to record decoding

use tracing::{debug, trace};

use crate::error::{IniError, Result, SyntaxErrorKind, TypeErrorKind};
use crate::meta::{Record, ScalarMut, resolve_item, resolve_section, resolve_untagged_item};
use crate::options::{DecodeOptions, UnknownPolicy};

/// Decode INI text into `target` with the default (lenient) options
///
/// Fields are overwritten in place as their lines are read; nothing is reset
/// first. On error the target keeps every value written before the failing
/// line.
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
/// let mut config = Config::default();
/// iniconfig::decode("; listener\n[server]\nport = 119\n", &mut config)?;
/// assert_eq!(config.server.port, 119);
/// assert_eq!(config.server.ip, "");
/// # Ok::<(), iniconfig::IniError>(())
/// ```
///
/// The target must be passed by mutable reference:
///
/// ```compile_fail
/// use iniconfig::ini_record;
///
/// ini_record! {
///     #[derive(Default)]
///     struct Config {
///         version: i64,
///     }
/// }
///
/// let config = Config::default();
/// iniconfig::decode("", config).unwrap();
/// ```
pub fn decode<R: Record + ?Sized>(input: &str, target: &mut R) -> Result<()> {
    decode_with(input, target, &DecodeOptions::default())
}

/// Decode INI text into `target` using `options`
pub fn decode_with<R: Record + ?Sized>(
    input: &str,
    target: &mut R,
    options: &DecodeOptions,
) -> Result<()> {
    let mut current: Option<&'static str> = None;
    let mut sections = 0usize;
    let mut items = 0usize;
    let mut lines = 0usize;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        lines = line_no;
        let line = raw.trim();

        if line.is_empty() || line.starts_with([';', '#']) {
            continue;
        }

        if line.starts_with('[') {
            let name = parse_section(line)
                .ok_or_else(|| IniError::syntax(SyntaxErrorKind::InvalidSection, line_no))?;
            current = resolve_section(&*target, name);
            match current {
                Some(field) => {
                    trace!("Line {}: section [{}] -> {}", line_no, name, field);
                    sections += 1;
                }
                None if options.unknown_sections == UnknownPolicy::Reject => {
                    return Err(IniError::syntax(SyntaxErrorKind::UnknownSection, line_no));
                }
                None => debug!("Line {}: no field for section [{}]", line_no, name),
            }
            continue;
        }

        let section = current
            .ok_or_else(|| IniError::syntax(SyntaxErrorKind::NoActiveSection, line_no))?;
        let (key, value) =
            parse_item(line).map_err(|kind| IniError::syntax(kind, line_no))?;

        if set_item(target, section, key, value, options, line_no)? {
            items += 1;
        }
    }

    debug!(
        "Decoded {} lines: {} sections, {} items assigned",
        lines, sections, items
    );
    Ok(())
}

/// Name inside `[ ... ]`, or `None` if the header is malformed
fn parse_section(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    (!name.is_empty()).then_some(name)
}

/// Split `key = value` on the first `=`
fn parse_item(line: &str) -> std::result::Result<(&str, &str), SyntaxErrorKind> {
    let (key, value) = line.split_once('=').ok_or(SyntaxErrorKind::MissingEquals)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(SyntaxErrorKind::EmptyKey);
    }
    Ok((key, value.trim()))
}

/// Write one item into the section field `section`
///
/// Returns `false` when the key was skipped as unknown.
fn set_item<R: Record + ?Sized>(
    target: &mut R,
    section: &str,
    key: &str,
    value: &str,
    options: &DecodeOptions,
    line_no: usize,
) -> Result<bool> {
    let record = target
        .field_mut(section)
        .and_then(|field| field.as_record_mut())
        .ok_or_else(|| IniError::type_error(TypeErrorKind::SectionNotStruct, line_no))?;

    let name = resolve_item(&*record, key).or_else(|| {
        options
            .match_untagged_items
            .then(|| resolve_untagged_item(&*record, key))
            .flatten()
    });
    let Some(name) = name else {
        if options.unknown_keys == UnknownPolicy::Reject {
            return Err(IniError::syntax(SyntaxErrorKind::UnknownKey, line_no));
        }
        debug!("Line {}: no field for key '{}' in {}", line_no, key, section);
        return Ok(false);
    };

    let slot = record
        .field_mut(name)
        .and_then(|field| field.scalar_mut())
        .ok_or_else(|| IniError::type_error(TypeErrorKind::UnsupportedFieldType, line_no))?;

    match slot {
        ScalarMut::Text(text) => {
            text.clear();
            text.push_str(value);
        }
        ScalarMut::Integer64(number) => {
            *number = value
                .parse::<i64>()
                .map_err(|_| IniError::syntax(SyntaxErrorKind::NotAnInteger, line_no))?;
        }
    }

    trace!("Line {}: {}.{} = {}", line_no, section, name, value);
    Ok(true)
}
