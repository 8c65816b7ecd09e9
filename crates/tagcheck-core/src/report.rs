//! Result output as indented JSON.

use std::io::{self, Write};

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::evaluate::ResultMap;

/// Indentation used for every nesting level.
const INDENT: &[u8] = b"    ";

fn write_json<W: Write>(results: &ResultMap, out: W) -> serde_json::Result<()> {
    let mut serializer = Serializer::with_formatter(out, PrettyFormatter::with_indent(INDENT));
    results.serialize(&mut serializer)
}

/// Render `results` as a JSON object indented by four spaces.
///
/// # Errors
///
/// Returns the `serde_json` error if serialization fails.
pub fn to_pretty_json(results: &ResultMap) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    write_json(results, &mut buf)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

/// Write `results` to `out` as indented JSON followed by a newline.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn present<W: Write>(results: &ResultMap, out: &mut W) -> io::Result<()> {
    write_json(results, &mut *out).map_err(io::Error::from)?;
    out.write_all(b"\n")?;
    out.flush()
}
