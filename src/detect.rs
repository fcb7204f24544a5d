//! Input shape detection for delta payloads and Word packages.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Shape of a delta JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaFormat {
    /// `{"ops": [...]}`, as produced by `getContents()`
    Wrapped,
    /// `[...]`, a bare operation array
    Bare,
}

impl std::fmt::Display for DeltaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeltaFormat::Wrapped => write!(f, "delta (ops object)"),
            DeltaFormat::Bare => write!(f, "delta (operation array)"),
        }
    }
}

/// Zip local file header magic, the first bytes of every `.docx`.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Detect the delta shape from the start of a file.
///
/// # Example
/// ```no_run
/// use deltadoc::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("delta.json").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DeltaFormat> {
    let file = File::open(path)?;
    let header = read_header(BufReader::new(file))?;
    detect_format_from_bytes(&header)
}

/// Read leading bytes until two significant bytes past any BOM (and at
/// least the zip magic) have been seen, or the input ends.
fn read_header<R: Read>(reader: R) -> Result<Vec<u8>> {
    let mut header = Vec::new();
    let mut significant = 0;

    for byte in reader.bytes() {
        let byte = byte?;
        header.push(byte);
        let in_bom = header.len() <= UTF8_BOM.len() && UTF8_BOM.starts_with(&header);
        if !in_bom && !byte.is_ascii_whitespace() {
            significant += 1;
        }
        if significant >= 2 && header.len() >= ZIP_MAGIC.len() {
            break;
        }
    }
    Ok(header)
}

/// Detect the delta shape from leading bytes.
///
/// Only the first structural characters are inspected; the payload is not
/// validated.
///
/// # Returns
/// * `Ok(DeltaFormat)` if the data looks like a delta
/// * `Err(Error::InvalidDelta)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DeltaFormat> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let mut significant = data.iter().copied().filter(|b| !b.is_ascii_whitespace());

    match (significant.next(), significant.next()) {
        (Some(b'['), _) => Ok(DeltaFormat::Bare),
        (Some(b'{'), Some(b'"')) | (Some(b'{'), Some(b'}')) => Ok(DeltaFormat::Wrapped),
        _ if is_docx_bytes(data) => Err(Error::InvalidDelta(
            "input is a Word package, not a delta".to_string(),
        )),
        _ => Err(Error::InvalidDelta(
            "input does not start with a JSON object or array".to_string(),
        )),
    }
}

/// Check whether bytes start like a zip (and so possibly `.docx`) package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

/// Check whether a file looks like a delta.
pub fn is_delta<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}
