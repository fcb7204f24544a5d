//! OPC package writer (the zip container of a `.docx` file).

use std::io::Write;

use chrono::{DateTime, Datelike, Timelike, Utc};
use flate2::write::DeflateEncoder;
use flate2::{Compression, Crc};

use crate::error::{Error, Result};

const LOCAL_HEADER_SIG: u32 = 0x0403_4b50;
const CENTRAL_HEADER_SIG: u32 = 0x0201_4b50;
const END_OF_CENTRAL_DIR_SIG: u32 = 0x0605_4b50;
const VERSION: u16 = 20;
/// General purpose flag bit 11: names are UTF-8.
const FLAG_UTF8: u16 = 0x0800;
const METHOD_STORED: u16 = 0;
const METHOD_DEFLATE: u16 = 8;

/// How package parts are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageCompression {
    /// Deflate each part
    #[default]
    Deflate,
    /// Store parts uncompressed
    Stored,
}

impl PackageCompression {
    fn method(&self) -> u16 {
        match self {
            PackageCompression::Deflate => METHOD_DEFLATE,
            PackageCompression::Stored => METHOD_STORED,
        }
    }
}

struct CentralEntry {
    name: String,
    crc: u32,
    compressed_size: u32,
    size: u32,
    offset: u32,
}

/// Writes parts into an in-memory zip archive.
pub struct PackageWriter {
    buf: Vec<u8>,
    entries: Vec<CentralEntry>,
    compression: PackageCompression,
    dos_time: u16,
    dos_date: u16,
}

impl PackageWriter {
    /// Create a writer. `modified` stamps every entry; `None` uses 1980-01-01.
    pub fn new(compression: PackageCompression, modified: Option<DateTime<Utc>>) -> Self {
        let (dos_time, dos_date) = modified.map(dos_timestamp).unwrap_or((0, 0x21));
        Self {
            buf: Vec::new(),
            entries: Vec::new(),
            compression,
            dos_time,
            dos_date,
        }
    }

    /// Add a part to the package.
    pub fn add(&mut self, name: &str, data: &[u8]) -> Result<()> {
        let mut crc = Crc::new();
        crc.update(data);

        let payload = match self.compression {
            PackageCompression::Deflate => {
                let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
                encoder
                    .write_all(data)
                    .and_then(|_| encoder.finish())
                    .map_err(|e| Error::Encode(format!("deflate {}: {}", name, e)))?
            }
            PackageCompression::Stored => data.to_vec(),
        };

        let entry = CentralEntry {
            name: name.to_string(),
            crc: crc.sum(),
            compressed_size: to_u32(payload.len(), name)?,
            size: to_u32(data.len(), name)?,
            offset: to_u32(self.buf.len(), name)?,
        };

        self.put_u32(LOCAL_HEADER_SIG);
        self.put_u16(VERSION);
        self.put_u16(FLAG_UTF8);
        self.put_u16(self.compression.method());
        self.put_u16(self.dos_time);
        self.put_u16(self.dos_date);
        self.put_u32(entry.crc);
        self.put_u32(entry.compressed_size);
        self.put_u32(entry.size);
        self.put_u16(to_u16(name.len(), name)?);
        self.put_u16(0);
        self.buf.extend_from_slice(name.as_bytes());
        self.buf.extend_from_slice(&payload);

        log::trace!(
            "Packaged {} ({} -> {} bytes)",
            name,
            entry.size,
            entry.compressed_size
        );
        self.entries.push(entry);
        Ok(())
    }

    /// Write the central directory and return the archive bytes.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let directory_offset = to_u32(self.buf.len(), "central directory")?;
        let entries = std::mem::take(&mut self.entries);

        for entry in &entries {
            self.put_u32(CENTRAL_HEADER_SIG);
            self.put_u16(VERSION);
            self.put_u16(VERSION);
            self.put_u16(FLAG_UTF8);
            self.put_u16(self.compression.method());
            self.put_u16(self.dos_time);
            self.put_u16(self.dos_date);
            self.put_u32(entry.crc);
            self.put_u32(entry.compressed_size);
            self.put_u32(entry.size);
            self.put_u16(to_u16(entry.name.len(), &entry.name)?);
            self.put_u16(0); // extra
            self.put_u16(0); // comment
            self.put_u16(0); // disk
            self.put_u16(0); // internal attributes
            self.put_u32(0); // external attributes
            self.put_u32(entry.offset);
            self.buf.extend_from_slice(entry.name.as_bytes());
        }

        let directory_size = to_u32(self.buf.len(), "central directory")? - directory_offset;
        let count = to_u16(entries.len(), "entry count")?;

        self.put_u32(END_OF_CENTRAL_DIR_SIG);
        self.put_u16(0);
        self.put_u16(0);
        self.put_u16(count);
        self.put_u16(count);
        self.put_u32(directory_size);
        self.put_u32(directory_offset);
        self.put_u16(0);

        Ok(self.buf)
    }

    fn put_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    fn put_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }
}

fn to_u32(value: usize, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::Encode(format!("{} exceeds zip size limit", what)))
}

fn to_u16(value: usize, what: &str) -> Result<u16> {
    u16::try_from(value).map_err(|_| Error::Encode(format!("{} exceeds zip field limit", what)))
}

/// MS-DOS (time, date) pair. Dates before 1980 clamp to 1980-01-01.
fn dos_timestamp(at: DateTime<Utc>) -> (u16, u16) {
    if at.year() < 1980 {
        return (0, 0x21);
    }
    let year = (at.year() - 1980).min(127) as u16;
    let date = (year << 9) | ((at.month() as u16) << 5) | at.day() as u16;
    let time = ((at.hour() as u16) << 11) | ((at.minute() as u16) << 5) | (at.second() as u16 / 2);
    (time, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use flate2::read::DeflateDecoder;
    use std::io::Read;

    fn read_u16(data: &[u8], at: usize) -> u16 {
        u16::from_le_bytes([data[at], data[at + 1]])
    }

    fn read_u32(data: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
    }

    #[test]
    fn test_stored_entry_layout() {
        let mut writer = PackageWriter::new(PackageCompression::Stored, None);
        writer.add("a.txt", b"hello").unwrap();
        let zip = writer.finish().unwrap();

        assert_eq!(read_u32(&zip, 0), LOCAL_HEADER_SIG);
        assert_eq!(read_u16(&zip, 8), METHOD_STORED);
        assert_eq!(read_u32(&zip, 18), 5);
        assert_eq!(read_u32(&zip, 22), 5);
        assert_eq!(&zip[30..35], b"a.txt");
        assert_eq!(&zip[35..40], b"hello");

        // End of central directory record is the last 22 bytes
        let eocd = zip.len() - 22;
        assert_eq!(read_u32(&zip, eocd), END_OF_CENTRAL_DIR_SIG);
        assert_eq!(read_u16(&zip, eocd + 10), 1);
        let directory_offset = read_u32(&zip, eocd + 16) as usize;
        assert_eq!(read_u32(&zip, directory_offset), CENTRAL_HEADER_SIG);
    }

    #[test]
    fn test_deflate_entry_roundtrip() {
        let text = "repeat ".repeat(200);
        let mut writer = PackageWriter::new(PackageCompression::Deflate, None);
        writer.add("word/document.xml", text.as_bytes()).unwrap();
        let zip = writer.finish().unwrap();

        assert_eq!(read_u16(&zip, 8), METHOD_DEFLATE);
        let compressed_size = read_u32(&zip, 18) as usize;
        assert!(compressed_size < text.len());

        let name_len = read_u16(&zip, 26) as usize;
        let start = 30 + name_len;
        let mut decoder = DeflateDecoder::new(&zip[start..start + compressed_size]);
        let mut out = String::new();
        decoder.read_to_string(&mut out).unwrap();
        assert_eq!(out, text);

        let mut crc = Crc::new();
        crc.update(text.as_bytes());
        assert_eq!(read_u32(&zip, 14), crc.sum());
    }

    #[test]
    fn test_dos_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 44).unwrap();
        let (time, date) = dos_timestamp(at);
        assert_eq!(date, (44 << 9) | (3 << 5) | 15);
        assert_eq!(time, (10 << 11) | (30 << 5) | 22);

        let early = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(dos_timestamp(early), (0, 0x21));
    }
}
