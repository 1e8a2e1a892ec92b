// crates/gazetteer-core/src/codec.rs

//! # Binary codec
//!
//! Fixed, deterministic artifact layout:
//!
//! - record count as u64 little-endian, then that many records;
//! - string fields as u32 little-endian byte length + UTF-8 bytes;
//! - floats as IEEE-754 binary64 little-endian;
//! - capital status as one byte (0=Primary, 1=Admin, 2=Minor, 3=None);
//! - population as i64 little-endian two's complement;
//! - fields in [`CityRecord`] declaration order.
//!
//! Identical gazetteer content always produces byte-identical output.

use crate::error::{DecodeError, GazetteerError, Result};
use crate::model::{CapitalStatus, CityRecord, Gazetteer};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

impl Gazetteer {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_artifact_filename() -> &'static str {
        "worldcities.bin"
    }

    pub fn default_artifact_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_artifact_filename())
    }

    /// Encodes the gazetteer into a fresh byte buffer.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&(self.records.len() as u64).to_le_bytes());
        for record in &self.records {
            encode_record(&mut buf, record);
        }
        buf
    }

    /// Decodes an artifact produced by [`Gazetteer::encode`]. The whole
    /// input must be consumed; leftover bytes are an error.
    pub fn decode(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        let mut reader = SliceReader { bytes, pos: 0 };
        let count = reader.read_u64("record count")?;

        // The count is untrusted input; cap the preallocation.
        let mut records = Vec::with_capacity(count.min(1 << 20) as usize);
        for _ in 0..count {
            records.push(decode_record(&mut reader)?);
        }

        if reader.pos != bytes.len() {
            return Err(DecodeError::TrailingBytes);
        }
        Ok(Self { records })
    }

    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref()).map_err(GazetteerError::Io)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&self.encode()).map_err(GazetteerError::Io)?;
        writer.flush().map_err(GazetteerError::Io)?;
        Ok(())
    }

    pub fn read_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| {
            GazetteerError::NotFound(format!("Artifact not found at {}: {}", path.display(), e))
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(GazetteerError::Io)?;
        Ok(Self::decode(&bytes)?)
    }
}

fn encode_record(buf: &mut Vec<u8>, record: &CityRecord) {
    encode_str(buf, &record.name);
    encode_str(buf, &record.search_name);
    encode_str(buf, &record.zip_code);
    buf.extend_from_slice(&record.latitude.to_le_bytes());
    buf.extend_from_slice(&record.longitude.to_le_bytes());
    encode_str(buf, &record.country);
    encode_str(buf, &record.iso2);
    encode_str(buf, &record.iso3);
    encode_str(buf, &record.admin_name);
    encode_str(buf, &record.state_id);
    encode_str(buf, &record.state_abbreviation);
    buf.push(record.capitol.code());
    buf.extend_from_slice(&record.population.to_le_bytes());
}

fn encode_str(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
}

fn decode_record(r: &mut SliceReader<'_>) -> std::result::Result<CityRecord, DecodeError> {
    Ok(CityRecord {
        name: r.read_string("name")?,
        search_name: r.read_string("search name")?,
        zip_code: r.read_string("zip code")?,
        latitude: r.read_f64("latitude")?,
        longitude: r.read_f64("longitude")?,
        country: r.read_string("country")?,
        iso2: r.read_string("iso2")?,
        iso3: r.read_string("iso3")?,
        admin_name: r.read_string("admin name")?,
        state_id: r.read_string("state id")?,
        state_abbreviation: r.read_string("state abbreviation")?,
        capitol: {
            let tag = r.read_u8("capital status")?;
            CapitalStatus::from_code(tag).ok_or(DecodeError::InvalidCapitalTag(tag))?
        },
        population: r.read_i64("population")?,
    })
}

/// Cursor over the artifact bytes. Every read names the field it was
/// after so truncation errors point at the spot that fell short.
struct SliceReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceReader<'a> {
    fn take(&mut self, n: usize, what: &'static str) -> std::result::Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(DecodeError::Truncated(what))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u8(&mut self, what: &'static str) -> std::result::Result<u8, DecodeError> {
        Ok(self.take(1, what)?[0])
    }

    fn read_u32(&mut self, what: &'static str) -> std::result::Result<u32, DecodeError> {
        let mut arr = [0u8; 4];
        arr.copy_from_slice(self.take(4, what)?);
        Ok(u32::from_le_bytes(arr))
    }

    fn read_u64(&mut self, what: &'static str) -> std::result::Result<u64, DecodeError> {
        let mut arr = [0u8; 8];
        arr.copy_from_slice(self.take(8, what)?);
        Ok(u64::from_le_bytes(arr))
    }

    fn read_i64(&mut self, what: &'static str) -> std::result::Result<i64, DecodeError> {
        let mut arr = [0u8; 8];
        arr.copy_from_slice(self.take(8, what)?);
        Ok(i64::from_le_bytes(arr))
    }

    fn read_f64(&mut self, what: &'static str) -> std::result::Result<f64, DecodeError> {
        let mut arr = [0u8; 8];
        arr.copy_from_slice(self.take(8, what)?);
        Ok(f64::from_le_bytes(arr))
    }

    fn read_string(&mut self, what: &'static str) -> std::result::Result<String, DecodeError> {
        let len = self.read_u32(what)? as usize;
        let bytes = self.take(len, what)?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}
