//! Fixed-length record codec
//!
//! Encoded record format:
//!
//! ```text
//! +------------------+
//! | Column 0         | int: 4 bytes BE, float: 4 bytes BE IEEE-754,
//! +------------------+ bool: 1 byte (0x01 / 0x00),
//! | Column 1         | string: declared width, raw bytes
//! +------------------+
//! | ...              |
//! +------------------+
//! ```
//!
//! The buffer is exactly `entry_size` bytes. There is no header, no null
//! bitmap and no padding between columns.

use super::errors::{SchemaError, SchemaResult};
use super::record::Record;
use super::types::Schema;
use crate::datatypes::{DataType, FixedText, Value};

impl Schema {
    /// Serializes a verified record.
    ///
    /// The record must have come from [`verify`](Self::verify) or
    /// [`decode`](Self::decode) against a schema equal to this one; it is not
    /// validated again. Such a record always encodes to exactly
    /// [`entry_size`](Self::entry_size) bytes.
    pub fn encode(&self, record: &Record) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.entry_size());
        for value in record {
            put_value(&mut buf, value);
        }
        debug_assert_eq!(buf.len(), self.entry_size());
        buf
    }

    /// Serializes a verified record into a caller-supplied buffer.
    ///
    /// Returns the number of bytes written. Bytes past that are untouched.
    ///
    /// # Errors
    ///
    /// Returns `FIXROW_BUFFER_TOO_SMALL` if `buf` cannot hold the record.
    pub fn encode_into(&self, record: &Record, buf: &mut [u8]) -> SchemaResult<usize> {
        let required = record.encoded_len();
        if buf.len() < required {
            return Err(SchemaError::buffer_too_small(required, buf.len()));
        }

        let mut offset = 0;
        for value in record {
            let width = value.width();
            write_value(&mut buf[offset..offset + width], value);
            offset += width;
        }

        Ok(offset)
    }

    /// Deserializes a record produced by [`encode`](Self::encode).
    ///
    /// Reads exactly `entry_size` bytes; anything after that is ignored.
    ///
    /// # Errors
    ///
    /// Returns `FIXROW_BUFFER_UNDERRUN` (FATAL) if `input` is shorter than
    /// `entry_size`.
    pub fn decode(&self, input: &[u8]) -> SchemaResult<Record> {
        if input.len() < self.entry_size() {
            return Err(SchemaError::buffer_underrun(self.entry_size(), input.len()));
        }

        let mut values = Vec::with_capacity(self.column_count());
        let mut rest = input;
        for declared in self.field_types() {
            let (chunk, tail) = rest.split_at(declared.width());
            values.push(read_value(chunk, declared));
            rest = tail;
        }

        Ok(Record::new(values))
    }

    /// Deserializes the single column at `index` without decoding the rest.
    ///
    /// # Errors
    ///
    /// Returns `FIXROW_UNKNOWN_COLUMN` if `index` is out of range, or
    /// `FIXROW_BUFFER_UNDERRUN` (FATAL) if `input` is shorter than
    /// `entry_size`.
    pub fn decode_column(&self, input: &[u8], index: usize) -> SchemaResult<Value> {
        let (offset, declared) = self
            .column_offset(index)
            .zip(self.field_types().get(index))
            .ok_or_else(|| SchemaError::unknown_column(index, self.column_count()))?;

        if input.len() < self.entry_size() {
            return Err(SchemaError::buffer_underrun(self.entry_size(), input.len()));
        }

        Ok(read_value(&input[offset..offset + declared.width()], declared))
    }
}

fn put_value(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Int(n) => buf.extend_from_slice(&n.to_be_bytes()),
        Value::Float(n) => buf.extend_from_slice(&n.to_be_bytes()),
        Value::Bool(b) => buf.push(if *b { 0x1 } else { 0x0 }),
        Value::String(text) => buf.extend_from_slice(text.as_bytes()),
    }
}

/// `dst` is exactly `value.width()` bytes
fn write_value(dst: &mut [u8], value: &Value) {
    match value {
        Value::Int(n) => dst.copy_from_slice(&n.to_be_bytes()),
        Value::Float(n) => dst.copy_from_slice(&n.to_be_bytes()),
        Value::Bool(b) => dst[0] = if *b { 0x1 } else { 0x0 },
        Value::String(text) => dst.copy_from_slice(text.as_bytes()),
    }
}

/// `chunk` is exactly `declared.width()` bytes
fn read_value(chunk: &[u8], declared: &DataType) -> Value {
    match declared {
        DataType::Int => Value::Int(i32::from_be_bytes(word(chunk))),
        DataType::Float => Value::Float(f32::from_be_bytes(word(chunk))),
        DataType::Bool => Value::Bool(chunk[0] == 0x1),
        DataType::String { .. } => Value::String(FixedText::from_bytes(chunk)),
    }
}

fn word(chunk: &[u8]) -> [u8; 4] {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(chunk);
    bytes
}
