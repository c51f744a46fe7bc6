//! Encoding [`Value`] trees into NBT bytes.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{Tag, Value};

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag.into())?;
        Ok(())
    }

    /// Write a length-prefixed string. The prefix is a signed short,
    /// mirroring the decoder, so oversized strings are refused rather than
    /// silently truncated.
    fn write_str(&mut self, s: &str) -> Result<()> {
        let bs = cesu8::to_java_cesu8(s);
        let len: i16 = bs
            .len()
            .try_into()
            .map_err(|_| Error::bespoke(format!("string of {} bytes is too long", bs.len())))?;
        self.write_i16::<BigEndian>(len)?;
        self.write_all(&bs)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        let len: i32 = len
            .try_into()
            .map_err(|_| Error::bespoke(format!("length {} does not fit in an int", len)))?;
        self.write_i32::<BigEndian>(len)?;
        Ok(())
    }
}

impl<T: Write> WriteNbt for T {}

/// Encode one full tag: type id, name, payload. An unnamed value goes out
/// with the empty name, which is what root tags conventionally carry.
pub fn to_bytes(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_full(&mut out, value)?;
    Ok(out)
}

pub(crate) fn write_full<W: Write>(writer: &mut W, value: &Value) -> Result<()> {
    writer.write_tag(value.tag())?;
    writer.write_str(value.name().unwrap_or(""))?;
    write_payload(writer, value)
}

fn write_payload<W: Write>(writer: &mut W, value: &Value) -> Result<()> {
    match value {
        Value::Byte(_, v) => writer.write_i8(*v)?,
        Value::Short(_, v) => writer.write_i16::<BigEndian>(*v)?,
        Value::Int(_, v) => writer.write_i32::<BigEndian>(*v)?,
        Value::Long(_, v) => writer.write_i64::<BigEndian>(*v)?,
        // byteorder writes the raw bit pattern, so NaN payloads and signed
        // zero survive unchanged.
        Value::Float(_, v) => writer.write_f32::<BigEndian>(*v)?,
        Value::Double(_, v) => writer.write_f64::<BigEndian>(*v)?,
        Value::ByteArray(_, data) => {
            writer.write_len(data.len())?;
            for b in data {
                writer.write_i8(*b)?;
            }
        }
        Value::String(_, s) => writer.write_str(s)?,
        Value::List(_, elements) => write_list(writer, elements)?,
        Value::Compound(_, children) => {
            for child in children {
                write_full(writer, child)?;
            }
            writer.write_tag(Tag::End)?;
        }
        Value::IntArray(_, data) => {
            writer.write_len(data.len())?;
            for v in data {
                writer.write_i32::<BigEndian>(*v)?;
            }
        }
        Value::LongArray(_, data) => {
            writer.write_len(data.len())?;
            for v in data {
                writer.write_i64::<BigEndian>(*v)?;
            }
        }
    }
    Ok(())
}

fn write_list<W: Write>(writer: &mut W, elements: &[Value]) -> Result<()> {
    // An empty list always goes out as element type End with length zero,
    // whatever type it may have been built with.
    let element_tag = match elements.first() {
        None => {
            writer.write_tag(Tag::End)?;
            writer.write_len(0)?;
            return Ok(());
        }
        Some(first) => first.tag(),
    };

    // Homogeneity is checked up front, before the list header is written.
    if let Some(odd) = elements.iter().find(|e| e.tag() != element_tag) {
        return Err(Error::heterogeneous_list(element_tag, odd.tag()));
    }

    writer.write_tag(element_tag)?;
    writer.write_len(elements.len())?;
    for element in elements {
        // Payload only: list elements carry no type id and no name.
        write_payload(writer, element)?;
    }
    Ok(())
}
