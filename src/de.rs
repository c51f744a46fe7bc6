//! Decoding NBT bytes into [`Value`] trees.
//!
//! All decoding funnels through one `match` on [`Tag`]: lists and compounds
//! re-enter it for their children rather than carrying any per-variant
//! knowledge of their own.

use byteorder::{BigEndian, ReadBytesExt};

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::value::Name;
use crate::{Tag, Value};

/// Containers nested deeper than this are treated as malformed input. The
/// decoder recurses per container level, so unbounded nesting would
/// otherwise exhaust the stack.
pub(crate) const MAX_DEPTH: usize = 512;

/// Decode exactly one full tag (type id, name, payload) from `data`.
/// Trailing bytes are an error; use [`crate::Document::from_bytes`] for
/// buffers holding several root tags.
pub fn from_bytes(data: &[u8]) -> Result<Value> {
    let mut cursor = Cursor::new(data);
    let value = read_root(&mut cursor)?;
    if cursor.has_more() {
        return Err(Error::bespoke("trailing bytes after root tag"));
    }
    Ok(value)
}

/// Decode one full root tag at the cursor. An End tag is only meaningful
/// inside a compound, so at root level it is malformed.
pub(crate) fn read_root(cursor: &mut Cursor) -> Result<Value> {
    read_tag(cursor, 0)?.ok_or_else(|| Error::bespoke("end tag outside compound"))
}

/// Read one full tag: type id, name, payload. Returns `None` for an End
/// tag, which is a bare terminator byte carrying neither name nor payload.
fn read_tag(cursor: &mut Cursor, depth: usize) -> Result<Option<Value>> {
    let id = cursor.read_u8()?;
    let tag = Tag::try_from(id).map_err(|_| Error::invalid_tag(id))?;
    if tag == Tag::End {
        return Ok(None);
    }

    let name = read_string(cursor)?;
    read_payload(cursor, tag, Some(name), depth).map(Some)
}

/// Read a length-prefixed string. The prefix is interpreted as a *signed*
/// short, matching what producers of this format have historically done;
/// a negative length is malformed.
fn read_string(cursor: &mut Cursor) -> Result<String> {
    let len = cursor.read_i16()?;
    if len < 0 {
        return Err(Error::negative_length("string", len as i32));
    }

    let bs = cursor.read(len as usize)?;
    Ok(cesu8::from_java_cesu8(bs)
        .map_err(|_| Error::nonunicode(bs))?
        .into_owned())
}

/// Read an array length prefix. The count is signed on the wire but must
/// not be negative.
fn read_array_len(cursor: &mut Cursor) -> Result<usize> {
    let len = cursor.read_i32()?;
    usize::try_from(len).map_err(|_| Error::negative_length("array", len))
}

/// Reserve the full byte span of an array before allocating for it, so a
/// hostile length prefix cannot request more memory than the input holds.
fn read_array_bytes<'a>(cursor: &mut Cursor<'a>, len: usize, width: usize) -> Result<&'a [u8]> {
    let total = len
        .checked_mul(width)
        .ok_or_else(|| Error::bespoke("array byte size overflows"))?;
    cursor.read(total)
}

fn read_payload(cursor: &mut Cursor, tag: Tag, name: Name, depth: usize) -> Result<Value> {
    Ok(match tag {
        Tag::Byte => Value::Byte(name, cursor.read_i8()?),
        Tag::Short => Value::Short(name, cursor.read_i16()?),
        Tag::Int => Value::Int(name, cursor.read_i32()?),
        Tag::Long => Value::Long(name, cursor.read_i64()?),
        Tag::Float => Value::Float(name, cursor.read_f32()?),
        Tag::Double => Value::Double(name, cursor.read_f64()?),
        Tag::ByteArray => {
            let len = read_array_len(cursor)?;
            let bs = cursor.read(len)?;
            Value::ByteArray(name, bs.iter().map(|&b| b as i8).collect())
        }
        Tag::String => Value::String(name, read_string(cursor)?),
        Tag::List => Value::List(name, read_list(cursor, depth)?),
        Tag::Compound => Value::Compound(name, read_compound(cursor, depth)?),
        Tag::IntArray => {
            let len = read_array_len(cursor)?;
            let mut bs = read_array_bytes(cursor, len, std::mem::size_of::<i32>())?;
            let mut data = Vec::with_capacity(len);
            for _ in 0..len {
                data.push(bs.read_i32::<BigEndian>()?);
            }
            Value::IntArray(name, data)
        }
        Tag::LongArray => {
            let len = read_array_len(cursor)?;
            let mut bs = read_array_bytes(cursor, len, std::mem::size_of::<i64>())?;
            let mut data = Vec::with_capacity(len);
            for _ in 0..len {
                data.push(bs.read_i64::<BigEndian>()?);
            }
            Value::LongArray(name, data)
        }
        // End is filtered out by read_tag and rejected as a list element
        // type, so it can never ask for a payload.
        Tag::End => unreachable!("end tag has no payload"),
    })
}

fn read_list(cursor: &mut Cursor, depth: usize) -> Result<Vec<Value>> {
    if depth >= MAX_DEPTH {
        return Err(Error::depth_limit(MAX_DEPTH));
    }

    let element_id = cursor.read_u8()?;
    let len = cursor.read_i32()?;

    // A non-positive length means an empty list, and then the element id
    // may be any byte at all: producers disagree on what to put there, so
    // it is deliberately not validated.
    if len <= 0 {
        return Ok(Vec::new());
    }

    let element_tag = Tag::try_from(element_id).map_err(|_| Error::invalid_tag(element_id))?;
    if element_tag == Tag::End {
        // End has no payload, so a non-empty list of it is undecodable.
        return Err(Error::invalid_tag(element_id));
    }

    // Each element takes at least one byte, which bounds a hostile count.
    let mut elements = Vec::with_capacity((len as usize).min(cursor.remaining()));
    for _ in 0..len {
        elements.push(read_payload(cursor, element_tag, None, depth + 1)?);
    }
    Ok(elements)
}

fn read_compound(cursor: &mut Cursor, depth: usize) -> Result<Vec<Value>> {
    if depth >= MAX_DEPTH {
        return Err(Error::depth_limit(MAX_DEPTH));
    }

    // The End terminator comes back as None and is consumed, never stored.
    // A compound missing it runs the cursor out of bytes instead.
    let mut children = Vec::new();
    while let Some(child) = read_tag(cursor, depth + 1)? {
        children.push(child);
    }
    Ok(children)
}
