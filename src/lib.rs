//! nbtree is a tree-based codec for the NBT format used by *Minecraft: Java
//! Edition*. It decodes a byte buffer into an owned tree of tags and encodes
//! such a tree back into bytes, byte-exactly.
//!
//! * [`Document`] holds the root-level tags of one buffer and drives
//!   decoding and encoding.
//! * [`Value`] is one node of the tree: a typed, optionally named unit of
//!   data. Lists and compounds own their children recursively.
//! * [`Dump`] is a generic `{type, name, payload}` projection of a tree,
//!   suitable for handing to `serde_json` or a tree printer.
//!
//! Compression is not this crate's business. NBT files are often gzipped;
//! decompress first (for example with `flate2`) and hand the raw bytes in.
//!
//! # Quick example
//!
//! Decode a compound holding a single byte, then re-encode it:
//!
//! ```
//! use nbtree::{Document, Value};
//!
//! let data = [0x0a, 0x00, 0x00, 0x01, 0x00, 0x01, 0x61, 0x05, 0x00];
//! let doc = Document::from_bytes(&data)?;
//!
//! match &doc.tags()[0] {
//!     Value::Compound(name, children) => {
//!         assert_eq!(name.as_deref(), Some(""));
//!         assert_eq!(children[0], Value::Byte(Some("a".to_string()), 5));
//!     }
//!     other => panic!("expected a compound, got {:?}", other),
//! }
//!
//! assert_eq!(doc.to_bytes()?, data);
//! # Ok::<(), nbtree::error::Error>(())
//! ```

pub mod cursor;
pub mod error;

mod de;
mod doc;
mod dump;
mod ser;
mod value;

pub use de::from_bytes;
pub use doc::Document;
pub use dump::{Dump, DumpPayload};
pub use ser::to_bytes;
pub use value::{Name, Value};

#[cfg(test)]
mod test;

/// An NBT tag type id, as it appears on the wire. This identifies the shape
/// of a payload but carries neither the name nor the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Terminates a Compound. Never part of a decoded tree.
    End = 0,
    /// A single i8.
    Byte = 1,
    /// A single big-endian i16.
    Short = 2,
    /// A single big-endian i32.
    Int = 3,
    /// A single big-endian i64.
    Long = 4,
    /// An IEEE-754 f32, bit patterns preserved.
    Float = 5,
    /// An IEEE-754 f64, bit patterns preserved.
    Double = 6,
    /// A length-prefixed array of i8.
    ByteArray = 7,
    /// A length-prefixed string.
    String = 8,
    /// A count-prefixed sequence of unnamed elements sharing one type.
    List = 9,
    /// A sequence of named tags terminated by [`Tag::End`].
    Compound = 10,
    /// A length-prefixed array of i32.
    IntArray = 11,
    /// A length-prefixed array of i64.
    LongArray = 12,
}

// A derive crate could produce these conversions, but the tag set is frozen
// by the format, so writing them out costs little and keeps compile times
// down.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

impl Tag {
    /// The classic display name of this tag type, e.g. `TAG_Byte_Array`.
    /// Used by the structural dump and by tools that print trees.
    pub fn name(self) -> &'static str {
        match self {
            Tag::End => "TAG_End",
            Tag::Byte => "TAG_Byte",
            Tag::Short => "TAG_Short",
            Tag::Int => "TAG_Int",
            Tag::Long => "TAG_Long",
            Tag::Float => "TAG_Float",
            Tag::Double => "TAG_Double",
            Tag::ByteArray => "TAG_Byte_Array",
            Tag::String => "TAG_String",
            Tag::List => "TAG_List",
            Tag::Compound => "TAG_Compound",
            Tag::IntArray => "TAG_Int_Array",
            Tag::LongArray => "TAG_Long_Array",
        }
    }
}
