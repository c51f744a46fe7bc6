//! The top-level document: the ordered root tags of one buffer.

use std::io::{Read, Write};

use crate::cursor::Cursor;
use crate::dump::Dump;
use crate::error::Result;
use crate::{de, ser, Value};

/// A complete NBT document. Most files hold a single root compound, but
/// the format allows any number of concatenated root tags, and this type
/// preserves however many it finds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    tags: Vec<Value>,
}

impl Document {
    /// An empty document, to be filled with [`Document::push`].
    pub fn new() -> Self {
        Document { tags: Vec::new() }
    }

    /// Decode a document from raw (already decompressed) bytes, reading
    /// full root tags until the buffer is exhausted.
    pub fn from_bytes(data: &[u8]) -> Result<Document> {
        let mut cursor = Cursor::new(data);
        let mut tags = Vec::new();
        while cursor.has_more() {
            tags.push(de::read_root(&mut cursor)?);
        }
        Ok(Document { tags })
    }

    /// Decode a document from any reader. Decompression is the caller's
    /// business: wrap the reader in e.g. `flate2::read::GzDecoder` first.
    pub fn from_reader(mut reader: impl Read) -> Result<Document> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Document::from_bytes(&data)
    }

    /// Encode every root tag in order into one buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for tag in &self.tags {
            ser::write_full(&mut out, tag)?;
        }
        Ok(out)
    }

    /// Encode into any writer. As with [`Document::from_reader`], wrap the
    /// writer yourself if the output should be compressed.
    pub fn write_to(&self, mut writer: impl Write) -> Result<()> {
        writer.write_all(&self.to_bytes()?)?;
        Ok(())
    }

    /// Append a root tag.
    pub fn push(&mut self, tag: Value) {
        self.tags.push(tag);
    }

    pub fn tags(&self) -> &[Value] {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut Vec<Value> {
        &mut self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The structural dump of every root tag, for export.
    pub fn dump(&self) -> Vec<Dump> {
        self.tags.iter().map(Value::dump).collect()
    }
}

impl From<Vec<Value>> for Document {
    fn from(tags: Vec<Value>) -> Self {
        Document { tags }
    }
}
