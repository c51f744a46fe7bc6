//! A generic `{type, name, payload}` projection of a tag tree, for handing
//! to JSON converters or tree printers outside this crate.

use serde::Serialize;

use crate::{Tag, Value};

/// The dumped view of one tag. Total over any decoded tree: every scalar
/// and array value survives the projection. The one lossy spot is lists,
/// whose elements collapse to bare payloads; their shared type lives in
/// [`Dump::element_kind`] instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dump {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The element type of a list, `TAG_End` when it is empty. `None` for
    /// every other variant.
    #[serde(rename = "data_type", skip_serializing_if = "Option::is_none")]
    pub element_kind: Option<&'static str>,
    pub payload: DumpPayload,
}

/// The payload part of a [`Dump`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DumpPayload {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Bytes(Vec<i8>),
    Ints(Vec<i32>),
    Longs(Vec<i64>),
    /// List elements, payload only.
    List(Vec<DumpPayload>),
    /// Compound children, each a full dump.
    Compound(Vec<Dump>),
}

impl Value {
    /// Project this tag into its dumped view.
    pub fn dump(&self) -> Dump {
        let element_kind = match self {
            Value::List(_, elements) => {
                Some(elements.first().map_or(Tag::End, Value::tag).name())
            }
            _ => None,
        };

        Dump {
            kind: self.tag().name(),
            name: self.name().map(str::to_owned),
            element_kind,
            payload: dump_payload(self),
        }
    }
}

fn dump_payload(value: &Value) -> DumpPayload {
    match value {
        Value::Byte(_, v) => DumpPayload::Byte(*v),
        Value::Short(_, v) => DumpPayload::Short(*v),
        Value::Int(_, v) => DumpPayload::Int(*v),
        Value::Long(_, v) => DumpPayload::Long(*v),
        Value::Float(_, v) => DumpPayload::Float(*v),
        Value::Double(_, v) => DumpPayload::Double(*v),
        Value::ByteArray(_, data) => DumpPayload::Bytes(data.clone()),
        Value::String(_, s) => DumpPayload::String(s.clone()),
        Value::List(_, elements) => {
            DumpPayload::List(elements.iter().map(dump_payload).collect())
        }
        Value::Compound(_, children) => {
            DumpPayload::Compound(children.iter().map(Value::dump).collect())
        }
        Value::IntArray(_, data) => DumpPayload::Ints(data.clone()),
        Value::LongArray(_, data) => DumpPayload::Longs(data.clone()),
    }
}
