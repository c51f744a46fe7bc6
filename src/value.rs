use crate::Tag;

/// An optional tag name. Elements of a list carry no name.
pub type Name = Option<String>;

/// One node of an NBT tree. It owns its name and payload; lists and
/// compounds own their children recursively, so a whole tree is dropped
/// with its root.
///
/// There is no `End` variant: the End tag exists only on the wire, as the
/// terminator of a compound, and is never part of a decoded tree.
///
/// Compound children are kept in arrival order and may repeat names; the
/// format imposes no uniqueness.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(Name, i8),
    Short(Name, i16),
    Int(Name, i32),
    Long(Name, i64),
    Float(Name, f32),
    Double(Name, f64),
    ByteArray(Name, Vec<i8>),
    String(Name, String),
    List(Name, Vec<Value>),
    Compound(Name, Vec<Value>),
    IntArray(Name, Vec<i32>),
    LongArray(Name, Vec<i64>),
}

macro_rules! for_any_variant {
    ($value:expr, $name:ident, $body:expr) => {
        match $value {
            Value::Byte($name, _)
            | Value::Short($name, _)
            | Value::Int($name, _)
            | Value::Long($name, _)
            | Value::Float($name, _)
            | Value::Double($name, _)
            | Value::ByteArray($name, _)
            | Value::String($name, _)
            | Value::List($name, _)
            | Value::Compound($name, _)
            | Value::IntArray($name, _)
            | Value::LongArray($name, _) => $body,
        }
    };
}

impl Value {
    /// The type id of this value.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(..) => Tag::Byte,
            Value::Short(..) => Tag::Short,
            Value::Int(..) => Tag::Int,
            Value::Long(..) => Tag::Long,
            Value::Float(..) => Tag::Float,
            Value::Double(..) => Tag::Double,
            Value::ByteArray(..) => Tag::ByteArray,
            Value::String(..) => Tag::String,
            Value::List(..) => Tag::List,
            Value::Compound(..) => Tag::Compound,
            Value::IntArray(..) => Tag::IntArray,
            Value::LongArray(..) => Tag::LongArray,
        }
    }

    /// The name of this value, if it has one. List elements never do.
    pub fn name(&self) -> Option<&str> {
        for_any_variant!(self, name, name.as_deref())
    }

    /// Replace the name, returning the previous one.
    pub fn set_name(&mut self, name: Name) -> Name {
        for_any_variant!(self, n, std::mem::replace(n, name))
    }

    /// Attach a name, consuming self. Handy when building trees from the
    /// `From` impls below.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(Some(name.into()));
        self
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(_, v) => Some(v as i64),
            Value::Short(_, v) => Some(v as i64),
            Value::Int(_, v) => Some(v as i64),
            Value::Long(_, v) => Some(v),
            Value::Float(_, v) => Some(v as i64),
            Value::Double(_, v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(_, v) => Some(v as f64),
            Value::Short(_, v) => Some(v as f64),
            Value::Int(_, v) => Some(v as f64),
            Value::Long(_, v) => Some(v as f64),
            Value::Float(_, v) => Some(v as f64),
            Value::Double(_, v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(_, v) => Some(v),
            _ => None,
        }
    }
}

// ------------- From<T> impls -------------
//
// These build *unnamed* values, as list elements are on the wire. Chain
// `.with_name("...")` for a compound child or root tag.

macro_rules! from {
    ($type:ty, $variant:ident) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Value::$variant(None, val)
            }
        }
    };
}

from!(i8, Byte);
from!(i16, Short);
from!(i32, Int);
from!(i64, Long);
from!(f32, Float);
from!(f64, Double);
from!(String, String);

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::String(None, val.to_owned())
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Byte(None, i8::from(val))
    }
}
