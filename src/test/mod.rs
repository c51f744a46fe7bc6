use crate::Tag;

pub mod builder;

#[allow(clippy::float_cmp)]
mod ser;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val as u8).unwrap(), Tag::$tag);
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

#[test]
fn tag_display_names() {
    assert_eq!(Tag::End.name(), "TAG_End");
    assert_eq!(Tag::Byte.name(), "TAG_Byte");
    assert_eq!(Tag::ByteArray.name(), "TAG_Byte_Array");
    assert_eq!(Tag::Compound.name(), "TAG_Compound");
    assert_eq!(Tag::LongArray.name(), "TAG_Long_Array");
}

#[test]
fn error_impls_sync_send() {
    fn i<T: Clone + Send + Sync + std::error::Error>(_: T) {}
    i(crate::error::Error::invalid_tag(13));
}
