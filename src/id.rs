#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use fstr::FStr;

use crate::codec::{self, ParseError};

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns an independently owned copy of the underlying byte array.
    pub const fn to_bytes(&self) -> [u8; 16] {
        self.0
    }

    /// Creates a UUID byte array from RFC 4122 field values.
    ///
    /// The field values are packed as given; no version or variant bit is overwritten. Producing
    /// a well-formed version-4 identifier is the generator's job, not this constructor's.
    ///
    /// # Panics
    ///
    /// Panics if `node` exceeds the 48-bit range of the `node` field.
    pub const fn from_fields(
        time_low: u32,
        time_mid: u16,
        time_hi_and_version: u16,
        clock_seq: u16,
        node: u64,
    ) -> Self {
        if node >= 1 << 48 {
            panic!("invalid field value");
        }

        Self([
            (time_low >> 24) as u8,
            (time_low >> 16) as u8,
            (time_low >> 8) as u8,
            time_low as u8,
            (time_mid >> 8) as u8,
            time_mid as u8,
            (time_hi_and_version >> 8) as u8,
            time_hi_and_version as u8,
            (clock_seq >> 8) as u8,
            clock_seq as u8,
            (node >> 40) as u8,
            (node >> 32) as u8,
            (node >> 24) as u8,
            (node >> 16) as u8,
            (node >> 8) as u8,
            node as u8,
        ])
    }

    /// Returns the `time_low` field (bytes 0-3).
    pub fn time_low(&self) -> &[u8] {
        &self.0[0..4]
    }

    /// Returns the `time_mid` field (bytes 4-5).
    pub fn time_mid(&self) -> &[u8] {
        &self.0[4..6]
    }

    /// Returns the `time_hi_and_version` field (bytes 6-7).
    pub fn time_hi_and_version(&self) -> &[u8] {
        &self.0[6..8]
    }

    /// Returns the `clock_seq_and_reserved` field (byte 8).
    pub fn clock_seq_and_reserved(&self) -> &[u8] {
        &self.0[8..9]
    }

    /// Returns the `clock_seq_low` field (byte 9).
    pub fn clock_seq_low(&self) -> &[u8] {
        &self.0[9..10]
    }

    /// Returns the `node` field (bytes 10-15).
    pub fn node(&self) -> &[u8] {
        &self.0[10..16]
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000..=0b011 => Variant::Var0,
            0b100 | 0b101 => Variant::Var10,
            0b110 => Variant::Var110,
            _ => Variant::Var111,
        }
    }

    /// Returns the version field value stored in the UUID, or `None` if the UUID does not have
    /// the RFC 4122 variant.
    ///
    /// The returned number is whatever the high nibble of byte 6 says, which is not necessarily
    /// `4`: a parsed identifier reports the version it declares.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string-like type that can be handled like [`String`] through `Deref<Target = str>` and
    /// other common traits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// let x = "2ca4b2ce-6c13-40d4-bccf-37d222820f6f".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "2ca4b2ce-6c13-40d4-bccf-37d222820f6f");
    /// assert_eq!(format!("{}", y), "2ca4b2ce-6c13-40d4-bccf-37d222820f6f");
    /// # Ok::<(), uuid4::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        codec::encode_canonical(&self.0)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        codec::decode_canonical(src).map(Self)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// The reserved UUID variants and the variant field values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum Variant {
    /// The variant `0` (NCS), including the Nil UUID.
    Var0,

    /// The variant `10` (RFC 4122).
    Var10,

    /// The variant `110` (Microsoft).
    Var110,

    /// The variant `111` reserved for future definition, including the Max UUID.
    Var111,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    const MAX_UINT48: u64 = (1 << 48) - 1;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u32, u16, u16, u16, u64), &'static str)] {
        &[
            ((0, 0, 0, 0, 0), "00000000-0000-0000-0000-000000000000"),
            (
                (u32::MAX, u16::MAX, u16::MAX, u16::MAX, MAX_UINT48),
                "ffffffff-ffff-ffff-ffff-ffffffffffff",
            ),
            (
                (0xf81d4fae, 0x7dec, 0x11d0, 0xa765, 0x00a0c91e6bf6),
                "f81d4fae-7dec-11d0-a765-00a0c91e6bf6",
            ),
            (
                (0x2ca4b2ce, 0x6c13, 0x40d4, 0xbccf, 0x37d222820f6f),
                "2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
            ),
            (
                (0x9f0747cf, 0x38f1, 0x4cf3, 0xa0d8, 0xb4f09b0528c6),
                "9f0747cf-38f1-4cf3-a0d8-b4f09b0528c6",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let from_fields = Uuid::from_fields(fs.0, fs.1, fs.2, fs.3, fs.4);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(Ok(from_fields), text.to_uppercase().parse());
            assert_eq!(&from_fields.encode() as &str, *text);
            #[cfg(feature = "std")]
            assert_eq!(&from_fields.to_string(), text);
            #[cfg(feature = "std")]
            assert_eq!(&from_fields.encode().to_string(), text);
            #[cfg(all(feature = "std", feature = "uuid"))]
            assert_eq!(&uuid::Uuid::from(from_fields).to_string(), text);
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " 2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
            "2ca4b2ce-6c13-40d4-bccf-37d222820f6f ",
            " 2ca4b2ce-6c13-40d4-bccf-37d222820f6f ",
            "+2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
            "-2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
            "+ca4b2ce-6c13-40d4-bccf-37d222820f6f",
            "-ca4b2ce-6c13-40d4-bccf-37d222820f6f",
            "2ca4b2ce6c1340d4bccf37d222820f6f",
            "2ca4b2ce-6c1340d4-bccf-37d222820f6f",
            "{2ca4b2ce-6c13-40d4-bccf-37d222820f6f}",
            "2ca4b2ce-6c13-40 4-bccf-37d222820f6f",
            "2ca4b2ge-6c13-40d4-bccf-37d222820f6f",
            "2ca4b2ce-6c13-40d4-bccf_37d222820f6f",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err());
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );

        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields(fs.0, fs.1, fs.2, fs.3, fs.4);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);

            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_bytes(), &<[u8; 16]>::from(e));
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }

    /// Exposes the named field slices of the byte layout
    #[test]
    fn exposes_the_named_field_slices_of_the_byte_layout() {
        let e: Uuid = "f81d4fae-7dec-11d0-a765-00a0c91e6bf6".parse().unwrap();
        assert_eq!(e.time_low(), [0xf8, 0x1d, 0x4f, 0xae]);
        assert_eq!(e.time_mid(), [0x7d, 0xec]);
        assert_eq!(e.time_hi_and_version(), [0x11, 0xd0]);
        assert_eq!(e.clock_seq_and_reserved(), [0xa7]);
        assert_eq!(e.clock_seq_low(), [0x65]);
        assert_eq!(e.node(), [0x00, 0xa0, 0xc9, 0x1e, 0x6b, 0xf6]);
    }

    /// Reads the stored version and variant fields
    #[test]
    fn reads_the_stored_version_and_variant_fields() {
        let v1: Uuid = "f81d4fae-7dec-11d0-a765-00a0c91e6bf6".parse().unwrap();
        assert_eq!(v1.variant(), Variant::Var10);
        assert_eq!(v1.version(), Some(1));

        let v4: Uuid = "2ca4b2ce-6c13-40d4-bccf-37d222820f6f".parse().unwrap();
        assert_eq!(v4.variant(), Variant::Var10);
        assert_eq!(v4.version(), Some(4));

        assert_eq!(Uuid::NIL.variant(), Variant::Var0);
        assert_eq!(Uuid::NIL.version(), None);
        assert_eq!(Uuid::MAX.variant(), Variant::Var111);
        assert_eq!(Uuid::MAX.version(), None);
    }

    /// Returns independently owned copies of the byte layout
    #[test]
    fn returns_independently_owned_copies_of_the_byte_layout() {
        let e: Uuid = "2ca4b2ce-6c13-40d4-bccf-37d222820f6f".parse().unwrap();
        let mut first = e.to_bytes();
        let second = e.to_bytes();
        assert_eq!(first, second);

        first[0] ^= 0xff;
        assert_ne!(first, second);
        assert_eq!(e.to_bytes(), second);
        assert_eq!(e.as_bytes(), &second);
    }
}
