//! `serde` support, enabled with the `serde` feature.
//!
//! Human readable formats carry the canonical `aa:bb:cc:dd:ee:ff` string,
//! compact formats carry the six octets.
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::MacAddress;

impl Serialize for MacAddress {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            self.as_bytes().serialize(serializer)
        }
    }
}

struct MacAddressVisitor;

impl<'de> Visitor<'de> for MacAddressVisitor {
    type Value = MacAddress;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a MAC address such as `56:6f:99:d2:aa:f9`")
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<MacAddress, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(MacAddressVisitor)
        } else {
            <[u8; 6]>::deserialize(deserializer).map(MacAddress::new)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{
        assert_de_tokens, assert_de_tokens_error, assert_tokens, Configure, Readable, Token,
    };

    use crate::MacAddress;

    fn mac() -> MacAddress {
        MacAddress::new([0x84, 0x62, 0x7a, 0x03, 0xbd, 0x01])
    }

    #[test]
    fn readable_is_canonical_string() {
        assert_tokens(&mac().readable(), &[Token::Str("84:62:7a:03:bd:01")]);
    }

    #[test]
    fn readable_accepts_other_separators() {
        assert_de_tokens(&mac().readable(), &[Token::Str("84-62-7A-03-BD-01")]);
    }

    #[test]
    fn readable_rejects_short_address() {
        assert_de_tokens_error::<Readable<MacAddress>>(
            &[Token::Str("84:62:7a")],
            "Expected `12` hex digits. Received `6`",
        );
    }

    #[test]
    fn compact_is_octet_tuple() {
        assert_tokens(
            &mac().compact(),
            &[
                Token::Tuple { len: 6 },
                Token::U8(0x84),
                Token::U8(0x62),
                Token::U8(0x7a),
                Token::U8(0x03),
                Token::U8(0xbd),
                Token::U8(0x01),
                Token::TupleEnd,
            ],
        );
    }
}
