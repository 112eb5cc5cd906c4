use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::wide::Wide128;

impl Serialize for Wide128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            let mut buffer = [0u8; 34];
            buffer[0] = b'0';
            buffer[1] = b'x';
            // NOTE: buffer has exactly the required length.
            _ = hex::encode_to_slice(self.to_be_bytes(), &mut buffer[2..]);

            // SAFETY: hex encoding produces only ascii chars.
            serializer.serialize_str(unsafe { std::str::from_utf8_unchecked(&buffer) })
        } else {
            self.into_words().serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Wide128 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use ::serde::de::{Error, Unexpected, Visitor};

        struct Wide128Visitor;

        impl Visitor<'_> for Wide128Visitor {
            type Value = Wide128;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a hex encoded 128-bit integer")
            }

            fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
                Wide128::from_hex_str(value).map_err(E::custom)
            }

            fn visit_bytes<E: Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                let Ok(string) = std::str::from_utf8(v) else {
                    return Err(Error::invalid_value(Unexpected::Bytes(v), &self));
                };
                self.visit_str(string)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(Wide128Visitor)
        } else {
            let (upper, lower): (u64, u64) = ok!(Deserialize::deserialize(deserializer));
            Ok(Wide128::from_words(upper, lower))
        }
    }
}
