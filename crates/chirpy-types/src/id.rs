use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw identifier value.
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// The identifier assigned after `count` existing entities.
            pub const fn after(count: usize) -> Self {
                Self(count as u64 + 1)
            }

            /// The raw integer value.
            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>()
                    .map(Self)
                    .map_err(|_| TypeError::InvalidId(s.to_string()))
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

sequential_id!(
    /// Identifier of a chirp. Assigned as `count + 1` at creation, starting at 1.
    ChirpId
);

sequential_id!(
    /// Identifier of a user. Assigned as `count + 1` at creation, starting at 1.
    ///
    /// Token subjects carry this value in its decimal string form.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn after_count_starts_at_one() {
        assert_eq!(ChirpId::after(0), ChirpId::new(1));
        assert_eq!(UserId::after(41).get(), 42);
    }

    #[test]
    fn display_and_parse() {
        let id = UserId::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!("7".parse::<UserId>().unwrap(), id);
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(
            "abc".parse::<ChirpId>(),
            Err(TypeError::InvalidId("abc".into()))
        );
        assert!("-1".parse::<ChirpId>().is_err());
    }

    #[test]
    fn serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&ChirpId::new(3)).unwrap(), "3");
    }

    #[test]
    fn map_keys_serialize_as_decimal_strings() {
        let mut map = HashMap::new();
        map.insert(ChirpId::new(12), "x");
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"12":"x"}"#);
        let parsed: HashMap<ChirpId, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[&ChirpId::new(12)], "x");
    }

    #[test]
    fn ordering_follows_value() {
        assert!(ChirpId::new(2) < ChirpId::new(10));
    }
}
