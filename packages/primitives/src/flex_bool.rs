//! A boolean that tolerates the different encodings used by the Deluge web UI.
//!
//! Some torrent options (`move_completed`, `stop_at_ratio`, ...) are sent
//! as native JSON booleans by some daemon versions and as strings or
//! numbers by others. [`FlexBool`] accepts all of them:
//!
//! ```rust
//! use torrust_deluge_client_primitives::flex_bool::FlexBool;
//!
//! let values: Vec<FlexBool> = serde_json::from_str(r#"[true, "Yes", "active", 1, "0", null]"#).unwrap();
//!
//! assert_eq!(
//!     values.iter().map(|value| value.is_true()).collect::<Vec<_>>(),
//!     vec![true, true, true, true, false, false]
//! );
//! ```
//!
//! Decoding never fails. Any value that is not one of the recognized truthy
//! tokens is `false`.
use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Case-insensitive tokens decoded as `true`.
const TRUTHY_TOKENS: [&str; 4] = ["1", "true", "yes", "active"];

#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug, derive_more::Display)]
pub struct FlexBool(pub bool);

impl FlexBool {
    #[must_use]
    pub fn is_true(&self) -> bool {
        self.0
    }

    /// It decodes a textual token the same way the daemon payloads are
    /// decoded.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        Self(TRUTHY_TOKENS.iter().any(|truthy| token.eq_ignore_ascii_case(truthy)))
    }
}

impl From<bool> for FlexBool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<FlexBool> for bool {
    fn from(value: FlexBool) -> Self {
        value.0
    }
}

impl Serialize for FlexBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.0)
    }
}

impl<'de> Deserialize<'de> for FlexBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlexBoolVisitor)
    }
}

struct FlexBoolVisitor;

impl<'de> Visitor<'de> for FlexBoolVisitor {
    type Value = FlexBool;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean, a number or a string")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(FlexBool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(FlexBool(value == 1))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(FlexBool(value == 1))
    }

    // The raw text of a float (`1.0`) is never a truthy token.
    fn visit_f64<E: de::Error>(self, _value: f64) -> Result<Self::Value, E> {
        Ok(FlexBool(false))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(FlexBool::from_token(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FlexBool(false))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FlexBool(false))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(FlexBool(false))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(FlexBool(false))
    }
}
