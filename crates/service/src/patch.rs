//! Support for partial-update shapes.

use serde::{Deserialize, Deserializer};

/// Deserializer for `Option<Option<T>>` fields: combined with
/// `#[serde(default)]`, an absent field stays `None` while an explicit
/// `null` becomes `Some(None)`. This is how update shapes distinguish
/// "leave untouched" from "clear this nullable column".
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
