//! Tri-state JSON field: absent, explicit `null`, or a value.

use serde::{Deserialize, Deserializer};

/// A request body field that remembers whether the key was sent at all.
///
/// Use together with `#[serde(default)]` so that a missing key becomes
/// [`Field::Missing`] instead of a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
    #[default]
    Missing,
    Null,
    Present(T),
}

impl<T> Field<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    /// Collapse absent and `null` into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Missing | Field::Null => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the key is present.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Field::Present(value),
            None => Field::Null,
        })
    }
}
