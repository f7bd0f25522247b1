//! An insertion-ordered record of keyed values.
//!
//! [`Record`] is what `combine` produces on success: one entry per input
//! key, in input order.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Index;

/// An insertion-ordered collection of key/value entries.
///
/// Lookups are linear; records built by `combine` hold one entry per
/// aggregated operation.
///
/// # Examples
///
/// ```rust
/// use outcomes::Record;
///
/// let record: Record<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
/// assert_eq!(record["a"], 1);
/// assert_eq!(record.get("c"), None);
/// assert_eq!(record.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Record<K, V> {
    /// Creates an empty record.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(candidate, _)| <K as Borrow<Q>>::borrow(candidate) == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if an entry is stored under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Consumes the record, returning the values in insertion order.
    pub fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, value)| value).collect()
    }

    pub(crate) fn push(&mut self, key: K, value: V) {
        self.entries.push((key, value));
    }
}

impl<K, V> Default for Record<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, Q> Index<&Q> for Record<K, V>
where
    K: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if no entry is stored under `key`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V> FromIterator<(K, V)> for Record<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K, V> IntoIterator for Record<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Record<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (position, (key, value)) in self.entries.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Record<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct RecordVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for RecordVisitor<K, V>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
{
    type Value = Record<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut record = Record::new();
        while let Some((key, value)) = access.next_entry()? {
            record.push(key, value);
        }
        Ok(record)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Record<K, V>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn get_with_borrowed_key() {
        let record: Record<String, i32> = [("slow".to_string(), 1)].into_iter().collect();
        assert_eq!(record.get("slow"), Some(&1));
        assert!(record.contains_key("slow"));
        assert!(!record.contains_key("fast"));
    }

    #[rstest]
    fn display_keeps_insertion_order() {
        let record: Record<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(format!("{record}"), "{b: 2, a: 1}");
    }
}
