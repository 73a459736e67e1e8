//! Request parameter sets.
//!
//! A [`ParameterSet`] holds the wire parameters of a single call. Keys are kept
//! sorted by byte order, which is also the order used for signing and for the
//! outgoing query string.

use crate::signing::canonical;
use std::collections::BTreeMap;
use std::fmt;

/// Scalar value of a request parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    /// Text value.
    String(String),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean flag.
    Boolean(bool),
}

impl fmt::Display for ParameterValue {
    /// Wire representation. Booleans follow the platform's string coercion:
    /// `true` is `"1"` and `false` is the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::String(value) => f.write_str(value),
            ParameterValue::Integer(value) => write!(f, "{}", value),
            ParameterValue::Float(value) => write!(f, "{}", value),
            ParameterValue::Boolean(true) => f.write_str("1"),
            ParameterValue::Boolean(false) => Ok(()),
        }
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::String(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::String(value.to_string())
    }
}

impl From<&String> for ParameterValue {
    fn from(value: &String) -> Self {
        ParameterValue::String(value.clone())
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Integer(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        ParameterValue::Integer(i64::from(value))
    }
}

impl From<u32> for ParameterValue {
    fn from(value: u32) -> Self {
        ParameterValue::Integer(i64::from(value))
    }
}

impl From<u64> for ParameterValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => ParameterValue::Integer(v),
            Err(_) => ParameterValue::String(value.to_string()),
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Float(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Boolean(value)
    }
}

/// Set of wire parameters for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    values: BTreeMap<String, ParameterValue>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the given pairs into the set, overwriting existing keys.
    pub fn set<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParameterValue>,
    {
        for (key, value) in pairs {
            self.values.insert(key.into(), value.into());
        }
        self
    }

    /// Insert a single parameter, overwriting an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a parameter value.
    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.values.get(key)
    }

    /// Check whether a parameter is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove a parameter, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ParameterValue> {
        self.values.remove(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All parameters, ordered by key.
    pub fn all(&self) -> &BTreeMap<String, ParameterValue> {
        &self.values
    }

    /// Iterate over the parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Encode the parameters as a query string, in key order.
    pub fn to_query_string(&self) -> String {
        canonical::encode_pairs(self.iter().map(|(k, v)| (k, v.to_string())))
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<ParameterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        set.set(iter);
        set
    }
}

/// Encode a list of values the way list parameters travel on the wire.
pub fn json_list<T: serde::Serialize>(values: &[T]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_merges_and_overwrites() {
        let mut params = ParameterSet::new();
        params.set([("Action", "GetOrders"), ("Format", "XML")]);
        params.set([("Format", "JSON")]);

        assert_eq!(params.len(), 2);
        assert_eq!(
            params.get("Format"),
            Some(&ParameterValue::String("JSON".to_string()))
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let base = ParameterSet::new().with("UserID", "seller@example.com");
        let mut copy = base.clone();
        copy.insert("Action", "GetOrder");
        copy.insert("UserID", "other@example.com");

        assert_eq!(base.len(), 1);
        assert_eq!(
            base.get("UserID"),
            Some(&ParameterValue::String("seller@example.com".to_string()))
        );
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_all_is_sorted_by_key() {
        let params = ParameterSet::new()
            .with("Version", "1.0")
            .with("Action", "GetOrders")
            .with("Limit", 10);

        let keys: Vec<&String> = params.all().keys().collect();
        assert_eq!(keys, vec!["Action", "Limit", "Version"]);
    }

    #[test]
    fn test_scalar_coercion() {
        assert_eq!(ParameterValue::from(42).to_string(), "42");
        assert_eq!(ParameterValue::from(12.5).to_string(), "12.5");
        assert_eq!(ParameterValue::from(10.0).to_string(), "10");
        assert_eq!(ParameterValue::from(true).to_string(), "1");
        assert_eq!(ParameterValue::from(false).to_string(), "");
        assert_eq!(ParameterValue::from(u64::MAX).to_string(), u64::MAX.to_string());
    }

    #[test]
    fn test_query_string_encoding() {
        let params = ParameterSet::new()
            .with("UserID", "seller@example.com")
            .with("Action", "GetOrders")
            .with("Timestamp", "2024-01-15T10:30:00+00:00");

        assert_eq!(
            params.to_query_string(),
            "Action=GetOrders&Timestamp=2024-01-15T10%3A30%3A00%2B00%3A00&UserID=seller%40example.com"
        );
    }

    #[test]
    fn test_json_list() {
        assert_eq!(json_list(&[1u64, 2, 3]), "[1,2,3]");
        assert_eq!(json_list(&["a", "b"]), "[\"a\",\"b\"]");
        assert_eq!(json_list::<u64>(&[]), "[]");
    }

    #[test]
    fn test_from_iterator() {
        let params: ParameterSet = vec![("Offset", 0), ("Limit", 100)].into_iter().collect();
        assert_eq!(params.to_query_string(), "Limit=100&Offset=0");
    }
}
