//! Ordered call parameters
//!
//! Binance verifies signatures against the parameter string byte for byte, so
//! parameters keep insertion order and are serialized exactly once.

use crate::error::{RestError, RestResult};

/// Insertion-ordered key/value parameters for one call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter (builder style)
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Add a parameter only when a value is present
    pub fn with_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Append a parameter
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Look up the first value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize to `application/x-www-form-urlencoded` in insertion order
    pub fn to_form_string(&self) -> RestResult<String> {
        serde_urlencoded::to_string(&self.pairs)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let params = Params::new()
            .with("symbol", "BTCUSDT")
            .with("side", "BUY")
            .with("quantity", 1.5);

        assert_eq!(
            params.to_form_string().unwrap(),
            "symbol=BTCUSDT&side=BUY&quantity=1.5"
        );
    }

    #[test]
    fn test_with_opt_skips_none() {
        let params = Params::new()
            .with("symbol", "BTC")
            .with_opt("limit", None::<u32>)
            .with_opt("fromId", Some(42));

        assert_eq!(params.len(), 2);
        assert!(!params.contains("limit"));
        assert_eq!(params.get("fromId"), Some("42"));
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let params = Params::new().with("newClientOrderId", "a b&c=d");
        assert_eq!(
            params.to_form_string().unwrap(),
            "newClientOrderId=a+b%26c%3Dd"
        );
    }

    #[test]
    fn test_empty_serializes_to_empty_string() {
        assert_eq!(Params::new().to_form_string().unwrap(), "");
    }

    #[test]
    fn test_from_iterator() {
        let params: Params = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(params.to_form_string().unwrap(), "a=1&b=2");
    }
}
