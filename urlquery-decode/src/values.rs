use std::collections::HashMap;

/// Query parameters: each key maps to the values it was given, in order.
///
/// Decoding only ever looks at the first value of a key. A key that is present with no values
/// still counts as present for `seen` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    map: HashMap<String, Vec<String>>,
}

impl Values {
    /// Creates an empty set of values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `application/x-www-form-urlencoded` string, such as the query part of a URL.
    ///
    /// A leading `?` is ignored. Parsing never fails: malformed percent-escapes are kept as-is.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// Appends a value to the ones already recorded for `key`
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.map.entry(key.into()).or_default().push(value.into());
    }

    /// Returns the first value for `key`, or `None` if the key is absent or has no values
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value recorded for `key`, which is empty if the key is absent
    pub fn get_all(&self, key: &str) -> &[String] {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `key` is present, regardless of how many values it has
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether there are no keys at all
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for Values {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        Self { map }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        values.extend(iter);
        values
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Values {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_percent_decodes_and_keeps_order() {
        let values = Values::parse("?a=1&b=hello%20world&a=2&c=x+y");
        assert_eq!(values.get("a"), Some("1"));
        assert_eq!(values.get_all("a"), ["1", "2"]);
        assert_eq!(values.get("b"), Some("hello world"));
        assert_eq!(values.get("c"), Some("x y"));
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn empty_value_lists_are_present_but_have_no_first_value() {
        let mut map = HashMap::new();
        map.insert("style".to_string(), Vec::new());
        let values = Values::from(map);

        assert!(values.contains_key("style"));
        assert_eq!(values.get("style"), None);
        assert!(values.get_all("style").is_empty());
    }

    #[test]
    fn keys_are_case_sensitive() {
        let values: Values = [("a", "1")].into_iter().collect();
        assert!(values.contains_key("a"));
        assert!(!values.contains_key("A"));
        assert_eq!(values.get("A"), None);
    }

    #[test]
    fn empty_query() {
        assert!(Values::parse("").is_empty());
        assert!(Values::parse("?").is_empty());
    }
}
