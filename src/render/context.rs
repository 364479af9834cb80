use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Variable name to replacement value, used when rewriting template files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableBindings {
    values: BTreeMap<String, String>,
}

impl VariableBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for VariableBindings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Rule for placeholders whose name has no binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedPolicy {
    /// Leave the original token text in place.
    #[default]
    Keep,
    /// Replace the token with nothing.
    Remove,
    /// Abort the whole substitution pass.
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_from_pairs() {
        let bindings: VariableBindings = [("version", "0.0.1"), ("project_name", "my-app")]
            .into_iter()
            .collect();

        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.get("version"), Some("0.0.1"));
        assert_eq!(bindings.get("project_name"), Some("my-app"));
        assert_eq!(bindings.get("Version"), None);
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut bindings = VariableBindings::new();
        assert!(bindings.insert("version", "0.0.1").is_none());
        assert_eq!(
            bindings.insert("version", "1.0.0").as_deref(),
            Some("0.0.1")
        );
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn test_default_policy_is_keep() {
        assert_eq!(UnresolvedPolicy::default(), UnresolvedPolicy::Keep);
    }
}
