//! Variable scope and key/value set types.

use std::collections::BTreeMap;

use crate::core::types::{Shortname, VariableName, VariableValue};

/// Where a GitHub Actions variable lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Repository-wide variables.
    Repository,
    /// Variables bound to one environment.
    Environment(Shortname),
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repository => write!(f, "repository"),
            Self::Environment(name) => write!(f, "environment {}", name),
        }
    }
}

/// Variables of one scope, keyed by name.
///
/// Keys are unique within a scope; iteration is in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables(BTreeMap<VariableName, VariableValue>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a variable.
    pub fn insert(&mut self, name: impl Into<VariableName>, value: impl Into<VariableValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Value of `name`, or `default` when absent.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Copy every entry of `other` into `self`, overwriting on collision.
    pub fn extend(&mut self, other: Variables) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow as a map, e.g. for serialization.
    pub fn as_map(&self) -> &BTreeMap<VariableName, VariableValue> {
        &self.0
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<VariableName>,
    V: Into<VariableValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
