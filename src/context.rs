use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::codes::ERROR_USER_INFO_URL_KEY;

/// Auxiliary key-value mapping attached to an error for contextual data
/// beyond its domain and code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserInfo {
    entries: HashMap<String, Value>,
}

impl UserInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Stores `url` under [`ERROR_USER_INFO_URL_KEY`].
    pub fn with_url<U: Into<String>>(self, url: U) -> Self {
        self.add(ERROR_USER_INFO_URL_KEY, url.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The URL associated with the error, if one was recorded.
    pub fn url(&self) -> Option<&str> {
        self.entries
            .get(ERROR_USER_INFO_URL_KEY)
            .and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
