use compact_str::{CompactString, ToCompactString};
use std::collections::HashMap;

use super::value::Value;

/// A flat mapping from name to value with snapshot semantics: `define`
/// returns a new environment and never mutates the receiver, so every
/// statement sees exactly the bindings produced by the statements before
/// it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    values: HashMap<CompactString, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// A new snapshot equal to this one plus `name` bound to `value`.
    /// Re-binding an existing name overwrites it in the snapshot only.
    #[must_use]
    pub fn define(&self, name: &str, value: Value) -> Self {
        let mut values = self.values.clone();
        values.insert(name.to_compact_string(), value);
        Self { values }
    }

    pub fn access(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CompactString, &Value)> {
        self.values.iter()
    }
}
