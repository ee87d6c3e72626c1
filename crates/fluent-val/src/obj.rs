use crate::FluentStr;
use crate::Value;
use indexmap::IndexMap;
use std::fmt::{self, Display, Formatter};

/// String-keyed mapping of raw values, kept in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Obj {
    values: IndexMap<FluentStr, Value>,
}

impl IntoIterator for Obj {
    type Item = (FluentStr, Value);
    type IntoIter = indexmap::map::IntoIter<FluentStr, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl Obj {
    pub fn new() -> Self {
        Obj {
            values: IndexMap::new(),
        }
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, FluentStr, Value> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> Vec<FluentStr> {
        self.values.keys().cloned().collect()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_or_nil(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or(Value::Nil)
    }

    /// Last write wins; a repeated key keeps its original position.
    pub fn set(&mut self, key: impl Into<FluentStr>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.shift_remove(key)
    }

    /// Set a key-value pair (chainable)
    ///
    /// ```rust
    /// use fluent_val::Obj;
    ///
    /// let obj = Obj::new()
    ///     .with("name", "Alice")
    ///     .with("age", 30);
    /// assert_eq!(obj.len(), 2);
    /// ```
    pub fn with(mut self, key: impl Into<FluentStr>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (impl Into<FluentStr>, impl Into<Value>)>,
    ) -> Self {
        let mut obj = Self::new();
        for (key, value) in pairs {
            obj.set(key, value);
        }
        obj
    }
}

impl Display for Obj {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        print_object(f, self)
    }
}

pub fn print_object(f: &mut Formatter<'_>, obj: &Obj) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (k, v)) in obj.values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}: {}", k, v)?;
    }
    write!(f, "}}")
}
