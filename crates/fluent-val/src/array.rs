use crate::Value;
use std::fmt::{self, Formatter};
use std::ops::Index;

/// Ordered sequence of raw values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    pub values: Vec<Value>,
}

impl Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl Array {
    pub fn new() -> Self {
        Self { values: vec![] }
    }

    pub fn from_vec(values: Vec<impl Into<Value>>) -> Self {
        Array {
            values: values.into_iter().map(|v| v.into()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Add an element (chainable)
    ///
    /// ```rust
    /// use fluent_val::Array;
    ///
    /// let arr = Array::new().with(1).with("two").with(3.0);
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.push(value);
        self
    }

    /// Add several elements (chainable)
    pub fn with_values(mut self, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        for value in values {
            self.push(value);
        }
        self
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Array { values }
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        print_array(f, self)
    }
}

pub fn print_array(f: &mut Formatter<'_>, value: &Array) -> fmt::Result {
    write!(f, "[")?;
    for (i, v) in value.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", v)?;
    }
    write!(f, "]")
}
