use crate::array::Array;
use crate::obj::Obj;
use crate::FluentStr;
use std::fmt::{self, Display, Formatter};

/// Already-parsed input data, as handed over by a JSON/YAML parser.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(FluentStr),
    Array(Array),
    Obj(Obj),
}

// constructors
impl Value {
    pub fn str(text: impl Into<FluentStr>) -> Self {
        Value::Str(text.into())
    }

    pub fn array() -> Self {
        Value::Array(Array::new())
    }

    pub fn obj() -> Self {
        Value::Obj(Obj::new())
    }
}

impl Value {
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Mappings and sequences are wrapped into nodes, everything else stays a terminal.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Obj(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Array(_) => "array",
            Value::Obj(_) => "obj",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Uint(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn to_fstr(&self) -> FluentStr {
        match self {
            Value::Str(s) => s.clone(),
            _ => self.to_string().into(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(s) => write!(f, "{}", s),
            Value::Array(a) => write!(f, "{}", a),
            Value::Obj(o) => write!(f, "{}", o),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Int(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Value {
        Value::Uint(u as u64)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Value {
        Value::Uint(u)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s.into())
    }
}

impl From<FluentStr> for Value {
    fn from(s: FluentStr) -> Value {
        Value::Str(s)
    }
}

impl From<Obj> for Value {
    fn from(obj: Obj) -> Value {
        Value::Obj(obj)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Vec<T>) -> Value {
        Value::Array(Array::from_vec(v))
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Value {
        match v {
            Some(v) => v.into(),
            None => Value::Nil,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_terminals() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(-3).to_string(), "-3");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("plain").to_string(), "plain");
    }

    #[test]
    fn test_display_containers() {
        let v = Value::from(vec![1, 2, 3]);
        assert_eq!(v.to_string(), "[1, 2, 3]");

        let o = Value::from(Obj::new().with("a", 1).with("b", "x"));
        assert_eq!(o.to_string(), "{a: 1, b: x}");
    }

    #[test]
    fn test_is_container() {
        assert!(Value::array().is_container());
        assert!(Value::obj().is_container());
        assert!(!Value::from("[1]").is_container());
        assert!(!Value::Nil.is_container());
    }

    #[test]
    fn test_as_int() {
        assert_eq!(Value::from(7).as_int(), Some(7));
        assert_eq!(Value::Uint(7).as_int(), Some(7));
        assert_eq!(Value::Uint(u64::MAX).as_int(), None);
        assert_eq!(Value::from(7.0).as_int(), None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Nil);
        assert_eq!(Value::from(Some("x")), Value::str("x"));
    }
}
