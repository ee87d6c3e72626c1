use crate::error::FluentResult;
use crate::{Array, Node, Obj, Value};
use serde_json::Value as Json;

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Nil,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::Str(s.into()),
            Json::Array(items) => Value::Array(Array::from_vec(items)),
            Json::Object(map) => Value::Obj(Obj::from_pairs(map)),
        }
    }
}

impl Node {
    /// Wrap a parsed JSON document.
    pub fn from_json(json: Json) -> FluentResult<Self> {
        Self::wrap(&Value::from(json))
    }
}
