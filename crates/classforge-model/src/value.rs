//! Dynamically typed data values carried by fields, arguments and results.

use crate::error::CallError;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<str>),
}

impl Value {
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Name of the value's kind, as shown in diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::from(s))
    }
}

/// Argument `index` of a call, or `Undefined` when the caller passed fewer.
pub fn arg(args: &[Value], index: usize) -> &Value {
    static UNDEFINED: Value = Value::Undefined;
    args.get(index).unwrap_or(&UNDEFINED)
}

/// Argument `index` as a number, or an `ArgumentType` error.
pub fn expect_number(args: &[Value], index: usize) -> Result<f64, CallError> {
    let value = arg(args, index);
    value.as_number().ok_or(CallError::ArgumentType {
        index,
        expected: "number",
        found: value.kind_name(),
    })
}

/// Argument `index` as a string, or an `ArgumentType` error.
pub fn expect_str(args: &[Value], index: usize) -> Result<&str, CallError> {
    let value = arg(args, index);
    value.as_str().ok_or(CallError::ArgumentType {
        index,
        expected: "string",
        found: value.kind_name(),
    })
}
