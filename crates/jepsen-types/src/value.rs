use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Symbolic token of the wire vocabulary, distinct from an ordinary string
///
/// Stored without the leading colon; displays in its printed form (`:info`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Keyword(String);

impl Keyword {
    /// Create a keyword; a leading `:` is accepted and dropped
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.strip_prefix(':') {
            Some(stripped) => Self(stripped.to_string()),
            None => Self(name),
        }
    }

    /// Token name without the leading colon
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl From<&str> for Keyword {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Keyword {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.0
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets keyword-keyed maps be queried with a plain token name
impl Borrow<str> for Keyword {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A dynamically typed value as it appears in a map record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// Explicit null marker
    Nil,
    Int(i64),
    String(String),
    Keyword(Keyword),
    Bool(bool),
    /// Compound operation values (e.g. compare-and-set pairs)
    Vector(Vec<Value>),
}

impl Value {
    pub fn keyword(name: impl Into<String>) -> Self {
        Value::Keyword(Keyword::new(name))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Text of a string or keyword; tokens and strings are interchangeable here
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Keyword(k) => Some(k.name()),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> Option<&Keyword> {
        match self {
            Value::Keyword(k) => Some(k),
            _ => None,
        }
    }

    /// Name of the value's wire type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Int(_) => "integer",
            Value::String(_) => "string",
            Value::Keyword(_) => "keyword",
            Value::Bool(_) => "boolean",
            Value::Vector(_) => "vector",
        }
    }
}

/// Printed form. Strings render raw, keywords with their colon.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Int(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Keyword(k) => write!(f, "{}", k),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Vector(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Keyword> for Value {
    fn from(k: Keyword) -> Self {
        Value::Keyword(k)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Vector(items)
    }
}
