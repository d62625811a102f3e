use serde_json::Value;
use std::fmt;

/// The value a JSON field takes when a row does not set it.
#[derive(Clone)]
pub enum FieldDefault {
    /// One value, shared by every row.
    Value(Value),

    /// Called once per row.
    Callable(fn() -> Value),
}

impl FieldDefault {
    /// An empty object, built per row.
    pub fn empty_object() -> Self {
        Self::Callable(|| Value::Object(Default::default()))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Callable(_))
    }

    pub fn resolve(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Callable(f) => f(),
        }
    }
}

impl fmt::Debug for FieldDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Callable(_) => f.write_str("Callable(..)"),
        }
    }
}
