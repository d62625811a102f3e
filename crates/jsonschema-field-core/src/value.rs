//! Values travelling on the write path, before and after a field prepares
//! them for a driver.

mod encode;
pub use encode::to_json;

use serde_json::Value;
use std::fmt;

/// The kind of model field a value is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Id,
    Text,
    Json,
}

/// A SQL fragment that is written into the statement verbatim.
///
/// Used for database-side defaults such as `'{}'::jsonb` that must not be
/// encoded a second time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSql(String);

/// A literal value explicitly bound to a field kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: Value,
    pub output: FieldKind,
}

/// An expression, as opposed to a plain application value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Raw(RawSql),
    Literal(Literal),
}

/// A value handed to a field on the write path.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<T = Value> {
    /// A plain application value, serialized by the field.
    Value(T),

    /// An expression, passed through (or unwrapped) by the field.
    Expr(Expr),
}

/// A value ready to be bound or inlined by a driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Prepared {
    /// SQL `NULL`
    Null,

    I64(i64),

    String(String),

    /// A JSON document bound through the driver's native JSON adapter.
    Json(Value),

    /// A JSON document already encoded as text.
    JsonText(String),

    /// An expression the driver renders as-is.
    Expr(Expr),
}

impl RawSql {
    pub fn new(sql: impl Into<String>) -> Self {
        Self(sql.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawSql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Literal {
    pub fn new(value: Value, output: FieldKind) -> Self {
        Self { value, output }
    }

    /// A literal bound to a JSON field.
    pub fn json(value: Value) -> Self {
        Self::new(value, FieldKind::Json)
    }
}

impl Expr {
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(RawSql::new(sql))
    }

    pub fn literal(value: Value, output: FieldKind) -> Self {
        Self::Literal(Literal::new(value, output))
    }
}

impl<T> Input<T> {
    pub fn is_expr(&self) -> bool {
        matches!(self, Self::Expr(_))
    }
}

impl Input<Value> {
    /// Returns the JSON document this input will store, if it is known before
    /// the statement runs.
    ///
    /// Raw SQL and literals bound to other field kinds are evaluated by the
    /// database, so they have no document here.
    pub fn as_document(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Expr(Expr::Literal(literal)) if literal.output == FieldKind::Json => {
                Some(&literal.value)
            }
            Self::Expr(_) => None,
        }
    }
}

impl From<RawSql> for Expr {
    fn from(value: RawSql) -> Self {
        Self::Raw(value)
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Expr> for Input<T> {
    fn from(value: Expr) -> Self {
        Self::Expr(value)
    }
}

impl<T> From<RawSql> for Input<T> {
    fn from(value: RawSql) -> Self {
        Self::Expr(Expr::Raw(value))
    }
}

impl<T> From<Literal> for Input<T> {
    fn from(value: Literal) -> Self {
        Self::Expr(Expr::Literal(value))
    }
}
