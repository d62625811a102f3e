use crate::{field::JsonSchemaField, value::FieldKind};

use heck::ToSnakeCase;
use std::fmt;

/// A model: a named record type stored in one table.
#[derive(Debug, Clone)]
pub struct Model {
    /// Assigned when the model is added to a [`Schema`](super::Schema).
    pub id: ModelId,

    /// Model name, e.g. `Document`
    pub name: String,

    /// Overrides the table name derived from the model name.
    pub table_name: Option<String>,

    /// Fields, in declaration order
    pub fields: Vec<Field>,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ModelId(pub usize);

#[derive(Debug, Clone)]
pub struct Field {
    /// The field name, also used as the column name
    pub name: String,

    pub ty: FieldTy,
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    /// Auto-incremented integer primary key
    Id,

    /// Plain text
    Text { nullable: bool },

    /// JSON document validated against a JSON Schema
    JsonSchema(JsonSchemaField),
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ModelId::placeholder(),
            name: name.into(),
            table_name: None,
            fields: vec![],
        }
    }

    /// Stores the model in a table with the given name.
    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = Some(name.into());
        self
    }

    /// Appends a field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<FieldTy>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    /// The unprefixed table name: the explicit override, or the model name in
    /// snake case.
    pub fn table_name(&self) -> String {
        match &self.table_name {
            Some(name) => name.clone(),
            None => self.name.to_snake_case(),
        }
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Iterates the model's JSON schema fields.
    pub fn json_schema_fields(&self) -> impl Iterator<Item = (&Field, &JsonSchemaField)> + '_ {
        self.fields
            .iter()
            .filter_map(|field| field.ty.as_json_schema().map(|json| (field, json)))
    }
}

impl ModelId {
    pub(crate) fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Field {
    pub fn kind(&self) -> FieldKind {
        match self.ty {
            FieldTy::Id => FieldKind::Id,
            FieldTy::Text { .. } => FieldKind::Text,
            FieldTy::JsonSchema(_) => FieldKind::Json,
        }
    }
}

impl FieldTy {
    pub fn is_id(&self) -> bool {
        matches!(self, Self::Id)
    }

    pub fn text() -> Self {
        Self::Text { nullable: false }
    }

    pub fn as_json_schema(&self) -> Option<&JsonSchemaField> {
        match self {
            Self::JsonSchema(json) => Some(json),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_json_schema(&self) -> &JsonSchemaField {
        match self {
            Self::JsonSchema(json) => json,
            _ => panic!("expected JSON schema field, but was {self:?}"),
        }
    }
}

impl From<JsonSchemaField> for FieldTy {
    fn from(value: JsonSchemaField) -> Self {
        Self::JsonSchema(value)
    }
}
