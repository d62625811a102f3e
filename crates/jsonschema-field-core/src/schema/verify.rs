use super::{Result, Schema};
use crate::Error;

use std::collections::HashSet;

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        debug_assert_eq!(self.schema.models.len(), self.schema.tables.len());

        self.verify_model_names_are_unique()?;
        self.verify_table_names_are_unique()?;
        self.verify_field_names_are_unique()?;
        self.verify_each_model_has_one_id()?;
        Ok(())
    }

    fn verify_model_names_are_unique(&self) -> Result<()> {
        let mut names = HashSet::new();

        for model in self.schema.models() {
            if !names.insert(&model.name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate model name `{}`",
                    model.name
                )));
            }
        }

        Ok(())
    }

    fn verify_table_names_are_unique(&self) -> Result<()> {
        let mut names = HashSet::new();

        for table in &self.schema.tables {
            if !names.insert(&table.name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate table name `{}`",
                    table.name
                )));
            }
        }

        Ok(())
    }

    fn verify_field_names_are_unique(&self) -> Result<()> {
        for model in self.schema.models() {
            let mut names = HashSet::new();

            for field in &model.fields {
                if !names.insert(&field.name) {
                    return Err(Error::invalid_schema(format!(
                        "duplicate field `{}` in model `{}`",
                        field.name, model.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_each_model_has_one_id(&self) -> Result<()> {
        for model in self.schema.models() {
            let ids = model.fields.iter().filter(|field| field.ty.is_id()).count();

            if ids != 1 {
                return Err(Error::invalid_schema(format!(
                    "model `{}` must have exactly one id field, found {ids}",
                    model.name
                )));
            }
        }

        Ok(())
    }
}
