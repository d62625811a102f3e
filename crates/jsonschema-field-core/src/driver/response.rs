#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Values of the `RETURNING` column, one per inserted row
    Ids(Vec<i64>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn ids(ids: Vec<i64>) -> Self {
        Self {
            rows: Rows::Ids(ids),
        }
    }
}

impl Rows {
    /// Returns the single id of a one-row insert.
    pub fn into_id(self) -> crate::Result<i64> {
        match self {
            Rows::Ids(ids) => match ids[..] {
                [id] => Ok(id),
                _ => crate::bail!("expected 1 returned id, got {}", ids.len()),
            },
            Rows::Count(_) => crate::bail!("expected returned ids, got a row count"),
        }
    }
}
