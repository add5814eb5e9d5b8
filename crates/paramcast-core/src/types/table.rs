use crate::value::Value;
use paramcast_primitives::ScalarKind;
use std::fmt::{self, Display};
use thiserror::Error as ThisError;

///
/// TableShapeError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[error("row {row} has {found} values, table has {expected} columns")]
pub struct TableShapeError {
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

///
/// Column
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ScalarKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

///
/// Table
///
/// Tabular result handed through unchanged. The engine never builds one
/// from another kind.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    #[must_use]
    pub const fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table, rejecting any row whose arity differs from the
    /// column list.
    pub fn from_rows(columns: Vec<Column>, rows: Vec<Vec<Value>>) -> Result<Self, TableShapeError> {
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != columns.len())
        {
            return Err(TableShapeError {
                row,
                expected: columns.len(),
                found: values.len(),
            });
        }

        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "table({} columns, {} rows)",
            self.columns.len(),
            self.rows.len()
        )
    }
}

///
/// TESTS
///
