//! # Table Module
//!
//! The in-memory block of cells the filter works on. A table is a list of
//! rows; rows may differ in length, and a cell only exists where its row is
//! long enough. Public coordinates are 1-based, row 1 being the header row.
use crate::error::Error;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

pub mod cell;
pub mod reference;

pub use cell::Cell;
pub use reference::CellReference;

/// A block of test data addressed by 1-based `(row, column)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Builds a table from rows of anything convertible into a [`Cell`].
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = T>,
        T: Into<Cell>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Number of rows, header row included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn column_count(&self) -> usize {
        self.rows().map(<[Cell]>::len).max().unwrap_or(0)
    }

    /// Returns true if the table has no rows or only empty rows.
    pub fn is_empty(&self) -> bool {
        self.rows().all(<[Cell]>::is_empty)
    }

    /// Gets the cell at a 1-based position.
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows
            .get(row.checked_sub(1)?)
            .and_then(|cells| cells.get(column.checked_sub(1)?))
    }

    /// Gets a cell by Excel-style reference (`A1`, `B2`).
    pub fn get_reference(&self, reference: &str) -> Result<Option<&Cell>, Error> {
        let reference = CellReference::try_from(reference)?;
        Ok(self.get(reference.row, reference.column))
    }

    /// Gets a whole row by 1-based number.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row.checked_sub(1)?).map(Vec::as_slice)
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterates over every populated cell in row-major order with its position.
    pub fn cells(&self) -> impl Iterator<Item = (CellReference, &Cell)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, cell)| (CellReference::new(row + 1, column + 1), cell))
        })
    }

    /// Finds the first cell, row-major, whose string form equals `content`.
    pub fn find(&self, content: &str) -> Option<CellReference> {
        self.cells()
            .find(|(_, cell)| cell.matches(content))
            .map(|(reference, _)| reference)
    }

    /// Hash of the table's shape and rendered cell values.
    /// Equal tables always share a fingerprint; used to key cached lookups.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.rows.len().hash(&mut hasher);
        for row in &self.rows {
            row.len().hash(&mut hasher);
            for cell in row {
                std::mem::discriminant(cell).hash(&mut hasher);
                cell.to_string().hash(&mut hasher);
            }
        }
        hasher.finish()
    }
}

impl<T: Into<Cell>> From<Vec<Vec<T>>> for Table {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Table::from_rows(rows)
    }
}
