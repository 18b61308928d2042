//! Point-by-feature sample tables with explicit missing cells.
//!
//! A `SampleTable` holds one row per sample point and one named column per
//! raster feature column. Cells are `Option<f64>`: the sentinel translation
//! happens at ingestion, so no arithmetic ever sees a raw 9999.
use crate::error::{Error, Result};
use crate::types::SamplePoint;

#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    points: Vec<SamplePoint>,
    columns: Vec<String>,
    // row-major, points.len() * columns.len()
    cells: Vec<Option<f64>>,
}

impl SampleTable {
    /// An all-missing table for the given points and columns.
    pub fn new(points: Vec<SamplePoint>, columns: Vec<String>) -> Self {
        let cells = vec![None; points.len() * columns.len()];
        Self {
            points,
            columns,
            cells,
        }
    }

    /// Build from row-major cells; the cell count must match points x columns.
    pub fn from_cells(
        points: Vec<SamplePoint>,
        columns: Vec<String>,
        cells: Vec<Option<f64>>,
    ) -> Result<Self> {
        let expected = points.len() * columns.len();
        if cells.len() != expected {
            return Err(Error::CellMismatch {
                expected,
                got: cells.len(),
            });
        }
        Ok(Self {
            points,
            columns,
            cells,
        })
    }

    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells[row * self.columns.len() + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Option<f64>) {
        self.cells[row * self.columns.len() + col] = value;
    }

    /// Iterate rows as slices of cells, in point order.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<f64>]> {
        self.cells.chunks(self.columns.len().max(1))
    }

    /// Rewrite every column name through `f`, preserving order.
    pub fn map_columns<F: FnMut(&str) -> String>(&mut self, mut f: F) {
        for column in &mut self.columns {
            *column = f(column);
        }
    }

    fn check_layout(&self, other: &SampleTable) -> Result<()> {
        if self.columns != other.columns {
            return Err(Error::ColumnMismatch {
                expected: self.columns.clone(),
                got: other.columns.clone(),
            });
        }
        if self.points.len() != other.points.len() {
            return Err(Error::RowMismatch {
                expected: self.points.len(),
                got: other.points.len(),
            });
        }
        Ok(())
    }

    /// Fill-gaps merge: keep own value unless missing, in which case take
    /// `other`'s value. Already-filled cells are never overwritten, so
    /// merging a sequence of tables is first-wins in sequence order.
    pub fn fill_missing_from(&mut self, other: &SampleTable) -> Result<()> {
        self.check_layout(other)?;
        for (cell, incoming) in self.cells.iter_mut().zip(other.cells.iter()) {
            if cell.is_none() {
                *cell = *incoming;
            }
        }
        Ok(())
    }
}
