//! NA-aware cross-year reduction.
//!
//! Two accumulators of identical shape (rows = points, columns = features):
//! a running sum where missing contributes 0, and a running count of
//! non-missing contributions. Absorbing tables is commutative, so year
//! order never affects the result. Cells with count 0 come out missing,
//! never as a 0/0 artifact.
use ndarray::Array2;
use tracing::warn;

use crate::core::features::FeatureTable;
use crate::core::table::SampleTable;
use crate::error::{Error, Result};
use crate::types::SamplePoint;

pub struct YearAccumulator {
    points: Vec<SamplePoint>,
    columns: Vec<String>,
    sum: Array2<f64>,
    count: Array2<u32>,
}

impl YearAccumulator {
    /// Size the accumulators from the first year's layout.
    pub fn new(template: &SampleTable) -> Self {
        let shape = (template.n_points(), template.n_columns());
        Self {
            points: template.points().to_vec(),
            columns: template.columns().to_vec(),
            sum: Array2::zeros(shape),
            count: Array2::zeros(shape),
        }
    }

    /// Add one year's table: non-missing cells add their value to the sum
    /// and 1 to the count; missing cells add nothing.
    pub fn absorb(&mut self, table: &SampleTable) -> Result<()> {
        if self.columns != table.columns() {
            return Err(Error::ColumnMismatch {
                expected: self.columns.clone(),
                got: table.columns().to_vec(),
            });
        }
        if self.points.len() != table.n_points() {
            return Err(Error::RowMismatch {
                expected: self.points.len(),
                got: table.n_points(),
            });
        }
        for (row, cells) in table.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(value) = cell {
                    self.sum[[row, col]] += value;
                    self.count[[row, col]] += 1;
                }
            }
        }
        Ok(())
    }

    /// Elementwise mean. A zero count forces the cell back to missing.
    pub fn finish(self) -> SampleTable {
        let mut table = SampleTable::new(self.points, self.columns);
        for row in 0..table.n_points() {
            for col in 0..table.n_columns() {
                let n = self.count[[row, col]];
                if n > 0 {
                    table.set(row, col, Some(self.sum[[row, col]] / n as f64));
                }
            }
        }
        table
    }
}

/// Rename every `<feature>_<stat>` column to `<feature>_<stat>-<unit>`.
/// Columns with no matching feature keep their name, with a warning.
pub fn rename_with_units(table: &mut SampleTable, features: &FeatureTable) {
    table.map_columns(|column| match features.rename_column(column) {
        Some(renamed) => renamed,
        None => {
            warn!("No feature unit found for column: {}", column);
            column.to_string()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::Feature;

    fn one_point() -> Vec<SamplePoint> {
        vec![SamplePoint::new(-5.6, 36.0)]
    }

    fn year_table(cells: Vec<Option<f64>>) -> SampleTable {
        let cols = (0..cells.len()).map(|i| format!("c{}", i)).collect();
        SampleTable::from_cells(one_point(), cols, cells).unwrap()
    }

    #[test]
    fn mean_over_two_years_with_complementary_gaps() {
        // One point, one feature across two tables: [10, missing], [missing, 20].
        let y1 = year_table(vec![Some(10.0), None]);
        let y2 = year_table(vec![None, Some(20.0)]);

        let mut acc = YearAccumulator::new(&y1);
        acc.absorb(&y1).unwrap();
        acc.absorb(&y2).unwrap();
        let mean = acc.finish();

        assert_eq!(mean.get(0, 0), Some(10.0));
        assert_eq!(mean.get(0, 1), Some(20.0));

        // The classic cross-cell case: sum 30, count 2, mean 15.
        let a = year_table(vec![Some(10.0)]);
        let b = year_table(vec![Some(20.0)]);
        let mut acc = YearAccumulator::new(&a);
        acc.absorb(&a).unwrap();
        acc.absorb(&b).unwrap();
        assert_eq!(acc.finish().get(0, 0), Some(15.0));
    }

    #[test]
    fn zero_contributions_stay_missing() {
        let y1 = year_table(vec![None]);
        let mut acc = YearAccumulator::new(&y1);
        acc.absorb(&y1).unwrap();
        let mean = acc.finish();
        assert_eq!(mean.get(0, 0), None);
    }

    #[test]
    fn absorb_order_does_not_matter() {
        let years = [
            year_table(vec![Some(1.0), None]),
            year_table(vec![Some(2.0), Some(8.0)]),
            year_table(vec![None, Some(4.0)]),
        ];

        let mut forward = YearAccumulator::new(&years[0]);
        for y in &years {
            forward.absorb(y).unwrap();
        }
        let mut backward = YearAccumulator::new(&years[0]);
        for y in years.iter().rev() {
            backward.absorb(y).unwrap();
        }

        assert_eq!(forward.finish(), backward.finish());
    }

    #[test]
    fn absorb_rejects_layout_drift() {
        let y1 = year_table(vec![Some(1.0)]);
        let other = SampleTable::from_cells(
            one_point(),
            vec!["other".to_string()],
            vec![Some(1.0)],
        )
        .unwrap();
        let mut acc = YearAccumulator::new(&y1);
        assert!(matches!(
            acc.absorb(&other),
            Err(Error::ColumnMismatch { .. })
        ));
    }

    #[test]
    fn rename_covers_all_columns() {
        let features = FeatureTable::new(vec![
            Feature::new("sst", "celsius", &["mean"]),
            Feature::new("tp", "mm", &["mean"]),
        ]);
        let mut table = SampleTable::new(
            one_point(),
            vec!["sst_mean".to_string(), "tp_mean".to_string()],
        );
        rename_with_units(&mut table, &features);
        assert_eq!(table.columns(), ["sst_mean-celsius", "tp_mean-mm"]);
    }
}
