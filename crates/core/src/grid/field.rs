//! Concentration field storage
//!
//! Dense row-major grids of accumulated concentration, co-indexed with a
//! [`GridExtent`]. Row 0 is the top of the frame (maximum y or height).

use crate::error::SimulationError;
use crate::grid::extent::GridExtent;
use serde::{Deserialize, Serialize};

/// Field data container for one receptor grid
///
/// Stores concentration (g/m³) as a flat `Vec<f64>` in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawField")]
pub struct ConcentrationField {
    /// Field values in row-major order (row * cols + col)
    data: Vec<f64>,
    /// Grid width in cells
    cols: usize,
    /// Grid height in cells
    rows: usize,
}

/// Unchecked serialized form; `data.len()` must equal `cols * rows`
#[derive(Deserialize)]
struct RawField {
    data: Vec<f64>,
    cols: usize,
    rows: usize,
}

impl TryFrom<RawField> for ConcentrationField {
    type Error = SimulationError;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        let expected = raw.cols.checked_mul(raw.rows);
        if expected != Some(raw.data.len()) {
            return Err(SimulationError::InvalidGrid {
                name: "field",
                reason: format!(
                    "{} values stored for a {}x{} grid",
                    raw.data.len(),
                    raw.cols,
                    raw.rows
                ),
            });
        }
        Ok(Self {
            data: raw.data,
            cols: raw.cols,
            rows: raw.rows,
        })
    }
}

/// Location and value of a field maximum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPeak {
    pub col: usize,
    pub row: usize,
    pub value: f64,
}

impl ConcentrationField {
    /// Create a new field with given dimensions, initialized to zero
    ///
    /// # Arguments
    ///
    /// * `cols` - Grid width in cells
    /// * `rows` - Grid height in cells
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            data: vec![0.0; cols * rows],
            cols,
            rows,
        }
    }

    /// Create a zeroed field sized for `extent`
    #[must_use]
    pub fn for_extent(extent: &GridExtent) -> Self {
        let (cols, rows) = extent.dims();
        Self::new(cols, rows)
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `(cols, rows)`
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Get reference to field data
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get mutable reference to field data
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Get value at grid position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> f64 {
        assert!(
            col < self.cols && row < self.rows,
            "Coordinates out of bounds"
        );
        self.data[row * self.cols + col]
    }

    /// Iterate over rows, top of the frame first
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.cols.max(1))
    }

    /// Reset every cell to zero
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Largest cell value, or `0.0` for an all-zero field
    #[must_use]
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// Largest cell and where it is; first occurrence wins on ties
    #[must_use]
    pub fn peak(&self) -> Option<FieldPeak> {
        let (index, value) = self
            .data
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, v)| match best {
                Some((_, b)) if b >= v => best,
                _ => Some((i, v)),
            })?;
        Some(FieldPeak {
            col: index % self.cols,
            row: index / self.cols,
            value,
        })
    }
}

/// Shared colour-scale maximum across both output grids
#[must_use]
pub fn shared_max(fields: &[&ConcentrationField]) -> f64 {
    fields.iter().fold(0.0_f64, |acc, field| acc.max(field.max()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_zeroed() {
        let field = ConcentrationField::new(4, 3);
        assert_eq!(field.dims(), (4, 3));
        assert_eq!(field.as_slice().len(), 12);
        assert!(field.as_slice().iter().all(|&v| v == 0.0));
        assert_eq!(field.max(), 0.0);
    }

    #[test]
    fn test_row_major_indexing() {
        let mut field = ConcentrationField::new(3, 2);
        field.as_mut_slice()[4] = 2.5;
        assert_eq!(field.get(1, 1), 2.5);
        let rows: Vec<&[f64]> = field.iter_rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[0.0, 2.5, 0.0]);
    }

    #[test]
    fn test_peak_and_clear() {
        let mut field = ConcentrationField::new(5, 5);
        field.as_mut_slice()[7] = 1.0e-6;
        field.as_mut_slice()[18] = 3.0e-6;
        let peak = field.peak().unwrap();
        assert_eq!((peak.col, peak.row), (3, 3));
        assert_eq!(peak.value, 3.0e-6);

        field.clear();
        assert_eq!(field.max(), 0.0);
    }

    #[test]
    fn test_shared_max_spans_fields() {
        let mut a = ConcentrationField::new(2, 2);
        let mut b = ConcentrationField::new(3, 1);
        a.as_mut_slice()[0] = 4.0;
        b.as_mut_slice()[2] = 9.0;
        assert_eq!(shared_max(&[&a, &b]), 9.0);
    }

    #[test]
    fn test_deserialize_rejects_short_data() {
        let json = r#"{"data":[0.0,0.0,0.0],"cols":3,"rows":2}"#;
        let err = serde_json::from_str::<ConcentrationField>(json).unwrap_err();
        assert!(err.to_string().contains("3 values stored for a 3x2 grid"), "{err}");

        let ok = r#"{"data":[0.0,0.0,0.0,0.0,0.0,1.5],"cols":3,"rows":2}"#;
        let field: ConcentrationField = serde_json::from_str(ok).unwrap();
        assert_eq!(field.get(2, 1), 1.5);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let field = ConcentrationField::new(2, 2);
        let _ = field.get(2, 0);
    }
}
