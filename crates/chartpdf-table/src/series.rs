//! Chart-ready views over a table.

/// The first two columns of a cleaned table.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Header of the label column.
    pub x_name: String,
    /// Header of the value column.
    pub y_name: String,
    /// Display text of every label cell.
    pub labels: Vec<String>,
    /// Values, one per label.
    pub values: Vec<f64>,
    /// Label column as numbers, when every label is numeric.
    pub x_numeric: Option<Vec<f64>>,
}

/// A column whose every cell is numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    /// Column header.
    pub name: String,
    /// Cell values, top to bottom.
    pub values: Vec<f64>,
}

impl Series {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the label column is numeric and can be placed on a value axis.
    pub const fn has_numeric_x(&self) -> bool {
        self.x_numeric.is_some()
    }

    /// Horizontal positions: numeric labels when available, otherwise 0, 1, 2, ...
    #[allow(clippy::cast_precision_loss)]
    pub fn x_positions(&self) -> Vec<f64> {
        self.x_numeric
            .clone()
            .unwrap_or_else(|| (0..self.len()).map(|i| i as f64).collect())
    }

    /// `(x, y)` pairs using [`Series::x_positions`].
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x_positions()
            .into_iter()
            .zip(self.values.iter().copied())
            .collect()
    }

    /// Smallest and largest value, or `None` for an empty series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        min_max(&self.values)
    }

    /// Label/value pairs with strictly positive values, for area-proportional charts.
    pub fn positive_entries(&self) -> Vec<(&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
            .filter(|(_, value)| *value > 0.0)
            .collect()
    }
}

/// Smallest and largest element of a slice, or `None` when empty.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(x_numeric: Option<Vec<f64>>) -> Series {
        Series {
            x_name: "month".into(),
            y_name: "sales".into(),
            labels: vec!["Jan".into(), "Feb".into(), "Mar".into()],
            values: vec![10.0, -2.0, 5.0],
            x_numeric,
        }
    }

    #[test]
    fn test_positions_fall_back_to_indices() {
        assert_eq!(series(None).x_positions(), vec![0.0, 1.0, 2.0]);
        assert_eq!(
            series(Some(vec![3.0, 6.0, 9.0])).points(),
            vec![(3.0, 10.0), (6.0, -2.0), (9.0, 5.0)]
        );
    }

    #[test]
    fn test_value_range() {
        assert_eq!(series(None).value_range(), Some((-2.0, 10.0)));
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn test_positive_entries_skip_non_positive() {
        let s = series(None);
        assert_eq!(s.positive_entries(), vec![("Jan", 10.0), ("Mar", 5.0)]);
    }
}
