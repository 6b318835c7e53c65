//! Test utilities and shared test helpers for ChartPDF.
//!
//! Fixtures here are shared by the unit and integration tests of every crate
//! in the workspace. Enable the `testing` feature to use them from outside
//! this crate.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Tabular fixtures in the shapes users upload.
pub mod table_fixtures {
    /// Monthly sales: text labels, numeric values.
    pub fn sales_csv() -> &'static str {
        "month,sales,returns\n\
         Jan,120,4\n\
         Feb,95,2\n\
         Mar,143,7\n\
         Apr,110,3\n\
         May,160,5\n"
    }

    /// Numeric x and y columns.
    pub fn measurements_csv() -> &'static str {
        "x,y\n\
         1.0,2.5\n\
         2.0,3.1\n\
         3.5,4.8\n\
         5.0,4.2\n\
         7.25,6.0\n"
    }

    /// Rows with missing cells which must be dropped before charting.
    pub fn sparse_csv() -> &'static str {
        "region,revenue\n\
         North,300\n\
         South,\n\
         ,120\n\
         East,180\n"
    }

    /// Every row is missing a cell, so nothing survives cleaning.
    pub fn incomplete_csv() -> &'static str {
        "region,revenue\n\
         North,\n\
         ,120\n\
         South,NA\n"
    }

    /// Workbook with a `Sales` sheet holding `month`/`sales` columns; the
    /// `Feb` row has no sales value.
    pub fn sales_xlsx() -> &'static [u8] {
        include_bytes!("../fixtures/sales.xlsx")
    }

    /// A values column that is not numeric.
    pub fn textual_values_csv() -> &'static str {
        "name,colour\n\
         apple,red\n\
         banana,yellow\n"
    }

    /// A single column, unusable for any chart.
    pub fn single_column_csv() -> &'static str {
        "only\n1\n2\n3\n"
    }
}
