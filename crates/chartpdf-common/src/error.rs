//! Error types and utilities for ChartPDF

use thiserror::Error;

/// Result type alias for ChartPDF operations
pub type Result<T> = std::result::Result<T, ChartPdfError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for ChartPDF operations
#[derive(Error, Debug)]
pub enum ChartPdfError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The uploaded file could not be read as a table
    #[error("Parse error: {message}")]
    Parse {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// The data is readable but unusable for the requested chart
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Offending field or column, if known
        field: Option<String>,
    },

    /// The chart selector does not name a known chart
    #[error("Unsupported chart type: {tag}")]
    UnsupportedChart {
        /// The tag as received
        tag: String,
    },

    /// Graph generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// PDF assembly errors
    #[error("PDF error: {message}")]
    Pdf {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },
}

impl ChartPdfError {
    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new parse error with source
    pub fn parse_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Parse {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create an unsupported chart error for the given tag
    pub fn unsupported_chart(tag: impl Into<String>) -> Self {
        Self::UnsupportedChart { tag: tag.into() }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new PDF error
    pub fn pdf(msg: impl Into<String>) -> Self {
        Self::Pdf {
            message: msg.into(),
            source: None,
        }
    }

    /// Whether the error was caused by the caller's input rather than the service.
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::Validation { .. } | Self::UnsupportedChart { .. }
        )
    }

    /// Short message suitable for returning to API callers.
    ///
    /// Unlike `Display`, this omits the category prefix.
    pub fn public_message(&self) -> String {
        match self {
            Self::Config { message, .. }
            | Self::Parse { message, .. }
            | Self::Validation { message, .. }
            | Self::Graph { message, .. }
            | Self::Pdf { message, .. }
            | Self::Generic { message, .. } => message.clone(),
            Self::UnsupportedChart { .. } => "Unsupported chart type".to_string(),
            Self::Io(err) => err.to_string(),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to ChartPdfError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for ChartPdfError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}
