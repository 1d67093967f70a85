use std::{error::Error, fmt, io};

use regression::RegressionErr;

/// The application's result type.
pub type Result<T> = std::result::Result<T, AppErr>;

/// All errors that can occur while running the overfitting report.
#[derive(Debug)]
pub enum AppErr {
    /// The configuration file could not be read.
    Io(io::Error),
    /// The configuration file or the report is not valid JSON.
    Json(serde_json::Error),
    /// Generating, fitting or training failed.
    Regression(RegressionErr),
}

impl fmt::Display for AppErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
            Self::Regression(e) => write!(f, "regression error: {e}"),
        }
    }
}

impl Error for AppErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Regression(e) => Some(e),
        }
    }
}

impl From<io::Error> for AppErr {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for AppErr {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<RegressionErr> for AppErr {
    fn from(e: RegressionErr) -> Self {
        Self::Regression(e)
    }
}
