use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::uniform::Error as UniformError;

/// The result type used in the entire regression module.
pub type Result<T> = std::result::Result<T, RegressionErr>;

/// The regression module's error type.
#[derive(Debug)]
pub enum RegressionErr {
    /// A caller supplied an argument outside its allowed range.
    InvalidArgument {
        arg: &'static str,
        got: usize,
        min: usize,
        max: usize,
    },
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    OutOfBounds {
        index: usize,
        len: usize,
    },
    /// A sampling range was rejected by the distribution constructor.
    InvalidDistribution(String),
    InvalidConfig(String),
}

impl Display for RegressionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionErr::InvalidArgument { arg, got, min, max } => write!(
                f,
                "invalid argument {arg}: got {got}, expected a value in [{min}, {max}]"
            ),
            RegressionErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            RegressionErr::OutOfBounds { index, len } => {
                write!(f, "sample index {index} is out of bounds for {len} samples")
            }
            RegressionErr::InvalidDistribution(msg) => write!(f, "invalid distribution: {msg}"),
            RegressionErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for RegressionErr {}

impl From<UniformError> for RegressionErr {
    fn from(value: UniformError) -> Self {
        Self::InvalidDistribution(value.to_string())
    }
}
