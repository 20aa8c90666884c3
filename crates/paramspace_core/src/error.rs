use std::fmt;

/// Errors related to axis name lookups
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    AxisNotFound(String),
    /// The name occurs at more than one position of the axis list
    AxisDuplicated {
        name: String,
        positions: Vec<usize>,
    },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::AxisNotFound(name) => write!(f, "axis {name:?} not found"),
            LookupError::AxisDuplicated { name, positions } => {
                write!(f, "axis {name:?} occurs more than once (positions {positions:?})")
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Errors raised while building, projecting, slicing or reducing a parameter space
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    Lookup(LookupError),
    /// A space needs at least one axis
    NoAxes,
    /// Axis declared without samples
    EmptyAxis(String),
    /// A projection request names fewer than two axes
    TooFewProjectionAxes { given: usize },
    /// A projection request names the same axis twice
    RepeatedProjectionAxis(String),
    /// `sample` was called without any argument axes
    NothingSampled,
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    /// The axis was integrated out of the dependent array
    AxisEliminated(String),
    /// Axis names of a dependent array must follow declaration order
    AxisOutOfOrder(String),
    IndexOutOfBounds {
        indices: Vec<usize>,
        shape: Vec<usize>,
    },
    NegativeHalfWidth { axis: String, half_width: f64 },
    InvalidSampleCount { axis: String },
    /// No located value was supplied for an axis that should be refined
    MissingLocatedValue(String),
    /// The array holds no finite value to locate
    EmptyArray,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceError::Lookup(e) => write!(f, "{e}"),
            SpaceError::NoAxes => write!(f, "parameter space has no axes"),
            SpaceError::EmptyAxis(name) => write!(f, "axis {name:?} has no samples"),
            SpaceError::TooFewProjectionAxes { given } => {
                write!(f, "projection needs at least 2 axes, got {given}")
            }
            SpaceError::RepeatedProjectionAxis(name) => {
                write!(f, "axis {name:?} appears more than once in the projection request")
            }
            SpaceError::NothingSampled => write!(f, "nothing sampled: no argument axes given"),
            SpaceError::ShapeMismatch { expected, found } => {
                write!(f, "shape mismatch: expected {expected:?}, found {found:?}")
            }
            SpaceError::AxisEliminated(name) => {
                write!(f, "axis {name:?} was eliminated by a previous reduction")
            }
            SpaceError::AxisOutOfOrder(name) => {
                write!(f, "axis {name:?} is listed out of declaration order")
            }
            SpaceError::IndexOutOfBounds { indices, shape } => {
                write!(f, "index {indices:?} out of bounds for shape {shape:?}")
            }
            SpaceError::NegativeHalfWidth { axis, half_width } => {
                write!(f, "half width {half_width} for axis {axis:?} must be non-negative")
            }
            SpaceError::InvalidSampleCount { axis } => {
                write!(f, "refined axis {axis:?} needs at least one sample")
            }
            SpaceError::MissingLocatedValue(name) => {
                write!(f, "no located value for axis {name:?}")
            }
            SpaceError::EmptyArray => write!(f, "array holds no finite value"),
        }
    }
}

impl std::error::Error for SpaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpaceError::Lookup(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LookupError> for SpaceError {
    fn from(e: LookupError) -> Self {
        SpaceError::Lookup(e)
    }
}

pub type Result<T> = std::result::Result<T, SpaceError>;
