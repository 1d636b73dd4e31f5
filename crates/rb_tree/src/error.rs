use std::collections::TryReserveError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why an insertion was refused. The tree is left untouched in both cases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// The tree would hold more than `max` nodes.
    CapacityExceeded { requested: usize, max: usize },
    /// Node storage could not be grown.
    AllocFailed(TryReserveError),
}

impl Display for TreeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded { requested, max } => {
                write!(f, "tree capacity exceeded: {requested} nodes requested, at most {max}")
            }
            Self::AllocFailed(_) => f.write_str("failed to allocate a tree node"),
        }
    }
}

impl Error for TreeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CapacityExceeded { .. } => None,
            Self::AllocFailed(err) => Some(err),
        }
    }
}
