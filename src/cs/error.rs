//! Error type shared by graph generation and the spanning-tree builders.

use thiserror::Error;

/// Result type for graph and MST operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied parameter is out of range (`n < 2`, `p` outside `[0, 1]`, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Rejection sampling did not produce a connected graph within the attempt budget.
    #[error("no connected graph generated after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// A spanning tree could not reach `required` edges; the input graph is disconnected.
    #[error("graph is disconnected: spanning tree reached {accepted} of {required} edges")]
    DisconnectedGraph { accepted: usize, required: usize },
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Error::InvalidParameter(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::invalid_parameter("n must be at least 2").to_string(),
            "invalid parameter: n must be at least 2"
        );
        assert_eq!(
            Error::GenerationExhausted { attempts: 3 }.to_string(),
            "no connected graph generated after 3 attempts"
        );
        assert_eq!(
            Error::DisconnectedGraph {
                accepted: 1,
                required: 3
            }
            .to_string(),
            "graph is disconnected: spanning tree reached 1 of 3 edges"
        );
    }
}
