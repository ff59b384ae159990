use crate::util::primitives::{PatternID, StateID};

/// An error that can occur while inserting patterns into a trie.
///
/// Insertion of a pattern never fails for any reason intrinsic to the
/// pattern. The only failures come from running out of room: either the
/// number of states or patterns exceeds what a [`StateID`] or [`PatternID`]
/// can represent, or the trie would grow beyond the limit set by
/// [`Config::state_limit`](crate::Config::state_limit).
///
/// This error only provides a human readable message via its
/// `std::fmt::Display` impl.
#[derive(Clone, Debug)]
pub struct BuildError {
    kind: ErrorKind,
}

/// The kind of error that occurred during construction.
#[derive(Clone, Debug)]
enum ErrorKind {
    /// An error that occurs if too many states are produced while building a
    /// trie.
    TooManyStates {
        /// The minimum number of states that are desired, which exceeds the
        /// limit.
        given: usize,
        /// The limit on the number of states.
        limit: usize,
    },
    /// An error that occurs if too many distinct patterns are inserted.
    TooManyPatterns {
        /// The number of patterns given, which exceeds the limit.
        given: usize,
        /// The limit on the number of patterns.
        limit: usize,
    },
    /// An error that occurs when a trie grows beyond its configured number
    /// of states.
    ExceededStateLimit {
        /// The configured limit, in states.
        limit: usize,
    },
}

impl BuildError {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn too_many_states(given: usize) -> BuildError {
        let limit = StateID::LIMIT;
        BuildError { kind: ErrorKind::TooManyStates { given, limit } }
    }

    pub(crate) fn too_many_patterns(given: usize) -> BuildError {
        let limit = PatternID::LIMIT;
        BuildError { kind: ErrorKind::TooManyPatterns { given, limit } }
    }

    pub(crate) fn exceeded_state_limit(limit: usize) -> BuildError {
        BuildError { kind: ErrorKind::ExceededStateLimit { limit } }
    }

    /// Returns true if and only if this error was caused by exceeding a
    /// configured state limit.
    pub fn is_state_limit_exceeded(&self) -> bool {
        match *self.kind() {
            ErrorKind::ExceededStateLimit { .. } => true,
            _ => false,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}

impl core::fmt::Display for BuildError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self.kind() {
            ErrorKind::TooManyStates { given, limit } => write!(
                f,
                "attempted to create {} trie states, \
                 which exceeds the limit of {}",
                given, limit,
            ),
            ErrorKind::TooManyPatterns { given, limit } => write!(
                f,
                "attempted to insert {} patterns, \
                 which exceeds the limit of {}",
                given, limit,
            ),
            ErrorKind::ExceededStateLimit { limit } => write!(
                f,
                "trie exceeded the configured limit of {} states",
                limit,
            ),
        }
    }
}
