/*!
The prefix tree that every automaton is built from.

A [`Trie`] is the mutable half of construction. Patterns are inserted one at a
time, sharing common prefixes, and then [`Trie::finalize`] consumes the trie
to produce an immutable [`Automaton`]. Since finalization takes the trie by
value, it is impossible to insert a pattern into an automaton whose failure
links have already been computed, or to finalize the same trie twice.
*/

use alloc::vec::Vec;

use crate::{
    automaton::Automaton,
    error::BuildError,
    symbol::Symbol,
    util::primitives::{PatternID, StateID},
};

/// A prefix tree of patterns, prior to the computation of failure links.
///
/// # Example
///
/// ```
/// use aho_trie::Trie;
///
/// let mut trie = Trie::<u8>::new();
/// let ab = trie.insert("ab")?;
/// // Re-inserting a pattern is a no-op that returns the original ID.
/// assert_eq!(ab, trie.insert("ab")?);
/// // 'abc' reuses the states for 'a' and 'b'.
/// trie.insert("abc")?;
/// assert_eq!(4, trie.states_len());
///
/// let aut = trie.finalize();
/// assert!(aut.is_match(b"xxabx"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Trie<S> {
    /// The arena of states. The root is always at `StateID::ZERO`.
    states: Vec<State<S>>,
    /// The length, in symbols, of each distinct pattern, indexed by
    /// `PatternID`.
    pattern_lens: Vec<usize>,
    /// An optional cap on `states.len()`.
    state_limit: Option<usize>,
}

impl<S: Symbol> Trie<S> {
    /// Create a new trie containing only the root state.
    pub fn new() -> Trie<S> {
        let root = State {
            symbol: None,
            depth: 0,
            transitions: Vec::new(),
            pattern: None,
        };
        Trie {
            states: alloc::vec![root],
            pattern_lens: Vec::new(),
            state_limit: None,
        }
    }

    /// Set a limit on the total number of states, including the root, that
    /// this trie may hold. Insertions that would exceed it return an error.
    ///
    /// `None` (the default) means the only limit is [`StateID::LIMIT`].
    pub fn state_limit(&mut self, limit: Option<usize>) -> &mut Trie<S> {
        self.state_limit = limit;
        self
    }

    /// Insert a pattern into this trie and return its ID.
    ///
    /// Pattern IDs are assigned densely, in the order in which distinct
    /// patterns are first inserted. Inserting a pattern that is already
    /// present changes nothing and returns the ID it was first given.
    ///
    /// The empty pattern is permitted and marks the root as terminal. Once
    /// finalized, such an automaton is terminal in every state.
    ///
    /// # Errors
    ///
    /// This only fails when the trie runs out of room: when a new state or
    /// pattern ID would overflow its ID type, or when the configured
    /// [`Trie::state_limit`] would be exceeded. On failure, states created
    /// for a prefix of the pattern remain in the trie, but the pattern itself
    /// is not marked as terminal anywhere.
    pub fn insert<P: AsRef<[S]>>(
        &mut self,
        pattern: P,
    ) -> Result<PatternID, BuildError> {
        let pattern = pattern.as_ref();
        let mut prev = StateID::ZERO;
        for &symbol in pattern.iter() {
            prev = match self.next_state(prev, symbol) {
                Some(next) => next,
                None => {
                    let depth = self.states[prev].depth + 1;
                    let next = self.add_state(symbol, depth)?;
                    self.states[prev]
                        .transitions
                        .push(Transition { symbol, next });
                    next
                }
            };
        }
        if let Some(pid) = self.states[prev].pattern {
            return Ok(pid);
        }
        let pid = PatternID::new(self.pattern_lens.len()).map_err(|_| {
            BuildError::too_many_patterns(self.pattern_lens.len() + 1)
        })?;
        self.pattern_lens.push(pattern.len());
        self.states[prev].pattern = Some(pid);
        Ok(pid)
    }

    /// Compute failure links for every state in this trie and return the
    /// resulting automaton.
    ///
    /// This consumes the trie, so it always runs exactly once and only after
    /// every pattern has been inserted.
    pub fn finalize(self) -> Automaton<S> {
        Automaton::from_trie(self)
    }

    /// Return the total number of states in this trie, including the root.
    pub fn states_len(&self) -> usize {
        self.states.len()
    }

    /// Return the number of distinct patterns inserted into this trie.
    pub fn patterns_len(&self) -> usize {
        self.pattern_lens.len()
    }

    /// Returns true if and only if the path to the given state is exactly
    /// one of the inserted patterns.
    ///
    /// Unlike [`Automaton::is_terminal`], nothing is inherited here, since
    /// failure links do not exist yet.
    ///
    /// # Panics
    ///
    /// This panics if the given state ID does not belong to this trie.
    pub fn is_terminal(&self, sid: StateID) -> bool {
        self.states[sid].pattern.is_some()
    }

    /// Return the state reached from the given state by the given symbol,
    /// without any fallback.
    ///
    /// # Panics
    ///
    /// This panics if the given state ID does not belong to this trie.
    pub fn next_state(&self, sid: StateID, symbol: S) -> Option<StateID> {
        self.states[sid].next_state(symbol)
    }

    fn add_state(
        &mut self,
        symbol: S,
        depth: usize,
    ) -> Result<StateID, BuildError> {
        if let Some(limit) = self.state_limit {
            if self.states.len() >= limit {
                return Err(BuildError::exceeded_state_limit(limit));
            }
        }
        let id = StateID::new(self.states.len())
            .map_err(|_| BuildError::too_many_states(self.states.len() + 1))?;
        self.states.push(State {
            symbol: Some(symbol),
            depth,
            transitions: Vec::new(),
            pattern: None,
        });
        Ok(id)
    }

    /// Decompose this trie into its states and pattern lengths.
    pub(crate) fn into_parts(self) -> (Vec<State<S>>, Vec<usize>) {
        (self.states, self.pattern_lens)
    }
}

impl<S: Symbol> Default for Trie<S> {
    fn default() -> Trie<S> {
        Trie::new()
    }
}

impl<S: Symbol> core::fmt::Debug for Trie<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        writeln!(f, "Trie(")?;
        fmt_tree(
            f,
            |sid| &self.states[sid].transitions[..],
            |f, sid| {
                let state = &self.states[sid];
                fmt_symbol(f, state.symbol)?;
                write!(f, " fail=@")?;
                if let Some(pid) = state.pattern {
                    write!(f, " MATCH({})", pid.as_usize())?;
                }
                Ok(())
            },
        )?;
        writeln!(f, ")")?;
        Ok(())
    }
}

/// A single state in a trie.
#[derive(Clone)]
pub(crate) struct State<S> {
    /// The symbol on the edge from this state's parent. Only the root has
    /// none.
    pub(crate) symbol: Option<S>,
    /// The length of the path from the root to this state.
    pub(crate) depth: usize,
    /// The goto function. Symbols are unique and kept in insertion order.
    pub(crate) transitions: Vec<Transition<S>>,
    /// The pattern whose final symbol ends here, if any.
    pub(crate) pattern: Option<PatternID>,
}

impl<S: Symbol> State<S> {
    pub(crate) fn next_state(&self, symbol: S) -> Option<StateID> {
        next_state(&self.transitions, symbol)
    }
}

/// A single edge out of a state.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Transition<S> {
    pub(crate) symbol: S,
    pub(crate) next: StateID,
}

/// Look up the target of the transition for `symbol`, if one exists.
pub(crate) fn next_state<S: Symbol>(
    transitions: &[Transition<S>],
    symbol: S,
) -> Option<StateID> {
    for t in transitions.iter() {
        if t.symbol == symbol {
            return Some(t.next);
        }
    }
    None
}

/// Writes a depth first rendering of the tree rooted at `StateID::ZERO`, one
/// state per line and indented by depth.
///
/// `transitions` returns the children of a state and `describe` writes the
/// part of a line after the state ID. The traversal uses an explicit stack,
/// so deep tries cannot overflow the call stack.
pub(crate) fn fmt_tree<'a, S, T, D>(
    f: &mut core::fmt::Formatter,
    transitions: T,
    mut describe: D,
) -> core::fmt::Result
where
    S: Symbol + 'a,
    T: Fn(StateID) -> &'a [Transition<S>],
    D: FnMut(&mut core::fmt::Formatter, StateID) -> core::fmt::Result,
{
    let mut stack = alloc::vec![(StateID::ZERO, 0)];
    while let Some((sid, level)) = stack.pop() {
        write!(f, "{:w$}{:06}: ", "", sid.as_usize(), w = 2 * level)?;
        describe(f, sid)?;
        writeln!(f)?;
        for t in transitions(sid).iter().rev() {
            stack.push((t.next, level + 1));
        }
    }
    Ok(())
}

pub(crate) fn fmt_symbol<S: Symbol>(
    f: &mut core::fmt::Formatter,
    symbol: Option<S>,
) -> core::fmt::Result {
    match symbol {
        None => write!(f, "ROOT"),
        Some(symbol) => write!(f, "{:?}", symbol),
    }
}
