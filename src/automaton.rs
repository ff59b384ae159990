/*!
The finished Aho-Corasick automaton.

An [`Automaton`] is a [`Trie`] plus a failure link and an output link for
every state. It is produced exactly once by
[`Trie::finalize`] (or by a [`Builder`](crate::Builder)) and is immutable
afterwards, so it may be shared freely between threads.

# Failure links

The failure link of a state `v` points at the state whose path is the
longest proper suffix of `v`'s path that is also a path in the trie. Failure
links are computed breadth first. A state's failure target is always
shallower than the state itself, so by the time a state is visited, the
failure and output links of every state its own computation consults
are already final.

# Terminal states

A state is terminal when its path is a pattern, or when its failure target
is terminal. Each state records only its own pattern, plus an _output link_:
the nearest state along its failure chain whose path is itself a pattern.
The patterns recognized at a state are found by following output links, so
each state costs a constant amount of memory no matter how many patterns end
there.
*/

use alloc::{collections::VecDeque, vec::Vec};

use crate::{
    builder::{Builder, Config},
    error::BuildError,
    search::FindIter,
    symbol::Symbol,
    trie::{self, Transition, Trie},
    util::{
        prefilter::Prefilter,
        primitives::{PatternID, StateID},
        search::Match,
    },
};

/// An Aho-Corasick automaton over symbols of type `S`.
///
/// # Example
///
/// This builds the automaton for a handful of overlapping patterns and then
/// drives it by hand with [`Automaton::step`]. The same scan is available
/// via [`Automaton::find_iter`].
///
/// ```
/// use aho_trie::Automaton;
///
/// let aut = Automaton::<u8>::new(&["he", "she", "his", "hers"])?;
///
/// let mut sid = aut.root();
/// let mut ends = vec![];
/// for (i, &b) in b"ushers".iter().enumerate() {
///     sid = aut.step(sid, b);
///     if aut.is_terminal(sid) {
///         ends.push(i + 1);
///     }
/// }
/// // 'she' and 'he' both end at 4, 'hers' ends at 6.
/// assert_eq!(vec![4, 6], ends);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Automaton<S> {
    /// The arena of states. The root is always at `StateID::ZERO`.
    states: Vec<State<S>>,
    /// The length, in symbols, of each pattern, indexed by `PatternID`.
    pattern_lens: Vec<usize>,
    /// A skip-ahead routine used while a search sits at the root.
    prefilter: Option<Prefilter>,
}

#[derive(Clone)]
struct State<S> {
    symbol: Option<S>,
    depth: usize,
    transitions: Vec<Transition<S>>,
    failure: StateID,
    /// The pattern whose path is exactly this state's path.
    pattern: Option<PatternID>,
    /// The nearest proper suffix state, along the failure chain, that has a
    /// pattern of its own.
    output: Option<StateID>,
}

impl<S: Symbol> Automaton<S> {
    /// Build an automaton from the given patterns using the default
    /// configuration.
    ///
    /// See [`Builder`] for the available knobs.
    pub fn new<P: AsRef<[S]>>(
        patterns: &[P],
    ) -> Result<Automaton<S>, BuildError> {
        Self::builder().build_many(patterns)
    }

    /// Return a default configuration for building an automaton.
    pub fn config() -> Config {
        Config::new()
    }

    /// Return a builder for configuring the construction of an automaton.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Compute failure and output links for the given trie.
    ///
    /// A prefilter is attached whenever one applies. Use
    /// [`Config::prefilter`](crate::Config::prefilter) to disable it.
    pub fn from_trie(trie: Trie<S>) -> Automaton<S> {
        Automaton::from_trie_with(trie, true)
    }

    pub(crate) fn from_trie_with(
        trie: Trie<S>,
        prefilter: bool,
    ) -> Automaton<S> {
        let (states, pattern_lens) = trie.into_parts();
        let states = states
            .into_iter()
            .map(|s| State {
                symbol: s.symbol,
                depth: s.depth,
                transitions: s.transitions,
                failure: StateID::ZERO,
                pattern: s.pattern,
                output: None,
            })
            .collect();
        let mut aut = Automaton { states, pattern_lens, prefilter: None };
        aut.fill_failure_transitions();
        if prefilter {
            aut.prefilter = Prefilter::new(
                aut.is_terminal(aut.root()),
                aut.transitions(aut.root()).map(|(symbol, _)| symbol),
            );
        }
        debug!(
            "automaton finalized: {} states, {} patterns, {} terminal states",
            aut.states_len(),
            aut.patterns_len(),
            aut.states
                .iter()
                .filter(|s| s.pattern.is_some() || s.output.is_some())
                .count(),
        );
        aut
    }

    /// Sets the failure and output links of every state, in breadth first
    /// order starting at the root.
    fn fill_failure_transitions(&mut self) {
        let root = self.root();
        self.states[root].failure = root;
        let mut queue = VecDeque::new();
        queue.push_back(root);
        while let Some(current) = queue.pop_front() {
            for i in 0..self.states[current].transitions.len() {
                let Transition { symbol, next: child } =
                    self.states[current].transitions[i];
                let failure = if current == root {
                    root
                } else {
                    let mut dest = self.states[current].failure;
                    loop {
                        if let Some(next) = self.next_state(dest, symbol) {
                            break next;
                        }
                        if dest == root {
                            break root;
                        }
                        dest = self.states[dest].failure;
                    }
                };
                trace!(
                    "failure link: {} --{:?}--> {} fails to {}",
                    current.as_usize(),
                    symbol,
                    child.as_usize(),
                    failure.as_usize(),
                );
                // The failure target is strictly shallower than the child, so
                // its output link is already final.
                let output = match self.states[failure].pattern {
                    Some(_) => Some(failure),
                    None => self.states[failure].output,
                };
                self.states[child].failure = failure;
                self.states[child].output = output;
                queue.push_back(child);
            }
        }
    }

    /// Return the ID of the root state.
    ///
    /// Every search begins here, and it is the universal fallback of
    /// [`Automaton::step`].
    #[inline]
    pub fn root(&self) -> StateID {
        StateID::ZERO
    }

    /// Return the state reached from `current` after consuming `symbol`.
    ///
    /// When `current` has no transition for `symbol`, failure links are
    /// followed until a state that does is found. If even the root has no
    /// such transition, the root is returned. Thus the result is always a
    /// valid state of this automaton.
    ///
    /// A single call may follow several failure links, but across a full
    /// scan of a haystack the total number of failure links followed is
    /// bounded by the length of the haystack.
    ///
    /// # Panics
    ///
    /// This panics if `current` does not belong to this automaton.
    #[inline]
    pub fn step(&self, mut current: StateID, symbol: S) -> StateID {
        let root = self.root();
        loop {
            if let Some(next) = self.next_state(current, symbol) {
                return next;
            }
            if current == root {
                return root;
            }
            current = self.states[current].failure;
        }
    }

    /// Returns true if and only if some pattern is a suffix of the path to
    /// the given state.
    ///
    /// This includes patterns inherited through failure links, so reaching a
    /// terminal state during a scan means at least one pattern ends at the
    /// current position.
    ///
    /// # Panics
    ///
    /// This panics if `sid` does not belong to this automaton.
    #[inline]
    pub fn is_terminal(&self, sid: StateID) -> bool {
        let state = &self.states[sid];
        state.pattern.is_some() || state.output.is_some()
    }

    /// Return the failure target of the given state. The root fails to
    /// itself.
    ///
    /// # Panics
    ///
    /// This panics if `sid` does not belong to this automaton.
    #[inline]
    pub fn failure(&self, sid: StateID) -> StateID {
        self.states[sid].failure
    }

    /// Return the state reached from `sid` by `symbol` in the underlying
    /// trie, without following any failure links.
    ///
    /// # Panics
    ///
    /// This panics if `sid` does not belong to this automaton.
    #[inline]
    pub fn next_state(&self, sid: StateID, symbol: S) -> Option<StateID> {
        trie::next_state(&self.states[sid].transitions, symbol)
    }

    /// Return the symbol labeling the edge into the given state, or `None`
    /// for the root.
    pub fn symbol(&self, sid: StateID) -> Option<S> {
        self.states[sid].symbol
    }

    /// Return the length of the path from the root to the given state.
    pub fn depth(&self, sid: StateID) -> usize {
        self.states[sid].depth
    }

    /// Return an iterator over the outgoing trie transitions of the given
    /// state, in the order they were created.
    pub fn transitions(
        &self,
        sid: StateID,
    ) -> impl Iterator<Item = (S, StateID)> + '_ {
        self.states[sid].transitions.iter().map(|t| (t.symbol, t.next))
    }

    /// Return the pattern whose path is exactly the path to the given state,
    /// ignoring anything inherited through failure links.
    pub fn pattern(&self, sid: StateID) -> Option<PatternID> {
        self.states[sid].pattern
    }

    /// Return the output link of the given state: the deepest state on its
    /// failure chain that has a pattern of its own.
    ///
    /// The root never has an output link.
    pub fn output(&self, sid: StateID) -> Option<StateID> {
        self.states[sid].output
    }

    /// Return an iterator over the patterns recognized at the given state,
    /// longest first.
    ///
    /// This is empty if and only if the state is not terminal. Each pattern
    /// yielded costs one hop along an output link.
    ///
    /// # Panics
    ///
    /// This panics if `sid` does not belong to this automaton.
    pub fn matches(&self, sid: StateID) -> Matches<'_, S> {
        let state = &self.states[sid];
        let next = match state.pattern {
            Some(_) => Some(sid),
            None => state.output,
        };
        Matches { aut: self, next }
    }

    /// Return the length, in symbols, of the given pattern.
    ///
    /// # Panics
    ///
    /// This panics if `pid` does not belong to this automaton.
    pub fn pattern_len(&self, pid: PatternID) -> usize {
        self.pattern_lens[pid]
    }

    /// Return the number of distinct patterns in this automaton.
    pub fn patterns_len(&self) -> usize {
        self.pattern_lens.len()
    }

    /// Return the total number of states in this automaton, including the
    /// root.
    pub fn states_len(&self) -> usize {
        self.states.len()
    }

    /// Return the heap memory used by this automaton, in bytes.
    pub fn memory_usage(&self) -> usize {
        use core::mem::size_of;

        let transitions: usize = self
            .states
            .iter()
            .map(|s| s.transitions.len() * size_of::<Transition<S>>())
            .sum();
        self.states.len() * size_of::<State<S>>()
            + transitions
            + self.pattern_lens.len() * size_of::<usize>()
    }

    /// Returns true if and only if a prefilter is used by searches.
    pub fn has_prefilter(&self) -> bool {
        self.prefilter.is_some()
    }

    pub(crate) fn prefilter(&self) -> Option<&Prefilter> {
        self.prefilter.as_ref()
    }

    /// Return an iterator over every occurrence of every pattern in the
    /// given haystack, including overlapping occurrences.
    ///
    /// Matches are yielded in order of increasing end offset. Matches that
    /// share an end offset are yielded longest first. Offsets are counted in
    /// symbols.
    ///
    /// # Example
    ///
    /// ```
    /// use aho_trie::{Automaton, Match};
    ///
    /// let aut = Automaton::<u8>::new(&["a", "ab", "ac", "adab", "adada"])?;
    /// let matches: Vec<Match> = aut.find_iter(b"adada").collect();
    /// assert_eq!(vec![
    ///     Match::must(0, 0..1),
    ///     Match::must(0, 2..3),
    ///     Match::must(4, 0..5),
    ///     Match::must(0, 4..5),
    /// ], matches);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn find_iter<'a, 'h>(
        &'a self,
        haystack: &'h [S],
    ) -> FindIter<'a, 'h, S> {
        FindIter::new(self, haystack)
    }

    /// Return the first match in the given haystack, in the order reported
    /// by [`Automaton::find_iter`].
    pub fn find(&self, haystack: &[S]) -> Option<Match> {
        self.find_iter(haystack).next()
    }

    /// Returns true if and only if some pattern occurs in the given haystack.
    pub fn is_match(&self, haystack: &[S]) -> bool {
        self.find(haystack).is_some()
    }
}

impl<S: Symbol> core::fmt::Debug for Automaton<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        writeln!(f, "Automaton(")?;
        trie::fmt_tree(
            f,
            |sid| &self.states[sid].transitions[..],
            |f, sid| {
                let state = &self.states[sid];
                trie::fmt_symbol(f, state.symbol)?;
                write!(f, " fail={:06}", state.failure.as_usize())?;
                if self.is_terminal(sid) {
                    write!(f, " MATCH(")?;
                    for (i, pid) in self.matches(sid).enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", pid.as_usize())?;
                    }
                    write!(f, ")")?;
                }
                Ok(())
            },
        )?;
        for (pid, len) in self.pattern_lens.iter().enumerate() {
            writeln!(f, "pattern {}: {} symbols", pid, len)?;
        }
        writeln!(f, ")")?;
        Ok(())
    }
}

/// An iterator over the patterns recognized at a single state, longest
/// first.
///
/// This is created by [`Automaton::matches`].
#[derive(Clone)]
pub struct Matches<'a, S> {
    aut: &'a Automaton<S>,
    /// The next state on the output chain whose own pattern is yielded.
    next: Option<StateID>,
}

impl<'a, S: Symbol> Iterator for Matches<'a, S> {
    type Item = PatternID;

    #[inline]
    fn next(&mut self) -> Option<PatternID> {
        let sid = self.next?;
        let state = &self.aut.states[sid];
        self.next = state.output;
        state.pattern
    }
}

impl<'a, S: Symbol> core::iter::FusedIterator for Matches<'a, S> {}

impl<'a, S: Symbol> core::fmt::Debug for Matches<'a, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Matches")
            .field("next", &self.next.map(|sid| sid.as_usize()))
            .finish()
    }
}
