use crate::{
    automaton::Automaton, error::BuildError, symbol::Symbol, trie::Trie,
};

/// The configuration used for building an [`Automaton`].
///
/// A configuration is a simple data object that is typically used with
/// [`Builder::configure`].
///
/// The default configuration guarantees that building an automaton can only
/// fail when the number of states or patterns overflows its ID type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    // Every knob is optional so that an unset option can be told apart from
    // one explicitly set to its default. 'overwrite' relies on this.
    state_limit: Option<Option<usize>>,
    prefilter: Option<bool>,
}

impl Config {
    /// Return a new default configuration.
    pub fn new() -> Config {
        Config::default()
    }

    /// Set a limit on the total number of trie states, including the root.
    ///
    /// If inserting a pattern would require more states than this, then
    /// building fails with an error for which
    /// [`BuildError::is_state_limit_exceeded`] returns true.
    ///
    /// By default there is no limit other than
    /// [`StateID::LIMIT`](crate::StateID::LIMIT).
    ///
    /// # Example
    ///
    /// ```
    /// use aho_trie::{Builder, Config};
    ///
    /// let result = Builder::new()
    ///     .configure(Config::new().state_limit(Some(4)))
    ///     .build_many::<u8, _>(&["abcd"]);
    /// assert!(result.unwrap_err().is_state_limit_exceeded());
    /// ```
    pub fn state_limit(mut self, limit: Option<usize>) -> Config {
        self.state_limit = Some(limit);
        self
    }

    /// Whether to attach a prefilter to the automaton when one applies.
    ///
    /// A prefilter lets a search skip over symbols that cannot begin a match
    /// while it sits at the root. It is only ever built for automata over
    /// bytes, and only when at most three distinct bytes begin a pattern.
    /// Disabling it never changes which matches are reported.
    ///
    /// This is enabled by default.
    pub fn prefilter(mut self, yes: bool) -> Config {
        self.prefilter = Some(yes);
        self
    }

    /// Returns the configured state limit, if any.
    pub fn get_state_limit(&self) -> Option<usize> {
        self.state_limit.unwrap_or(None)
    }

    /// Returns whether a prefilter will be built when possible.
    pub fn get_prefilter(&self) -> bool {
        self.prefilter.unwrap_or(true)
    }

    /// Return a configuration that takes every option set in `o`, and falls
    /// back to `self` for the rest.
    pub(crate) fn overwrite(self, o: Config) -> Config {
        Config {
            state_limit: o.state_limit.or(self.state_limit),
            prefilter: o.prefilter.or(self.prefilter),
        }
    }
}

/// A builder for an [`Automaton`].
///
/// This inserts every pattern into a fresh [`Trie`], finalizes it, and
/// attaches a prefilter according to its [`Config`]. Callers that want to
/// insert patterns incrementally should use [`Trie`] directly.
///
/// # Example
///
/// ```
/// use aho_trie::{Builder, Config, Match};
///
/// let aut = Builder::new()
///     .configure(Config::new().prefilter(false))
///     .build_many::<char, _>(&[vec!['ü', 'b'], vec!['b']])?;
/// let haystack: Vec<char> = "üb".chars().collect();
/// let matches: Vec<Match> = aut.find_iter(&haystack).collect();
/// assert_eq!(vec![Match::must(0, 0..2), Match::must(1, 1..2)], matches);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new builder with its default configuration.
    pub fn new() -> Builder {
        Builder { config: Config::default() }
    }

    /// Apply the given configuration options to this builder.
    pub fn configure(&mut self, config: Config) -> &mut Builder {
        self.config = self.config.overwrite(config);
        self
    }

    /// Build an automaton for a single pattern.
    pub fn build<S: Symbol, P: AsRef<[S]>>(
        &self,
        pattern: P,
    ) -> Result<Automaton<S>, BuildError> {
        self.build_many(&[pattern])
    }

    /// Build an automaton for the given patterns.
    ///
    /// Each distinct pattern is assigned a [`PatternID`](crate::PatternID) in
    /// the order it first appears. A pattern that repeats an earlier one
    /// shares its ID.
    pub fn build_many<S: Symbol, P: AsRef<[S]>>(
        &self,
        patterns: &[P],
    ) -> Result<Automaton<S>, BuildError> {
        debug!("building automaton from {} patterns", patterns.len());
        let mut trie = Trie::new();
        trie.state_limit(self.config.get_state_limit());
        for p in patterns.iter() {
            trie.insert(p)?;
        }
        debug!(
            "trie built: {} states for {} distinct patterns",
            trie.states_len(),
            trie.patterns_len(),
        );
        Ok(Automaton::from_trie_with(trie, self.config.get_prefilter()))
    }
}

impl Default for Builder {
    fn default() -> Builder {
        Builder::new()
    }
}
