/*!
This crate builds Aho-Corasick automata: matchers that find every occurrence
of every pattern from a fixed set in a single left-to-right pass over a
haystack.

Construction happens in two phases. First, patterns are inserted into a
[`Trie`], which shares common prefixes between patterns. Second,
[`Trie::finalize`] computes a _failure link_ for every state. A failure link
points to the state for the longest proper suffix of the current path that is
also a path in the trie. The result is an immutable [`Automaton`].

Patterns are sequences of any [`Symbol`] type. This includes bytes, `char`s
and the other primitive integers. Searching bytes additionally benefits from
a `memchr` based prefilter when few distinct bytes begin a pattern.

# Example: incremental construction

```
use aho_trie::Trie;

let mut trie = Trie::<u8>::new();
for pattern in &["a", "ab", "ac", "adab", "adada"] {
    trie.insert(pattern)?;
}
let aut = trie.finalize();

let walk = |path: &str| {
    path.bytes().try_fold(aut.root(), |sid, b| aut.next_state(sid, b))
};
let ada = walk("ada").unwrap();
// The longest proper suffix of 'ada' in the trie is 'a'...
assert_eq!(walk("a"), Some(aut.failure(ada)));
// ...so 'ada' is terminal even though it was never inserted.
assert!(aut.is_terminal(ada));
# Ok::<(), Box<dyn std::error::Error>>(())
```

# Example: searching

```
use aho_trie::{Automaton, Match};

let aut = Automaton::<u8>::new(&["he", "she", "his", "hers"])?;
let matches: Vec<Match> = aut.find_iter(b"ushers").collect();
assert_eq!(vec![
    Match::must(1, 1..4),
    Match::must(0, 2..4),
    Match::must(3, 2..6),
], matches);
# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** - Enabled by default. Provides `std::error::Error` impls. When
  disabled, the crate is `no_std` but still requires `alloc`.
* **logging** - Emits construction diagnostics through the `log` crate.
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(any(
    target_pointer_width = "16",
    target_pointer_width = "32",
    target_pointer_width = "64"
)))]
compile_error!("aho-trie currently not supported on non-{16,32,64}");

extern crate alloc;

pub use crate::{
    automaton::{Automaton, Matches},
    builder::{Builder, Config},
    error::BuildError,
    search::FindIter,
    symbol::Symbol,
    trie::Trie,
    util::{
        primitives::{PatternID, PatternIDError, StateID, StateIDError},
        search::{Match, Span},
    },
};

#[macro_use]
mod macros;

mod automaton;
mod builder;
mod error;
mod search;
mod symbol;
mod trie;
pub mod util;
