use crate::{
    automaton::Automaton,
    symbol::Symbol,
    util::{primitives::StateID, search::Match},
};

/// An iterator over all occurrences of all patterns in a haystack.
///
/// This is the scanning loop that an automaton exists for. It begins at the
/// root, calls [`Automaton::step`] once per symbol, and after each step
/// reports every pattern recognized at the resulting state. Occurrences may
/// overlap. Matches are yielded in order of increasing end offset, and
/// longest first among matches with the same end offset.
///
/// `'a` is the lifetime of the automaton and `'h` is the lifetime of the
/// haystack.
///
/// This iterator is created by [`Automaton::find_iter`].
#[derive(Clone)]
pub struct FindIter<'a, 'h, S> {
    aut: &'a Automaton<S>,
    haystack: &'h [S],
    /// The haystack as bytes, but only when the automaton has a prefilter.
    bytes: Option<&'h [u8]>,
    /// The current state, after consuming `haystack[..at]`.
    sid: StateID,
    /// The number of symbols consumed so far. This is also the end offset
    /// of every match reported at `sid`.
    at: usize,
    /// The next state on the output chain of `sid` whose pattern, if any,
    /// has not been reported yet.
    pending: Option<StateID>,
}

impl<'a, 'h, S: Symbol> FindIter<'a, 'h, S> {
    pub(crate) fn new(
        aut: &'a Automaton<S>,
        haystack: &'h [S],
    ) -> FindIter<'a, 'h, S> {
        let bytes = match aut.prefilter() {
            None => None,
            Some(_) => S::as_bytes(haystack),
        };
        FindIter {
            aut,
            haystack,
            bytes,
            sid: aut.root(),
            at: 0,
            pending: Some(aut.root()),
        }
    }
}

impl<'a, 'h, S: Symbol> Iterator for FindIter<'a, 'h, S> {
    type Item = Match;

    #[inline]
    fn next(&mut self) -> Option<Match> {
        loop {
            while let Some(sid) = self.pending {
                self.pending = self.aut.output(sid);
                if let Some(pid) = self.aut.pattern(sid) {
                    let len = self.aut.pattern_len(pid);
                    return Some(Match::ending_at(pid, self.at, len));
                }
            }
            if self.at >= self.haystack.len() {
                return None;
            }
            if self.sid == self.aut.root() {
                if let (Some(pre), Some(bytes)) =
                    (self.aut.prefilter(), self.bytes)
                {
                    match pre.find(bytes, self.at) {
                        None => {
                            self.at = self.haystack.len();
                            return None;
                        }
                        Some(i) => self.at = i,
                    }
                }
            }
            self.sid = self.aut.step(self.sid, self.haystack[self.at]);
            self.at += 1;
            self.pending = Some(self.sid);
        }
    }
}

impl<'a, 'h, S: Symbol> core::fmt::Debug for FindIter<'a, 'h, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("FindIter")
            .field("haystack_len", &self.haystack.len())
            .field("prefilter", &self.bytes.is_some())
            .field("sid", &self.sid.as_usize())
            .field("at", &self.at)
            .field("pending", &self.pending.map(|sid| sid.as_usize()))
            .finish()
    }
}

impl<'a, 'h, S: Symbol> core::iter::FusedIterator for FindIter<'a, 'h, S> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::{Builder, Config};

    use super::*;

    fn find_all(
        aut: &Automaton<u8>,
        haystack: &str,
    ) -> Vec<(usize, usize, usize)> {
        aut.find_iter(haystack.as_bytes())
            .map(|m| (m.pattern().as_usize(), m.start(), m.end()))
            .collect()
    }

    #[test]
    fn overlapping() {
        let aut =
            Automaton::<u8>::new(&["he", "she", "his", "hers"]).unwrap();
        assert_eq!(
            alloc::vec![(1, 1, 4), (0, 2, 4), (3, 2, 6)],
            find_all(&aut, "ushers"),
        );
        assert_eq!(alloc::vec![(2, 1, 4)], find_all(&aut, "this"));
        assert!(find_all(&aut, "").is_empty());
        assert!(find_all(&aut, "xyz").is_empty());
    }

    #[test]
    fn prefilter_skips_without_changing_results() {
        let patterns = ["abc", "bcd", "cd"];
        let with = Automaton::<u8>::new(&patterns).unwrap();
        let without = Builder::new()
            .configure(Config::new().prefilter(false))
            .build_many::<u8, _>(&patterns)
            .unwrap();
        assert!(with.has_prefilter());
        assert!(!without.has_prefilter());

        let haystack = "zzzabcdzzbcdzzzzzcabc";
        assert_eq!(find_all(&without, haystack), find_all(&with, haystack));
        assert_eq!(6, find_all(&with, haystack).len());
    }

    #[test]
    fn empty_pattern_matches_everywhere() {
        let aut = Automaton::<u8>::new(&["", "a"]).unwrap();
        assert_eq!(
            alloc::vec![(0, 0, 0), (1, 0, 1), (0, 1, 1), (0, 2, 2)],
            find_all(&aut, "ab"),
        );
    }

    #[test]
    fn fused() {
        let aut = Automaton::<u8>::new(&["a"]).unwrap();
        let mut it = aut.find_iter(b"a");
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }
}
