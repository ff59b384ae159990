/*!
A skip-ahead routine for searches that sit at the root state.

While a scan is at the root of an automaton, every symbol that has no
transition out of the root just loops back to the root. If the root is not
terminal, no match can be reported until the scan consumes a symbol that
starts some pattern. When the haystack is made of bytes and there are only a
few such starting bytes, `memchr` can find the next one far faster than the
automaton can step over the bytes in between.
*/

use crate::symbol::Symbol;

/// A start-byte prefilter.
///
/// A prefilter never produces false negatives. Every position it skips is a
/// position at which the automaton would have stayed at the root.
#[derive(Clone, Debug)]
pub(crate) enum Prefilter {
    Memchr(u8),
    Memchr2(u8, u8),
    Memchr3(u8, u8, u8),
}

impl Prefilter {
    /// Build a prefilter from the symbols labeling the transitions out of
    /// the root, if one applies.
    ///
    /// None is returned when the symbols are not bytes, when there are too
    /// many of them, or when the root is terminal (since then every position
    /// reports a match).
    pub(crate) fn new<S, I>(
        root_is_terminal: bool,
        start_symbols: I,
    ) -> Option<Prefilter>
    where
        S: Symbol,
        I: IntoIterator<Item = S>,
    {
        if root_is_terminal {
            debug!("prefilter building failed: root state is terminal");
            return None;
        }
        let mut bytes = [0u8; 3];
        let mut len = 0;
        for symbol in start_symbols {
            let byte = match symbol.as_byte() {
                Some(byte) => byte,
                None => {
                    debug!("prefilter building failed: symbols are not bytes");
                    return None;
                }
            };
            if len == bytes.len() {
                debug!("prefilter building failed: too many start bytes");
                return None;
            }
            bytes[len] = byte;
            len += 1;
        }
        match len {
            0 => {
                debug!("prefilter building failed: no start bytes");
                None
            }
            1 => {
                debug!("prefilter built: memchr");
                Some(Prefilter::Memchr(bytes[0]))
            }
            2 => {
                debug!("prefilter built: memchr2");
                Some(Prefilter::Memchr2(bytes[0], bytes[1]))
            }
            _ => {
                debug!("prefilter built: memchr3");
                Some(Prefilter::Memchr3(bytes[0], bytes[1], bytes[2]))
            }
        }
    }

    /// Return the position of the next byte at or after `at` that could
    /// begin a match. When there is none, no match can begin in the rest of
    /// the haystack.
    #[inline]
    pub(crate) fn find(&self, haystack: &[u8], at: usize) -> Option<usize> {
        let rest = &haystack[at..];
        let i = match *self {
            Prefilter::Memchr(b1) => memchr::memchr(b1, rest),
            Prefilter::Memchr2(b1, b2) => memchr::memchr2(b1, b2, rest),
            Prefilter::Memchr3(b1, b2, b3) => {
                memchr::memchr3(b1, b2, b3, rest)
            }
        };
        i.map(|i| at + i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice() {
        assert!(matches!(
            Prefilter::new(false, b"a".iter().copied()),
            Some(Prefilter::Memchr(b'a'))
        ));
        assert!(matches!(
            Prefilter::new(false, b"ab".iter().copied()),
            Some(Prefilter::Memchr2(b'a', b'b'))
        ));
        assert!(matches!(
            Prefilter::new(false, b"abc".iter().copied()),
            Some(Prefilter::Memchr3(b'a', b'b', b'c'))
        ));
        assert!(Prefilter::new(false, b"abcd".iter().copied()).is_none());
        assert!(Prefilter::new(false, b"".iter().copied()).is_none());
        assert!(Prefilter::new(true, b"a".iter().copied()).is_none());
        assert!(Prefilter::new(false, "a".chars()).is_none());
    }

    #[test]
    fn find() {
        let pre = Prefilter::Memchr2(b'x', b'y');
        assert_eq!(Some(3), pre.find(b"abcxay", 0));
        assert_eq!(Some(5), pre.find(b"abcxay", 4));
        assert_eq!(None, pre.find(b"abcxay", 6));
        assert_eq!(None, pre.find(b"abc", 0));
    }
}
