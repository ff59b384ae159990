/*!
Types that describe what a search found.

Offsets are always counted in symbols, not bytes. For a `u8` automaton the
two coincide. For a `char` automaton, an offset is an index into the
`[char]` haystack that was searched.
*/

use core::ops::Range;

use crate::util::primitives::PatternID;

/// A half-open interval `start..end` of symbol offsets in a haystack.
///
/// Spans convert to and from `Range<usize>`, and a slice of symbols can be
/// indexed by a span directly.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Span {
    /// The offset of the first symbol in the span.
    pub start: usize,
    /// The offset one past the last symbol in the span.
    pub end: usize,
}

impl Span {
    /// Returns this span as a range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the number of symbols covered by this span.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if and only if this span covers no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl core::fmt::Debug for Span {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Range<usize>> for Span {
    #[inline]
    fn from(r: Range<usize>) -> Span {
        Span { start: r.start, end: r.end }
    }
}

impl From<Span> for Range<usize> {
    #[inline]
    fn from(span: Span) -> Range<usize> {
        span.range()
    }
}

impl<T> core::ops::Index<Span> for [T] {
    type Output = [T];

    #[inline]
    fn index(&self, span: Span) -> &[T] {
        &self[span.range()]
    }
}

/// One occurrence of one pattern in a haystack.
///
/// The span of a match always has the same length as its pattern, since
/// every pattern is a fixed sequence of symbols.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Match {
    pattern: PatternID,
    span: Span,
}

impl Match {
    /// Create a match of the given pattern at the given span.
    ///
    /// # Panics
    ///
    /// This panics if the span ends before it starts.
    ///
    /// # Example
    ///
    /// ```
    /// use aho_trie::{Match, PatternID};
    ///
    /// let m = Match::new(PatternID::ZERO, 5..10);
    /// assert_eq!(0, m.pattern().as_usize());
    /// assert_eq!((5, 10), (m.start(), m.end()));
    /// ```
    #[inline]
    pub fn new<R: Into<Span>>(pattern: PatternID, span: R) -> Match {
        let span = span.into();
        assert!(
            span.start <= span.end,
            "match span {:?} ends before it starts",
            span,
        );
        Match { pattern, span }
    }

    /// Like [`Match::new`], but takes the pattern ID as a `usize`. This is
    /// mostly convenient in tests.
    ///
    /// # Panics
    ///
    /// This panics if the span ends before it starts, or if the pattern ID
    /// is not valid.
    #[inline]
    pub fn must<R: Into<Span>>(pattern: usize, span: R) -> Match {
        Match::new(PatternID::must(pattern), span)
    }

    /// Create a match of a pattern with `len` symbols that ends at `end`.
    ///
    /// Scans only know where a match ends, so this is how they build one.
    #[inline]
    pub(crate) fn ending_at(
        pattern: PatternID,
        end: usize,
        len: usize,
    ) -> Match {
        Match { pattern, span: Span { start: end - len, end } }
    }

    /// Returns the ID of the pattern that matched.
    #[inline]
    pub fn pattern(&self) -> PatternID {
        self.pattern
    }

    /// Returns the offset at which this match starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Returns the offset at which this match ends, exclusive.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Returns the span of this match as a range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.span.range()
    }

    /// Returns the span of this match.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns true if this is a match of the empty pattern.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}
