use core::fmt::Debug;

/// A trait for types that can label the edges of a trie.
///
/// The only thing construction and search need from a symbol is equality, so
/// no constraint is placed on alphabet size. Symbols are stored by value in
/// every transition, hence `Copy`. `Debug` is required so that tries and
/// automata can render themselves.
///
/// This trait is implemented for all primitive integer types and `char`.
/// Callers with their own alphabet (an enum of tokens, say) can implement it
/// with an empty `impl` block.
///
/// The provided methods exist so that a byte alphabet can opt into
/// acceleration. Implementations for other types should not override them.
pub trait Symbol: Copy + Eq + Debug {
    /// Returns this symbol as a byte, if and only if the symbol type is `u8`.
    fn as_byte(self) -> Option<u8> {
        None
    }

    /// Returns the given haystack as a byte slice, if and only if the symbol
    /// type is `u8`.
    fn as_bytes(haystack: &[Self]) -> Option<&[u8]> {
        let _ = haystack;
        None
    }
}

impl Symbol for u8 {
    fn as_byte(self) -> Option<u8> {
        Some(self)
    }

    fn as_bytes(haystack: &[u8]) -> Option<&[u8]> {
        Some(haystack)
    }
}

macro_rules! impl_symbol {
    ($($ty:ty),*) => {
        $(impl Symbol for $ty {})*
    };
}

impl_symbol!(char, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
