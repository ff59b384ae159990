/*!
Bounded index types used to address states and patterns.

Every state in a trie or automaton lives in a single arena, and every other
state refers to it by a [`StateID`]. Patterns are likewise numbered by a
[`PatternID`]. Both are represented by a `u32` that never exceeds
`i32::MAX - 1`, which keeps transitions compact and lets construction report
overflow as an error instead of silently wrapping.
*/

use alloc::vec::Vec;

/// The largest value representable by an ID, as a `u32`.
#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
const MAX_ID: u32 = core::i32::MAX as u32 - 1;

#[cfg(target_pointer_width = "16")]
const MAX_ID: u32 = core::i16::MAX as u32 - 1;

macro_rules! define_index_type {
    (
        $(#[$doc:meta])*
        $name:ident, $err:ident
    ) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord,
        )]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// The maximum value.
            pub const MAX: $name = $name(MAX_ID);

            /// The total number of values that can be represented.
            pub const LIMIT: usize = MAX_ID as usize + 1;

            /// The zero value.
            pub const ZERO: $name = $name(0);

            /// Create a new ID from the given index.
            ///
            /// If the index exceeds [`Self::MAX`], then this returns an error.
            #[inline]
            pub fn new(index: usize) -> Result<$name, $err> {
                if index > MAX_ID as usize {
                    return Err($err { attempted: index as u64 });
                }
                Ok($name(index as u32))
            }

            /// Like `new`, but panics if the given index is not valid.
            #[inline]
            pub fn must(index: usize) -> $name {
                match $name::new(index) {
                    Ok(id) => id,
                    Err(err) => panic!("{}", err),
                }
            }

            /// Return this ID as a `usize`, suitable for indexing.
            #[inline]
            pub const fn as_usize(&self) -> usize {
                self.0 as usize
            }
        }

        impl<T> core::ops::Index<$name> for [T] {
            type Output = T;

            #[inline]
            fn index(&self, index: $name) -> &T {
                &self[index.as_usize()]
            }
        }

        impl<T> core::ops::IndexMut<$name> for [T] {
            #[inline]
            fn index_mut(&mut self, index: $name) -> &mut T {
                &mut self[index.as_usize()]
            }
        }

        impl<T> core::ops::Index<$name> for Vec<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: $name) -> &T {
                &self[index.as_usize()]
            }
        }

        impl<T> core::ops::IndexMut<$name> for Vec<T> {
            #[inline]
            fn index_mut(&mut self, index: $name) -> &mut T {
                &mut self[index.as_usize()]
            }
        }

        #[cfg(test)]
        impl quickcheck::Arbitrary for $name {
            fn arbitrary(gen: &mut quickcheck::Gen) -> $name {
                $name(<u32 as quickcheck::Arbitrary>::arbitrary(gen) % MAX_ID)
            }
        }

        /// The error returned when an index is too big to be an ID.
        ///
        /// When the `std` feature is enabled, this implements the `Error`
        /// trait.
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub struct $err {
            attempted: u64,
        }

        impl $err {
            /// Returns the index that could not be converted to an ID.
            pub fn attempted(&self) -> u64 {
                self.attempted
            }
        }

        #[cfg(feature = "std")]
        impl std::error::Error for $err {}

        impl core::fmt::Display for $err {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(
                    f,
                    "failed to create {} from {}, which exceeds {}",
                    stringify!($name),
                    self.attempted,
                    MAX_ID,
                )
            }
        }
    };
}

define_index_type!(
    /// The identifier of a pattern in a trie or automaton.
    ///
    /// Pattern IDs are assigned densely, starting at zero, in the order in
    /// which distinct patterns are first inserted.
    PatternID,
    PatternIDError
);

define_index_type!(
    /// The identifier of a state in a trie or automaton.
    ///
    /// A state ID is an index into the arena of states owned by a single
    /// trie or automaton. The root is always [`StateID::ZERO`]. Using a
    /// state ID with a trie or automaton other than the one that produced it
    /// gives unspecified (but memory safe) results, and panics when the ID is
    /// out of range.
    StateID,
    StateIDError
);
