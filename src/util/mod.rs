/*!
Supporting types shared by tries, automata and searches.
*/

pub mod primitives;
pub mod search;

pub(crate) mod prefilter;
