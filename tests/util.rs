use aho_trie::{Automaton, StateID, Symbol};

/// Follow trie transitions (never failure links) from the root along the
/// given path.
pub fn walk<S: Symbol>(aut: &Automaton<S>, path: &[S]) -> Option<StateID> {
    path.iter().try_fold(aut.root(), |sid, &s| aut.next_state(sid, s))
}

/// Return every state in the automaton along with the path that reaches it.
pub fn paths<S: Symbol>(aut: &Automaton<S>) -> Vec<(StateID, Vec<S>)> {
    let mut out = vec![];
    let mut stack = vec![(aut.root(), vec![])];
    while let Some((sid, path)) = stack.pop() {
        for (symbol, next) in aut.transitions(sid) {
            let mut child = path.clone();
            child.push(symbol);
            stack.push((next, child));
        }
        out.push((sid, path));
    }
    out
}

/// Returns the distinct patterns in the order of their first occurrence,
/// which is also the order in which pattern IDs are assigned.
pub fn distinct<S: Symbol>(patterns: &[Vec<S>]) -> Vec<Vec<S>> {
    let mut out: Vec<Vec<S>> = vec![];
    for p in patterns.iter() {
        if !out.contains(p) {
            out.push(p.clone());
        }
    }
    out
}

/// A brute force overlapping search that reports `(pattern, start, end)`
/// triples in the same order as `Automaton::find_iter`: by end offset, then
/// longest pattern first.
pub fn naive_find<S: Symbol>(
    patterns: &[Vec<S>],
    haystack: &[S],
) -> Vec<(usize, usize, usize)> {
    let patterns = distinct(patterns);
    let mut out = vec![];
    for end in 0..=haystack.len() {
        let mut here = vec![];
        for (pid, p) in patterns.iter().enumerate() {
            if p.len() <= end && &haystack[end - p.len()..end] == &p[..] {
                here.push((pid, end - p.len(), end));
            }
        }
        // Smaller start means longer pattern.
        here.sort_by_key(|&(_, start, _)| start);
        out.extend(here);
    }
    out
}

/// Run the automaton over the haystack and return `(pattern, start, end)`
/// triples.
pub fn find_all<S: Symbol>(
    aut: &Automaton<S>,
    haystack: &[S],
) -> Vec<(usize, usize, usize)> {
    aut.find_iter(haystack)
        .map(|m| (m.pattern().as_usize(), m.start(), m.end()))
        .collect()
}

/// Shrink arbitrary patterns to a handful of short patterns over a three
/// letter alphabet, so that shared prefixes and suffixes are common.
pub fn small_patterns(patterns: Vec<Vec<u8>>) -> Vec<Vec<u8>> {
    patterns
        .into_iter()
        .take(12)
        .map(|p| p.into_iter().take(6).map(|b| b'a' + b % 3).collect())
        .collect()
}

/// Map an arbitrary haystack onto a five letter alphabet, which includes
/// letters that begin no pattern produced by `small_patterns`.
pub fn small_haystack(haystack: Vec<u8>) -> Vec<u8> {
    haystack.into_iter().take(200).map(|b| b'a' + b % 5).collect()
}
