use std::{sync::Arc, thread};

use aho_trie::{Automaton, Match, PatternID, Trie};

use crate::{util::walk, Result};

fn state(aut: &Automaton<u8>, path: &str) -> aho_trie::StateID {
    walk(aut, path.as_bytes())
        .unwrap_or_else(|| panic!("no state for path {:?}", path))
}

#[test]
fn nested_prefixes() -> Result<()> {
    let mut trie = Trie::<u8>::new();
    for p in &["a", "ab", "ac", "adab", "adada"] {
        trie.insert(p)?;
    }
    // Before failure links exist, only exact patterns are terminal.
    let ada = ["a", "d", "a"]
        .iter()
        .try_fold(aho_trie::StateID::ZERO, |sid, s| {
            trie.next_state(sid, s.as_bytes()[0])
        })
        .unwrap();
    assert!(!trie.is_terminal(ada));

    let aut = trie.finalize();
    assert_eq!(ada, state(&aut, "ada"));
    assert_eq!(state(&aut, "a"), aut.failure(ada));
    assert!(aut.is_terminal(state(&aut, "a")));
    assert!(aut.is_terminal(ada));
    let got: Vec<PatternID> = aut.matches(ada).collect();
    assert_eq!(vec![PatternID::must(0)], got);

    assert_eq!(aut.root(), aut.failure(state(&aut, "a")));
    assert_eq!(aut.root(), aut.failure(state(&aut, "ad")));
    assert_eq!(state(&aut, "ad"), aut.failure(state(&aut, "adad")));
    assert_eq!(state(&aut, "ab"), aut.failure(state(&aut, "adab")));
    assert_eq!(state(&aut, "ada"), aut.failure(state(&aut, "adada")));
    assert!(!aut.is_terminal(state(&aut, "ad")));
    assert!(!aut.is_terminal(state(&aut, "adad")));
    Ok(())
}

#[test]
fn nested_prefixes_dump() -> Result<()> {
    let aut = Automaton::<char>::new(&[
        vec!['a'],
        vec!['a', 'b'],
        vec!['a', 'c'],
        vec!['a', 'd', 'a', 'b'],
        vec!['a', 'd', 'a', 'd', 'a'],
    ])?;
    let expected = "\
Automaton(
000000: ROOT fail=000000
  000001: 'a' fail=000000 MATCH(0)
    000002: 'b' fail=000000 MATCH(1)
    000003: 'c' fail=000000 MATCH(2)
    000004: 'd' fail=000000
      000005: 'a' fail=000001 MATCH(0)
        000006: 'b' fail=000002 MATCH(3, 1)
        000007: 'd' fail=000004
          000008: 'a' fail=000005 MATCH(4, 0)
pattern 0: 1 symbols
pattern 1: 2 symbols
pattern 2: 2 symbols
pattern 3: 4 symbols
pattern 4: 5 symbols
)
";
    assert_eq!(expected, format!("{:?}", aut));
    Ok(())
}

#[test]
fn empty_pattern_set() {
    let aut = Trie::<u8>::new().finalize();
    assert_eq!(1, aut.states_len());
    assert_eq!(0, aut.patterns_len());
    assert_eq!(aut.root(), aut.failure(aut.root()));
    assert!(!aut.is_terminal(aut.root()));
    for b in 0..=255u8 {
        assert_eq!(aut.root(), aut.step(aut.root(), b));
    }
    assert_eq!(None, aut.find(b"anything at all"));
    assert!(!aut.has_prefilter());
}

#[test]
fn root_fallback() -> Result<()> {
    let aut = Automaton::<u8>::new(&["abc", "bcd"])?;
    assert_eq!(aut.root(), aut.failure(aut.root()));
    assert_eq!(aut.root(), aut.step(aut.root(), b'z'));
    assert_eq!(state(&aut, "a"), aut.step(aut.root(), b'a'));
    // Every state falls back to the root on a symbol no pattern contains.
    for sid in [state(&aut, "ab"), state(&aut, "abc"), state(&aut, "bcd")] {
        assert_eq!(aut.root(), aut.step(sid, b'z'));
    }
    Ok(())
}

#[test]
fn overlapping_suffixes() -> Result<()> {
    let aut = Automaton::<u8>::new(&["he", "she", "his", "hers"])?;
    let (he, she, hers) =
        (state(&aut, "he"), state(&aut, "she"), state(&aut, "hers"));

    // Both are terminal on their own account...
    assert_eq!(Some(PatternID::must(1)), aut.pattern(she));
    assert_eq!(Some(PatternID::must(3)), aut.pattern(hers));
    // ...and 'she' also reports 'he' through its failure link.
    assert_eq!(he, aut.failure(she));
    assert!(aut.is_terminal(he));
    assert!(aut.is_terminal(she));
    assert!(aut.is_terminal(hers));
    assert_eq!(Some(he), aut.output(she));
    assert_eq!(
        vec![PatternID::must(1), PatternID::must(0)],
        aut.matches(she).collect::<Vec<_>>(),
    );

    assert_eq!(state(&aut, "h"), aut.failure(state(&aut, "sh")));
    assert_eq!(state(&aut, "s"), aut.failure(state(&aut, "his")));
    assert_eq!(aut.root(), aut.failure(state(&aut, "her")));

    let matches: Vec<Match> = aut.find_iter(b"ushers and his").collect();
    assert_eq!(
        vec![
            Match::must(1, 1..4),
            Match::must(0, 2..4),
            Match::must(3, 2..6),
            Match::must(2, 11..14),
        ],
        matches,
    );
    Ok(())
}

#[test]
fn concurrent_readers() -> Result<()> {
    let aut = Arc::new(Automaton::<u8>::new(&["he", "she", "his", "hers"])?);
    let haystack = b"she sells his shells to the ushers".repeat(50);
    let expected: Vec<Match> = aut.find_iter(&haystack).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let aut = Arc::clone(&aut);
            let haystack = haystack.clone();
            thread::spawn(move || aut.find_iter(&haystack).collect::<Vec<_>>())
        })
        .collect();
    for handle in handles {
        assert_eq!(expected, handle.join().unwrap());
    }
    Ok(())
}
