// To run this example, use:
//
//     cargo run --example trie-dump

use aho_trie::Trie;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut trie = Trie::<char>::new();
    for pattern in &["a", "ab", "ac", "adab", "adada"] {
        let chars: Vec<char> = pattern.chars().collect();
        let pid = trie.insert(&chars)?;
        println!("inserted {:?} as pattern {}", pattern, pid.as_usize());
    }
    println!("{:?}", trie);

    let aut = trie.finalize();
    println!("{:?}", aut);

    let haystack: Vec<char> = "xadadabx".chars().collect();
    for m in aut.find_iter(&haystack) {
        let found: String = haystack[m.range()].iter().collect();
        let pid = m.pattern().as_usize();
        println!("pattern {} at {:?}: {:?}", pid, m.span(), found);
    }
    Ok(())
}
