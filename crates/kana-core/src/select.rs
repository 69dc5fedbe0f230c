//! Pick the spellings a typist should be held to and the one to display.

use indexmap::IndexSet;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Members whose length equals the minimum length, in their original order.
pub fn minimal_subset(options: &IndexSet<String>) -> IndexSet<String> {
    let Some(min) = options.iter().map(|s| char_len(s)).min() else {
        return IndexSet::new();
    };
    options
        .iter()
        .filter(|s| char_len(s) == min)
        .cloned()
        .collect()
}

/// The shortest member starting with `prefix`, or the shortest overall when
/// none does. Ties go to the earliest member.
pub fn pick_representative<'a>(options: &'a IndexSet<String>, prefix: &str) -> Option<&'a str> {
    // min_by_key returns the first of equal minimums.
    options
        .iter()
        .filter(|s| s.starts_with(prefix))
        .min_by_key(|s| char_len(s))
        .or_else(|| options.iter().min_by_key(|s| char_len(s)))
        .map(String::as_str)
}
