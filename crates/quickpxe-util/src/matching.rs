/// Returns true if any of `needles` occurs in `haystack`, matching case exactly.
pub fn contains_any<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_ref()))
}

/// Case-insensitive variant of [`contains_any`], with the semantics of `findstr /i` given a
/// space-separated list of words: a line matches when it contains any one of the words.
pub fn contains_any_ignore_case<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    let haystack = haystack.to_lowercase();
    needles
        .iter()
        .any(|n| haystack.contains(&n.as_ref().to_lowercase()))
}
