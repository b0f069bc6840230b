/// Characters stripped from both ends of every word before comparison.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '?', '!', ':', ';', '(', ')', '[', ']', '{', '}', '"', '\'', '-',
];

/// Normalize a single whitespace-delimited piece: strip edge punctuation, lowercase.
///
/// Interior punctuation survives, so "library's" and "well-known" stay whole.
pub fn normalize_word(word: &str) -> String {
    word.trim_matches(PUNCTUATION).to_lowercase()
}

/// Split text into normalized tokens, dropping pieces that are pure punctuation.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect()
}
