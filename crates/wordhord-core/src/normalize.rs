use unicode_normalization::UnicodeNormalization;

/// Reduce `raw` to the ASCII search key the dictionary index stores.
///
/// Lowercases, decomposes Unicode, maps eth/thorn to "th" and the ash
/// ligature to "ae", then keeps only lowercase letters and single spaces.
/// Must match the normalization the database build applied to headword
/// forms and definition tokens, or nothing would ever match.
pub fn normalize(raw: &str) -> String {
    let decomposed: String = raw.to_lowercase().nfkd().collect();
    let mut out = String::with_capacity(decomposed.len());
    for ch in decomposed.chars() {
        match ch {
            'ð' | 'þ' => out.push_str("th"),
            'æ' => out.push_str("ae"),
            'a'..='z' | ' ' => out.push(ch),
            _ => {}
        }
    }
    // Collapses runs of spaces and trims both ends.
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
