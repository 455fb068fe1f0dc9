use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// `first6...last4` for anything longer than 14 characters.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 14 {
        return address.to_string();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Same shape as [`shorten_address`] but applied regardless of length, for
/// file names.
pub fn abbreviate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}...{tail}")
}

/// Longest numeric prefix of the text before the first space, so `"1.5 ETH"`
/// and `"1.5ETH"` both give `1.5`. Overflow and a literal `Infinity` stay
/// infinite; no leading number gives `0.0`, and `-0` folds to `0.0`.
pub fn parse_value(value: &str) -> f64 {
    let token = value.split(' ').next().unwrap_or_default();

    let amount = (1..=token.len())
        .rev()
        .filter(|&end| token.is_char_boundary(end))
        .map(|end| &token[..end])
        .filter(|prefix| is_numeric_literal(prefix))
        .find_map(|prefix| prefix.parse::<f64>().ok())
        .filter(|amount| !amount.is_nan())
        .unwrap_or(0.0);

    amount + 0.0
}

/// Rust's float parser also takes `inf` and `nan` in any case; only digits or
/// the exact word `Infinity` count here.
fn is_numeric_literal(prefix: &str) -> bool {
    let unsigned = prefix.strip_prefix(['+', '-']).unwrap_or(prefix);
    unsigned == "Infinity"
        || unsigned
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
}

/// Deterministic seed derived from an identifier.
pub fn stable_seed(id: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    hasher.finish()
}
