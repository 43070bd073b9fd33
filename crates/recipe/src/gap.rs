//! Which recipe ingredients are not already in the pantry.
//!
//! A recipe ingredient is considered in stock when any pantry name is a
//! substring of it. This is deliberately loose: a short pantry name such as
//! "油" also matches "ごま油" or "醤油". Callers rely on this exact behaviour.

/// Splits a recipe's ingredient text into trimmed, non-empty tokens.
///
/// The text is split on commas when it contains at least one, otherwise on
/// line breaks.
pub fn tokenize(text: &str) -> Vec<&str> {
    let tokens: Vec<&str> = if text.contains(',') {
        text.split(',').collect()
    } else {
        text.split(['\n', '\r']).collect()
    };

    tokens
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

pub fn is_available<S: AsRef<str>>(token: &str, pantry: &[S]) -> bool {
    pantry.iter().any(|name| token.contains(name.as_ref()))
}

/// Tokens of `text` not covered by any pantry name, in source order.
pub fn missing_ingredients<S: AsRef<str>>(text: &str, pantry: &[S]) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| !is_available(token, pantry))
        .map(str::to_owned)
        .collect()
}
