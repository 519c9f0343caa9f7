use once_cell::sync::Lazy;
use regex::Regex;

/// Two word fragments joined by a straight or curly apostrophe.
static CONTRACTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)['’](\w+)").unwrap());

/// A digit run, optionally closed by an ordinal suffix ending the word.
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+((?:st|nd|rd|th)\b)?").unwrap());

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]+").unwrap());

/// Normalizes raw text into an ordered sequence of word tokens.
///
/// Steps, in order:
/// 1. lowercase;
/// 2. collapse contractions (`don't` -> `dont`);
/// 3. strip bare digit runs, keep ordinal numbers (`3rd`, `21st`);
/// 4. replace every other non-word character with a space;
/// 5. split on whitespace runs.
///
/// Duplicates and order are preserved, unlike an index tokenizer.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let collapsed = CONTRACTION.replace_all(&lowered, "$1$2");
    let without_numbers = NUMBER.replace_all(&collapsed, |caps: &regex::Captures| {
        if caps.get(1).is_some() {
            caps[0].to_string()
        } else {
            " ".to_string()
        }
    });
    let cleaned = NON_WORD.replace_all(&without_numbers, " ");

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Extracts the last word of a display name (`"By Elder Dieter F. Uchtdorf"` -> `"Uchtdorf"`).
pub fn last_word(name: &str) -> Option<String> {
    name.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
        .last()
        .map(str::to_string)
}
