use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Pronoun swaps applied to text echoed back to the user.
pub const REFLECTIONS: &[(&str, &str)] = &[
    ("i am", "you are"),
    ("i was", "you were"),
    ("i", "you"),
    ("i'm", "you are"),
    ("i'd", "you would"),
    ("i've", "you have"),
    ("i'll", "you will"),
    ("my", "your"),
    ("you are", "I am"),
    ("you were", "I was"),
    ("you've", "I have"),
    ("you'll", "I will"),
    ("your", "my"),
    ("yours", "mine"),
    ("you", "me"),
    ("me", "you"),
];

static REFLECTION_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| REFLECTIONS.iter().copied().collect());

/// Longest keys first so "i am" wins over "i".
static REFLECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let mut keys: Vec<&str> = REFLECTIONS.iter().map(|(k, _)| *k).collect();
    keys.sort_by_key(|k| std::cmp::Reverse(k.len()));
    let alternation = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b({alternation})\b")).expect("valid reflection regex")
});

/// Lowercase `text` and swap first- and second-person phrases,
/// whole words only, in a single pass.
pub fn reflect(text: &str) -> String {
    let lower = text.to_lowercase();
    REFLECTION_RE
        .replace_all(&lower, |caps: &Captures| {
            let word = &caps[1];
            REFLECTION_MAP.get(word).copied().unwrap_or(word).to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_first_person() {
        assert_eq!(reflect("I am tired"), "you are tired");
        assert_eq!(reflect("my back hurts"), "your back hurts");
        assert_eq!(reflect("i've got a cold"), "you have got a cold");
    }

    #[test]
    fn swaps_second_person() {
        assert_eq!(reflect("you are kind"), "I am kind");
        assert_eq!(reflect("tell me about your day"), "tell you about my day");
    }

    #[test]
    fn single_pass_does_not_swap_back() {
        assert_eq!(reflect("you and me"), "me and you");
    }

    #[test]
    fn whole_words_only() {
        assert_eq!(reflect("mind my diet"), "mind your diet");
        assert_eq!(reflect("youth"), "youth");
    }

    #[test]
    fn empty_text() {
        assert_eq!(reflect(""), "");
    }
}
