//! Pattern chatbot: a stateless responder over an ordered regex table.
//!
//! Each rule is compiled case-insensitive and anchored at the start of the
//! input. The first matching rule picks one of its templates uniformly,
//! fills `%N` with the reflected Nth capture group and returns it.

pub mod patterns;
pub mod reflect;

use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, Regex};

pub use patterns::{PatternPair, DEFAULT_PATTERNS};
pub use reflect::reflect;

/// Reply used when no rule matches, which only happens with a custom
/// table that lacks a catch-all.
pub const FALLBACK_RESPONSE: &str = "I'm sorry, I don't understand that. Can you rephrase?";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(\d)").expect("valid placeholder regex"));

#[derive(Debug, Clone)]
struct ChatRule {
    regex: Regex,
    responses: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PatternChatbot {
    rules: Vec<ChatRule>,
}

impl Default for PatternChatbot {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERNS).expect("default chat patterns compile")
    }
}

impl PatternChatbot {
    /// Compile a table of `(pattern, templates)` pairs, keeping their order.
    pub fn new(pairs: &[PatternPair]) -> Result<Self, regex::Error> {
        let rules = pairs
            .iter()
            .map(|(pattern, responses)| {
                Ok(ChatRule {
                    regex: Regex::new(&format!("(?i)^(?:{pattern})"))?,
                    responses: responses.iter().map(|r| r.to_string()).collect(),
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    /// Index of the first rule matching `input`.
    pub fn matching_rule(&self, input: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.regex.is_match(input))
    }

    /// Always returns a non-empty reply.
    pub fn respond<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> String {
        for rule in &self.rules {
            if let Some(caps) = rule.regex.captures(input) {
                let Some(template) = rule.responses.choose(rng) else {
                    continue;
                };
                return tidy_punctuation(fill_template(template, &caps));
            }
        }
        FALLBACK_RESPONSE.to_string()
    }
}

fn fill_template(template: &str, caps: &Captures) -> String {
    PLACEHOLDER
        .replace_all(template, |p: &Captures| {
            let group: usize = p[1].parse().unwrap_or(0);
            caps.get(group)
                .map(|m| reflect(m.as_str()))
                .unwrap_or_default()
        })
        .into_owned()
}

fn tidy_punctuation(mut reply: String) -> String {
    if reply.ends_with("?.") {
        reply.truncate(reply.len() - 2);
        reply.push('.');
    } else if reply.ends_with("??") {
        reply.truncate(reply.len() - 2);
        reply.push('?');
    }
    reply
}
