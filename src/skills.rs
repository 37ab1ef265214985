// src/skills.rs
//
// Skill matcher: plain substring containment against a fixed vocabulary.
// No tokenization and no word boundaries, so "java" also hits "javascript"
// and "sql" hits "mysql". That is the documented behavior, not a bug to fix here.

use crate::config::consts::{NOT_MENTIONED, SKILLS};

/// Vocabulary entries found in `description`, in vocabulary order, joined by
/// `", "`. Returns `"Not Mentioned"` when nothing matches.
///
/// Entries are expected to be lowercase already; only the description is folded.
pub fn match_skills(description: &str, vocab: &[&str]) -> String {
    let text = description.to_lowercase();
    let found: Vec<&str> = vocab
        .iter()
        .copied()
        .filter(|skill| text.contains(skill))
        .collect();

    if found.is_empty() {
        s!(NOT_MENTIONED)
    } else {
        found.join(", ")
    }
}

/// `match_skills` against the built-in vocabulary.
pub fn extract_skills(description: &str) -> String {
    match_skills(description, SKILLS)
}
