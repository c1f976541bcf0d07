//! Sample texts with known word counts.

pub const QUICK_BROWN_FOX: &str = "The quick brown fox jumps";

pub const AI_PARAGRAPH: &str = "In today's rapidly evolving digital landscape, it is \
important to note that organizations must leverage innovative solutions. Furthermore, \
a comprehensive approach ensures that stakeholders remain aligned and engaged.";

const VOCABULARY: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
    "do", "eiusmod", "tempor",
];

/// Deterministic text of exactly `count` words separated by single spaces.
pub fn sample_words(count: usize) -> String {
    VOCABULARY
        .iter()
        .cycle()
        .take(count)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
