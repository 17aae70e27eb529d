// Test fixtures with known article texts
// WHY: ranking assertions need inputs whose word counts are easy to verify by hand

/// Three short sentences; "cat" and "sat" appear twice, every other content word once
pub const CAT_TEXT: &str =
    "The cat sat. The cat sat on the mat. Dogs bark loudly at cats in the park.";

/// Expected ranking for CAT_TEXT with default config
/// (mat sentence and dogs sentence tie at 2.5)
pub const CAT_EXPECTED: [&str; 3] = [
    "The cat sat on the mat.",
    "Dogs bark loudly at cats in the park.",
    "The cat sat.",
];

/// Middle sentence contains only stopwords and punctuation
pub const STOPWORD_SENTENCE_TEXT: &str = "Dogs bark at night. It is what it is. Dogs bark at cats.";

/// A stopword-only sentence, a sentence whose one word falls below the band, and
/// a sentence repeating "cat" eleven times
pub fn band_filtered_text() -> String {
    format!("It is what it is. Zebra. Cat {}.", ["cat"; 10].join(" "))
}

/// Article body as extracted from a page: a headline paragraph, five short
/// sentences and one sentence well over 140 characters
pub const NEWS_TEXT: &str = "City Council Approves Riverside Park

The city council voted on Tuesday to approve a new riverside park. The park will replace an abandoned rail yard near the river. Council members said the park would open next summer.

Residents packed the council chamber for the vote, and many of them spoke for more than an hour about the years they had spent asking the city to clean up the abandoned rail yard by the river. The mayor praised the council. Construction of the park begins in March.";

/// Sentences of NEWS_TEXT in document order
pub const NEWS_SENTENCE_COUNT: usize = 7;

/// Sentences of NEWS_TEXT shorter than 140 characters
pub const NEWS_CANDIDATE_COUNT: usize = 6;

pub const NEWS_TITLE: &str = "Council approves riverside park";

/// A single sentence far longer than 140 characters
pub fn long_sentence(opening: &str) -> String {
    format!("{opening} {}.", ["reported"; 30].join(" "))
}

/// Text made only of sentences too long to tweet
pub fn long_only_text() -> String {
    format!("{} {}", long_sentence("Officials"), long_sentence("Witnesses"))
}
