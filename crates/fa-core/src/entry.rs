/// A word together with the category it was filed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    /// Category name, shown to every player at the end of a round.
    pub category: String,
    /// The secret word, shown only to artists.
    pub word: String,
}

impl WordEntry {
    /// Create an entry from a category and a word.
    pub fn new(category: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            word: word.into(),
        }
    }
}
