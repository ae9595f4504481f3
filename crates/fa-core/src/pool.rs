use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::entry::WordEntry;
use crate::error::{CoreError, CoreResult};

/// Every category and the words that may be drawn from it.
///
/// Categories are kept sorted by name, so index-based draws are reproducible
/// for a given random seed. A category never holds an empty word list: the
/// loader rejects one, and [`WordPool::remove`] drops a category together
/// with its last word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordPool {
    categories: BTreeMap<String, Vec<String>>,
}

impl WordPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and validate a pool from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CoreError::NotFound(path.to_path_buf()));
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(CoreError::Format {
                    path: path.to_path_buf(),
                    reason: "file is not valid UTF-8".into(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let pool = Self::parse(&text, path)?;
        debug!(
            path = %path.display(),
            categories = pool.category_count(),
            words = pool.word_count(),
            "loaded word pool"
        );
        Ok(pool)
    }

    /// Parse and validate a pool from a JSON string.
    pub fn from_json_str(text: &str) -> CoreResult<Self> {
        Self::parse(text, Path::new("<memory>"))
    }

    fn parse(text: &str, path: &Path) -> CoreResult<Self> {
        let format_err = |reason: String| CoreError::Format {
            path: path.to_path_buf(),
            reason,
        };

        let categories: BTreeMap<String, Vec<String>> = serde_json::from_str(text).map_err(|e| {
            format_err(format!(
                "expected an object of category to word list ({e})"
            ))
        })?;

        for (category, words) in &categories {
            if category.trim().is_empty() {
                return Err(format_err("category names cannot be empty".into()));
            }
            if words.is_empty() {
                return Err(format_err(format!("category \"{category}\" has no words")));
            }
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(format_err(format!(
                    "category \"{category}\" contains an empty word"
                )));
            }
        }

        Ok(Self { categories })
    }

    /// Write the pool as pretty-printed JSON, replacing any existing file.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        fs::write(path, self.to_json_string())?;
        info!(
            path = %path.display(),
            categories = self.category_count(),
            words = self.word_count(),
            "saved word pool"
        );
        Ok(())
    }

    /// Serialize the pool to pretty-printed JSON with a trailing newline.
    pub fn to_json_string(&self) -> String {
        // A map of strings to string lists always serializes.
        let mut json = serde_json::to_string_pretty(&self.categories).unwrap_or_default();
        json.push('\n');
        json
    }

    /// Returns true if the pool has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of words across all categories.
    pub fn word_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Iterate categories in name order together with their words.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(category, words)| (category.as_str(), words.as_slice()))
    }

    /// Category names in name order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// The words filed under a category, if it exists.
    pub fn words(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Every entry in the pool, in category then file order.
    pub fn entries(&self) -> Vec<WordEntry> {
        self.iter()
            .flat_map(|(category, words)| words.iter().map(move |w| WordEntry::new(category, w)))
            .collect()
    }

    /// Whether the pool holds this exact category/word pair.
    pub fn contains(&self, entry: &WordEntry) -> bool {
        self.words(&entry.category)
            .is_some_and(|words| words.contains(&entry.word))
    }

    /// Add an entry, trimming surrounding whitespace.
    ///
    /// Returns false if either part is blank or the word is already filed
    /// under that category.
    pub fn insert(&mut self, entry: WordEntry) -> bool {
        let category = entry.category.trim();
        let word = entry.word.trim();
        if category.is_empty() || word.is_empty() {
            return false;
        }

        let words = self.categories.entry(category.to_string()).or_default();
        if words.iter().any(|w| w == word) {
            return false;
        }
        words.push(word.to_string());
        true
    }

    /// Remove one occurrence of an entry. Returns false if it was not present.
    ///
    /// A category left without words is removed as well.
    pub fn remove(&mut self, entry: &WordEntry) -> bool {
        let Some(words) = self.categories.get_mut(&entry.category) else {
            return false;
        };
        let Some(pos) = words.iter().position(|w| *w == entry.word) else {
            return false;
        };

        words.remove(pos);
        if words.is_empty() {
            self.categories.remove(&entry.category);
        }
        true
    }
}

/// Default destination for a pool with the played word removed.
pub fn default_consumed_path() -> PathBuf {
    PathBuf::from("shortened.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn food_pool() -> WordPool {
        WordPool::from_json_str(r#"{"food": ["Pizza", "Croissant", "Spaghetti"]}"#).unwrap()
    }

    #[test]
    fn parse_mapping() {
        let pool = WordPool::from_json_str(r#"{"food": ["Pizza"], "animal": ["Aardvark", "Owl"]}"#)
            .unwrap();
        assert_eq!(pool.category_count(), 2);
        assert_eq!(pool.word_count(), 3);
        assert_eq!(pool.category_names(), vec!["animal", "food"]);
        assert_eq!(pool.words("animal").unwrap(), ["Aardvark", "Owl"]);
    }

    #[test]
    fn empty_object_is_an_empty_pool() {
        let pool = WordPool::from_json_str("{}").unwrap();
        assert!(pool.is_empty());
        assert_eq!(pool.word_count(), 0);
    }

    #[test]
    fn rejects_invalid_json() {
        let err = WordPool::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Format { .. }));
    }

    #[test]
    fn rejects_record_list_shape() {
        let err =
            WordPool::from_json_str(r#"[{"category": "animal", "text": "aardvark"}]"#).unwrap_err();
        assert!(matches!(err, CoreError::Format { .. }));
    }

    #[test]
    fn rejects_non_string_words() {
        let err = WordPool::from_json_str(r#"{"numbers": [1, 2, 3]}"#).unwrap_err();
        assert!(matches!(err, CoreError::Format { .. }));
    }

    #[test]
    fn rejects_empty_category() {
        let err = WordPool::from_json_str(r#"{"food": []}"#).unwrap_err();
        assert!(err.to_string().contains("has no words"));
    }

    #[test]
    fn rejects_blank_word() {
        let err = WordPool::from_json_str(r#"{"food": ["Pizza", "  "]}"#).unwrap_err();
        assert!(err.to_string().contains("empty word"));
    }

    #[test]
    fn load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = WordPool::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = WordPool::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::Format { .. }));
    }

    #[test]
    fn format_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, "[]").unwrap();
        let err = WordPool::load(&path).unwrap_err();
        assert!(err.to_string().contains("words.json"));
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, r#"{"stale": ["entry"]}"#).unwrap();

        food_pool().save(&path).unwrap();
        let reloaded = WordPool::load(&path).unwrap();
        assert_eq!(reloaded, food_pool());
        assert!(reloaded.words("stale").is_none());
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let err = food_pool()
            .save(&dir.path().join("missing/out.json"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn remove_entry() {
        let mut pool = food_pool();
        assert!(pool.remove(&WordEntry::new("food", "Pizza")));
        assert_eq!(pool.words("food").unwrap(), ["Croissant", "Spaghetti"]);
        assert!(!pool.remove(&WordEntry::new("food", "Pizza")));
        assert!(!pool.remove(&WordEntry::new("drink", "Tea")));
    }

    #[test]
    fn removing_last_word_drops_category() {
        let mut pool =
            WordPool::from_json_str(r#"{"food": ["Pizza"], "animal": ["Owl"]}"#).unwrap();
        assert!(pool.remove(&WordEntry::new("food", "Pizza")));
        assert_eq!(pool.category_names(), vec!["animal"]);
    }

    #[test]
    fn insert_trims_and_dedupes() {
        let mut pool = WordPool::new();
        assert!(pool.insert(WordEntry::new(" food ", " Pizza\n")));
        assert!(!pool.insert(WordEntry::new("food", "Pizza")));
        assert!(!pool.insert(WordEntry::new("food", "   ")));
        assert!(!pool.insert(WordEntry::new("", "Tea")));
        assert!(pool.contains(&WordEntry::new("food", "Pizza")));
        assert_eq!(pool.word_count(), 1);
    }

    #[test]
    fn entries_in_category_order() {
        let pool = WordPool::from_json_str(r#"{"b": ["x"], "a": ["y", "z"]}"#).unwrap();
        assert_eq!(
            pool.entries(),
            vec![
                WordEntry::new("a", "y"),
                WordEntry::new("a", "z"),
                WordEntry::new("b", "x"),
            ]
        );
    }

    #[test]
    fn default_consumed_path_is_shortened_json() {
        assert_eq!(default_consumed_path(), PathBuf::from("shortened.json"));
    }

    fn arb_pool() -> impl Strategy<Value = WordPool> {
        prop::collection::btree_map(
            "[a-z]{1,8}",
            prop::collection::vec("[A-Za-z][A-Za-z ]{0,10}", 1..5),
            0..6,
        )
        .prop_map(|categories| WordPool { categories })
    }

    proptest! {
        #[test]
        fn load_then_save_is_structurally_equivalent(pool in arb_pool()) {
            let dir = TempDir::new().unwrap();
            let src = dir.path().join("in.json");
            let dst = dir.path().join("out.json");
            fs::write(&src, serde_json::to_string(&pool).unwrap()).unwrap();

            WordPool::load(&src).unwrap().save(&dst).unwrap();

            let before: serde_json::Value =
                serde_json::from_str(&fs::read_to_string(&src).unwrap()).unwrap();
            let after: serde_json::Value =
                serde_json::from_str(&fs::read_to_string(&dst).unwrap()).unwrap();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn remove_keeps_every_category_non_empty(
            pool in arb_pool(),
            pick in any::<prop::sample::Index>(),
        ) {
            let entries = pool.entries();
            prop_assume!(!entries.is_empty());
            let entry = pick.get(&entries).clone();

            let mut reduced = pool.clone();
            prop_assert!(reduced.remove(&entry));
            prop_assert_eq!(reduced.word_count(), pool.word_count() - 1);
            prop_assert!(reduced.iter().all(|(_, words)| !words.is_empty()));
        }
    }
}
