use crate::config::storage::{BundledStorage, LocalStorage, BUNDLED_RESOURCE};
use crate::core::repository::Repository;
use crate::domain::model::LegoSet;
use crate::domain::ports::{ConfigProvider, ResourceStore};
use crate::utils::error::{BricksetError, Result};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

pub const ZERO_PIECES_LIMIT: usize = 3;
pub const NAME_LENGTH_THRESHOLD: usize = 15;
pub const TOP_NAMES_LIMIT: usize = 5;
pub const SUBTHEMES_LABEL: &str = "Subthemes in the theme:";
pub const NULL_LABEL: &str = "null";

/// Orders absent values before any present value, present values naturally.
pub fn compare_nulls_first(a: &Option<&str>, b: &Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// Queries over the LEGO set catalog.
///
/// Every query scans the full list on each call; nothing is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct LegoSetRepository {
    inner: Repository<LegoSet>,
}

impl LegoSetRepository {
    /// Loads the catalog bundled with the crate.
    pub fn new() -> Result<Self> {
        Self::load(&BundledStorage, BUNDLED_RESOURCE)
    }

    pub fn load<S: ResourceStore>(store: &S, resource: &str) -> Result<Self> {
        Ok(Self {
            inner: Repository::load(store, resource)?,
        })
    }

    /// Reads from `data_dir` when one is configured, otherwise from the bundle.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        match config.data_dir() {
            Some(dir) => Self::load(&LocalStorage::new(dir), config.resource()),
            None => Self::load(&BundledStorage, config.resource()),
        }
    }

    pub fn from_sets(sets: Vec<LegoSet>) -> Self {
        Self {
            inner: Repository::from_records("<memory>", sets),
        }
    }

    pub fn get_all(&self) -> &[LegoSet] {
        self.inner.get_all()
    }

    pub fn repository(&self) -> &Repository<LegoSet> {
        &self.inner
    }

    /// True if any set has at least `pieces` pieces.
    pub fn has_sets_with_pieces_at_least(&self, pieces: u32) -> bool {
        self.get_all().iter().any(|set| set.pieces >= pieces)
    }

    /// Distinct tags, in first-seen order, of every set named exactly `name`.
    pub fn tags_for_set_named(&self, name: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let tags: Vec<String> = self
            .get_all()
            .iter()
            .filter(|set| set.name == name)
            .flat_map(|set| set.tags.iter())
            .filter(|tag| seen.insert(tag.as_str()))
            .cloned()
            .collect();

        tracing::debug!("Found {} distinct tags for set '{}'", tags.len(), name);
        tags
    }

    /// Distinct subthemes of `theme`, appended to the label as `" | <subtheme>"`.
    /// An absent subtheme is a value of its own, rendered as `null`.
    pub fn subthemes_in_theme(&self, theme: &str) -> String {
        let mut seen = HashSet::new();
        self.get_all()
            .iter()
            .filter(|set| set.theme() == Some(theme))
            .map(|set| set.subtheme().unwrap_or(NULL_LABEL))
            .filter(|subtheme| seen.insert(*subtheme))
            .fold(SUBTHEMES_LABEL.to_string(), |mut acc, subtheme| {
                acc.push_str(" | ");
                acc.push_str(subtheme);
                acc
            })
    }

    /// Set number to name for sets with exactly `pieces` pieces.
    /// A repeated number keeps the name of its last occurrence.
    pub fn number_to_name_for_piece_count(&self, pieces: u32) -> BTreeMap<String, String> {
        self.get_all()
            .iter()
            .filter(|set| set.pieces == pieces)
            .map(|set| (set.number.clone(), set.name.clone()))
            .collect()
    }

    pub fn names_grouped_by_theme(&self) -> HashMap<Option<String>, Vec<String>> {
        let mut groups: HashMap<Option<String>, Vec<String>> = HashMap::new();
        for set in self.get_all() {
            groups
                .entry(set.theme.clone())
                .or_default()
                .push(set.name.clone());
        }
        groups
    }

    /// First `limit` names, in catalog order, of sets with no pieces.
    pub fn names_of_sets_with_zero_pieces(&self, limit: usize) -> Vec<String> {
        self.get_all()
            .iter()
            .filter(|set| set.pieces == 0)
            .map(|set| set.name.clone())
            .take(limit)
            .collect()
    }

    pub fn themes_starting_with_a(&self) -> Vec<String> {
        self.themes_starting_with("A")
    }

    /// Distinct themes starting with `prefix`, sorted with [`compare_nulls_first`].
    pub fn themes_starting_with(&self, prefix: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut themes: Vec<Option<&str>> = self
            .get_all()
            .iter()
            .map(LegoSet::theme)
            .filter(|theme| theme.is_some_and(|t| t.starts_with(prefix)))
            .filter(|theme| seen.insert(*theme))
            .collect();

        themes.sort_by(compare_nulls_first);
        themes.into_iter().flatten().map(str::to_string).collect()
    }

    /// Case-sensitive substring match against each theme.
    pub fn has_theme_containing(&self, substring: &str) -> bool {
        self.get_all()
            .iter()
            .any(|set| theme_contains(set, substring))
    }

    /// Mean name length, in characters, of sets whose theme contains `substring`.
    pub fn average_name_length_in_theme(&self, substring: &str) -> Result<f64> {
        let (count, total) = self
            .get_all()
            .iter()
            .filter(|set| theme_contains(set, substring))
            .fold((0usize, 0usize), |(count, total), set| {
                (count + 1, total + set.name.chars().count())
            });

        if count == 0 {
            tracing::warn!("No sets with a theme containing '{}'", substring);
            return Err(BricksetError::empty_result(format!(
                "average name length in theme containing '{}'",
                substring
            )));
        }

        Ok(total as f64 / count as f64)
    }

    /// Names longer than `min_len` characters, sorted ascending, at most `limit`.
    pub fn top_names_over_length(&self, min_len: usize, limit: usize) -> Vec<String> {
        let mut names: Vec<&str> = self
            .get_all()
            .iter()
            .map(|set| set.name.as_str())
            .filter(|name| name.chars().count() > min_len)
            .collect();

        names.sort_unstable();
        names.into_iter().take(limit).map(str::to_string).collect()
    }

    pub fn names_over_length_joined(&self, min_len: usize, limit: usize) -> String {
        self.top_names_over_length(min_len, limit).join(", ")
    }
}

fn theme_contains(set: &LegoSet, substring: &str) -> bool {
    set.theme().is_some_and(|theme| theme.contains(substring))
}
