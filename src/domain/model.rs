use serde::{Deserialize, Serialize};

/// One catalog entry. `theme` and `subtheme` are absent for some sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegoSet {
    pub number: String,
    pub name: String,
    pub pieces: u32,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub subtheme: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl LegoSet {
    pub fn new(number: impl Into<String>, name: impl Into<String>, pieces: u32) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            pieces,
            theme: None,
            subtheme: None,
            tags: Vec::new(),
        }
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn with_subtheme(mut self, subtheme: impl Into<String>) -> Self {
        self.subtheme = Some(subtheme.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn subtheme(&self) -> Option<&str> {
        self.subtheme.as_deref()
    }
}
