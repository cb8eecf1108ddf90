// crates/domain/src/classifier.rs
use crate::value_objects::FileExtension;

/// Category reported when no rule covers an extension.
///
/// Directories rely on the table as well: they classify through the empty
/// extension, which the builtin table maps to "Folder".
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One category with the extensions that belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    name: String,
    extensions: Vec<String>,
}

impl CategoryRule {
    /// Builds a rule; extensions are matched case-insensitively, so they are
    /// lowercased once here.
    pub fn new(name: impl Into<String>, extensions: Vec<String>) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.into_iter().map(|ext| ext.to_ascii_lowercase()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn covers(&self, ext: &FileExtension) -> bool {
        self.extensions.iter().any(|candidate| candidate == ext.as_str())
    }
}

/// Ordered rule table mapping extensions to category names.
///
/// Rule order is significant: the first rule listing an extension wins, so a
/// table may list the same extension twice without ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryTable {
    rules: Vec<CategoryRule>,
}

impl CategoryTable {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Classifies a bare entry name by its extension.
    pub fn classify_name(&self, name: &str) -> &str {
        self.classify_extension(&FileExtension::from_file_name(name))
    }

    /// Finds the first rule covering `ext`, falling back to [`UNKNOWN_CATEGORY`].
    pub fn classify_extension(&self, ext: &FileExtension) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.covers(ext))
            .map_or(UNKNOWN_CATEGORY, CategoryRule::name)
    }
}
