// crates/infra/src/categories.rs
use std::path::Path;

use dirlist_domain::classifier::{CategoryRule, CategoryTable};
use dirlist_shared_kernel::{DirlistError, DomainError, ErrorContext, InfrastructureError, Result};

use crate::persistence::FileReader;

/// Built-in category table shipped with the binary.
const DEFAULT_TYPES_JSON: &str = include_str!("../assets/types.json");

/// Parses the embedded category table.
pub fn load_default() -> Result<CategoryTable> {
    parse_table(DEFAULT_TYPES_JSON)
}

/// Loads a user-supplied category table from a JSON file.
pub fn load_from_file(path: &Path) -> Result<CategoryTable> {
    let bytes = FileReader::read_to_end(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
    let source = String::from_utf8_lossy(&bytes);
    parse_table(&source).with_context(|| format!("loading category table from {}", path.display()))
}

/// Parses a JSON object of `{"Category": [".ext", ...]}` pairs.
///
/// Key order in the document becomes rule order, which decides which
/// category wins when an extension is listed twice.
pub fn parse_table(source: &str) -> Result<CategoryTable> {
    let value: serde_json::Value = serde_json::from_str(source)?;

    let Some(object) = value.as_object() else {
        return Err(invalid_table("top level must be an object of category arrays"));
    };

    let mut rules = Vec::with_capacity(object.len());
    for (name, extensions) in object {
        let Some(items) = extensions.as_array() else {
            return Err(invalid_table(&format!(
                "category '{name}' must list extensions in an array"
            )));
        };

        let mut parsed = Vec::with_capacity(items.len());
        for item in items {
            let Some(ext) = item.as_str() else {
                return Err(invalid_table(&format!(
                    "category '{name}' contains a non-string extension"
                )));
            };
            parsed.push(ext.to_string());
        }
        rules.push(CategoryRule::new(name.clone(), parsed));
    }

    Ok(CategoryTable::new(rules))
}

fn invalid_table(reason: &str) -> DirlistError {
    DomainError::InvalidCategoryTable { reason: reason.to_string() }.into()
}
