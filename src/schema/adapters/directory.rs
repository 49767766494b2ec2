//! Loads a catalog from a directory of schema files.
//!
//! Every regular file ending in `.avsc` or `.json` holds one description;
//! its file stem is the message type. Other entries are skipped. Access goes
//! through a capability handle, so the loader can only see the directory it
//! was given.

use crate::schema::{catalog::SchemaCatalog, error::CatalogError};
use cap_std::fs_utf8::Dir;
use serde_json::Value;

const SCHEMA_EXTENSIONS: [&str; 2] = [".avsc", ".json"];

/// Reads every schema file in `dir` and builds a catalog.
///
/// Files are read in name order so that errors are reported
/// deterministically.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the directory or a file cannot be read,
/// [`CatalogError::Parse`] if a file is not JSON, and
/// [`CatalogError::Schema`] if a description is structurally invalid.
pub fn load_directory(dir: &Dir) -> Result<SchemaCatalog, CatalogError> {
    let mut files = Vec::new();
    for item in dir.entries()? {
        let entry = item?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name()?;
        if let Some(message_type) = message_type_of(&file_name) {
            files.push((message_type.to_owned(), file_name));
        }
    }
    files.sort_by(|(_, left), (_, right)| left.cmp(right));

    let mut definitions = Vec::with_capacity(files.len());
    for (message_type, file_name) in files {
        let raw = dir.read_to_string(&file_name)?;
        let description: Value = serde_json::from_str(&raw).map_err(|source| {
            CatalogError::Parse {
                file: file_name.clone(),
                source,
            }
        })?;
        definitions.push((message_type, description));
    }
    SchemaCatalog::load(definitions)
}

fn message_type_of(file_name: &str) -> Option<&str> {
    SCHEMA_EXTENSIONS
        .iter()
        .find_map(|extension| file_name.strip_suffix(extension))
        .filter(|stem| !stem.is_empty())
}
