//! # Schema Store
//!
//! The schema is the ordered list of field definitions driving both the
//! entry form and the table columns. It persists to a single JSON file
//! (`form_schema.json` by default) as an array of `{name, label, type}`
//! objects, and is rewritten whenever the user customizes the form or
//! imports a workbook.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash
//! safety.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Minimum number of fields a customized schema must keep.
pub const MIN_FIELDS: usize = 2;

/// How values in a column are meant to be read. Values are stored as raw
/// text either way; the kind is carried through the schema file and the
/// editor but does not change storage or comparison.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    #[serde(rename = "string")]
    Text,
    #[serde(rename = "number")]
    Number,
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Number => "number",
        }
    }

    /// The other kind, for toggling in the schema editor.
    pub fn toggled(&self) -> FieldKind {
        match self {
            FieldKind::Text => FieldKind::Number,
            FieldKind::Number => FieldKind::Text,
        }
    }
}

/// One named, typed, labeled column of the user-defined schema.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
        }
    }
}

/// Errors from reading or writing the schema file.
///
/// A missing file is not an error (the default schema applies); anything
/// else is fatal at startup.
#[derive(Debug)]
pub enum SchemaError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Io(e) => write!(f, "schema file I/O error: {e}"),
            SchemaError::Parse(e) => write!(f, "schema file parse error: {e}"),
        }
    }
}

impl std::error::Error for SchemaError {}

/// The built-in schema used when no schema file exists yet.
pub fn default_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("reference", "Product reference", FieldKind::Text),
        FieldDef::new("quantity", "Quantity", FieldKind::Number),
        FieldDef::new("details", "Details", FieldKind::Text),
        FieldDef::new("unit_price", "Unit price", FieldKind::Number),
    ]
}

/// Load the schema from `path`.
///
/// A missing file yields the default schema. Any other read or parse
/// failure is returned as an error and terminates startup.
pub fn load_schema(path: &Path) -> Result<Vec<FieldDef>, SchemaError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(
                "No schema file at {}, using default schema",
                path.display()
            );
            return Ok(default_fields());
        }
        Err(e) => return Err(SchemaError::Io(e)),
    };

    let fields: Vec<FieldDef> = serde_json::from_str(&json).map_err(SchemaError::Parse)?;
    info!("Loaded {} fields from {}", fields.len(), path.display());
    Ok(fields)
}

/// Overwrite the schema file with `fields`, atomically (tmp + rename).
pub fn save_schema(path: &Path, fields: &[FieldDef]) -> Result<(), SchemaError> {
    let json = serde_json::to_string_pretty(fields).map_err(SchemaError::Parse)?;
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json).map_err(SchemaError::Io)?;
    fs::rename(&tmp_path, path).map_err(SchemaError::Io)?;
    debug!("Saved {} fields to {}", fields.len(), path.display());
    Ok(())
}

/// Derive an identifier from a display label: lowercased, runs of
/// non-alphanumeric characters collapsed to single underscores.
/// Returns an empty string when the label has no usable characters.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut last_was_sep = true; // suppress a leading underscore
    for c in label.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            slug.push('_');
            last_was_sep = true;
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    slug
}

/// Build field definitions from `(label, kind)` pairs.
///
/// Names are slugified labels with a positional `field_N` fallback for
/// labels that slugify to nothing, then de-duplicated with `_2`, `_3`, …
/// suffixes so the schema never carries two fields with the same name.
pub fn fields_from_labels<I>(labels: I) -> Vec<FieldDef>
where
    I: IntoIterator<Item = (String, FieldKind)>,
{
    let mut taken: Vec<String> = Vec::new();
    labels
        .into_iter()
        .enumerate()
        .map(|(i, (label, kind))| {
            let base = {
                let slug = slugify(&label);
                if slug.is_empty() {
                    format!("field_{i}")
                } else {
                    slug
                }
            };
            let mut name = base.clone();
            let mut suffix = 2;
            while taken.contains(&name) {
                name = format!("{base}_{suffix}");
                suffix += 1;
            }
            taken.push(name.clone());
            FieldDef::new(name, label, kind)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_shape() {
        let fields = default_fields();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0].name, "reference");
        assert_eq!(fields[1].kind, FieldKind::Number);
        assert_eq!(fields[3].name, "unit_price");
    }

    #[test]
    fn test_load_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let fields = load_schema(&dir.path().join("absent.json")).unwrap();
        assert_eq!(fields, default_fields());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        let fields = vec![
            FieldDef::new("sku", "SKU", FieldKind::Text),
            FieldDef::new("count", "Count", FieldKind::Number),
        ];
        save_schema(&path, &fields).unwrap();
        assert_eq!(load_schema(&path).unwrap(), fields);
    }

    #[test]
    fn test_schema_file_spells_kind_as_type_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        save_schema(&path, &default_fields()).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"type\": \"string\""));
        assert!(raw.contains("\"type\": \"number\""));
        assert!(!raw.contains("\"kind\""));
    }

    #[test]
    fn test_load_malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_schema(&path), Err(SchemaError::Parse(_))));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Unit price"), "unit_price");
        assert_eq!(slugify("  Prix (HT)  "), "prix_ht");
        assert_eq!(slugify("Quantity"), "quantity");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_fields_from_labels_unique_names() {
        let fields = fields_from_labels(vec![
            ("Price".to_string(), FieldKind::Number),
            ("Price".to_string(), FieldKind::Number),
            ("".to_string(), FieldKind::Text),
        ]);
        assert_eq!(fields[0].name, "price");
        assert_eq!(fields[1].name, "price_2");
        assert_eq!(fields[2].name, "field_2");
    }
}
