//! CSV row extraction.
//!
//! Columns are found by exact header name and may appear in any order; unknown columns are
//! ignored. Each field goes through the same three steps:
//!
//! 1. [`column_or_empty`]: a missing column or a short row reads as `""`
//! 2. trim surrounding whitespace
//! 3. [`or_default`]: an empty value takes the field's default
//!
//! Rows whose phrase ends up empty are dropped.

use crate::error::{Result, VocabError};
use crate::model::{VocabRow, DEFAULT_DEFINITION};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

pub const COL_TEXT: &str = "text";
pub const COL_TYPE: &str = "type";
pub const COL_STRUCTURE: &str = "pos/structure";
pub const COL_DEFINITION: &str = "definition";
pub const COL_LEMMA: &str = "lemma";

/// Header positions of the columns we read. `None` when the header lacks the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub text: Option<usize>,
    pub kind: Option<usize>,
    pub structure: Option<usize>,
    pub definition: Option<usize>,
    pub lemma: Option<usize>,
}

impl Columns {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().collect::<Vec<_>>().iter().rposition(|h| *h == name);
        Self {
            text: find(COL_TEXT),
            kind: find(COL_TYPE),
            structure: find(COL_STRUCTURE),
            definition: find(COL_DEFINITION),
            lemma: find(COL_LEMMA),
        }
    }
}

pub fn column_or_empty(record: &StringRecord, index: Option<usize>) -> &str {
    index.and_then(|i| record.get(i)).unwrap_or("")
}

pub fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Lookup, trim, then default.
pub fn fill_field(record: &StringRecord, index: Option<usize>, default: &str) -> String {
    or_default(column_or_empty(record, index).trim(), default)
}

#[derive(Debug, Clone)]
pub struct RowParser {
    default_definition: String,
}

impl Default for RowParser {
    fn default() -> Self {
        Self {
            default_definition: DEFAULT_DEFINITION.to_string(),
        }
    }
}

impl RowParser {
    pub fn with_default_definition(definition: impl Into<String>) -> Self {
        Self {
            default_definition: definition.into(),
        }
    }

    /// Parses the CSV at `path`. Fails as a whole: no rows are returned on error.
    pub fn parse_csv(&self, path: &Path) -> Result<Vec<VocabRow>> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => VocabError::FileNotFound(path.to_path_buf()),
            _ => VocabError::Parse(e.to_string()),
        })?;
        self.parse_reader(file)
    }

    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Vec<VocabRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| VocabError::Parse(e.to_string()))?;
        let columns = Columns::from_headers(headers);
        log::debug!("column positions: {:?}", columns);

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for record in reader.records() {
            let record = record.map_err(|e| VocabError::Parse(e.to_string()))?;
            match self.parse_record(&record, &columns) {
                Some(row) => rows.push(row),
                None => skipped += 1,
            }
        }

        log::debug!("parsed {} rows, skipped {} without a phrase", rows.len(), skipped);
        Ok(rows)
    }

    fn parse_record(&self, record: &StringRecord, columns: &Columns) -> Option<VocabRow> {
        let phrase = fill_field(record, columns.text, "");
        if phrase.is_empty() {
            return None;
        }

        Some(VocabRow {
            phrase,
            kind: fill_field(record, columns.kind, ""),
            structure: fill_field(record, columns.structure, ""),
            definition: fill_field(record, columns.definition, &self.default_definition),
            lemma: fill_field(record, columns.lemma, ""),
        })
    }
}
