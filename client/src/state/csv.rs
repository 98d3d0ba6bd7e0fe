//! Tabular preview of delimited text.
//!
//! Splitting is deliberately naive: rows on `\n`, cells on `,`, no quoting or
//! escaping. A quoted cell containing a comma is split in two, and a trailing
//! newline yields a trailing `[""]` row. The preview is a faithful picture of
//! what the raw split produced, not a CSV parser.

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

use std::future::Future;
use std::rc::Rc;

use super::store::Store;
use crate::config::DEFAULT_CSV_PATH;
use crate::net::api::Backend;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn parse(text: &str) -> Self {
        let rows = text
            .split('\n')
            .map(|line| line.split(',').map(str::to_owned).collect::<Vec<_>>())
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row; rows may be ragged.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Where the current preview came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CsvSource {
    #[default]
    Empty,
    Default,
    Upload { file_name: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CsvPreview {
    pub table: CsvTable,
    pub source: CsvSource,
}

pub struct CsvIngestor<B> {
    backend: Rc<B>,
    preview: Store<CsvPreview>,
}

impl<B> Clone for CsvIngestor<B> {
    fn clone(&self) -> Self {
        Self { backend: Rc::clone(&self.backend), preview: self.preview.clone() }
    }
}

impl<B: Backend + 'static> CsvIngestor<B> {
    pub fn new(backend: Rc<B>) -> Self {
        Self { backend, preview: Store::default() }
    }

    pub fn preview(&self) -> Store<CsvPreview> {
        self.preview.clone()
    }

    /// Fetch and split the default document. On failure the current table is
    /// kept and `None` is returned.
    pub fn load_default(&self) -> impl Future<Output = Option<CsvTable>> + use<B> {
        let ingestor = self.clone();
        async move {
            match ingestor.backend.fetch_text(DEFAULT_CSV_PATH).await {
                Ok(text) => Some(ingestor.replace(&text, CsvSource::Default)),
                Err(err) => {
                    log::warn!("default CSV load failed: {err}");
                    None
                }
            }
        }
    }

    /// Split client-supplied file contents and replace the preview.
    pub fn ingest_upload(&self, file_name: &str, contents: &str) -> CsvTable {
        self.replace(contents, CsvSource::Upload { file_name: file_name.to_owned() })
    }

    fn replace(&self, text: &str, source: CsvSource) -> CsvTable {
        let table = CsvTable::parse(text);
        log::debug!("csv preview replaced: {} rows from {source:?}", table.rows.len());
        self.preview.set(CsvPreview { table: table.clone(), source });
        table
    }
}
