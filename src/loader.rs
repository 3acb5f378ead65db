//! CSV record loading.
//!
//! A [`Table`] is one decoded CSV file: the header row becomes a column →
//! position map and every data row is kept as a raw record. [`Row`] is a
//! borrowed, column-addressed view of one record. The empty string is the
//! dataset's null sentinel for optional fields; [`Row::get_opt`] applies
//! the conversion, [`Row::get`] treats empty as a legal value.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;
use thiserror::Error;
use tracing::debug;

/// Errors raised while decoding a table or a snapshot file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {table}: {source}")]
    Csv {
        table: String,
        #[source]
        source: csv::Error,
    },

    #[error("{table} has no column {column:?}")]
    MissingColumn { table: String, column: &'static str },

    #[error("invalid integer {value:?} in {table}.{column}")]
    InvalidId {
        table: String,
        column: &'static str,
        value: String,
    },

    #[error("invalid timestamp {value:?}, expected `YYYY-MM-DD HH:MM:SS UTC+0000`")]
    InvalidTimestamp { value: String },

    #[error("snapshot I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Parse the dataset's timestamp format, e.g. `2011-10-05 20:35:19 UTC+0000`.
///
/// The zone token is constant across the source tables; it is checked and
/// discarded rather than carried on every value.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, LoadError> {
    let invalid = || LoadError::InvalidTimestamp {
        value: value.to_string(),
    };
    let naive = value.strip_suffix(" UTC+0000").ok_or_else(invalid)?;
    NaiveDateTime::parse_from_str(naive, "%Y-%m-%d %H:%M:%S").map_err(|_| invalid())
}

/// One decoded CSV table.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    columns: HashMap<String, usize>,
    records: Vec<StringRecord>,
}

impl Table {
    /// Read `<dir>/<name>.csv`. The file handle is released before the
    /// table is returned.
    pub fn read(dir: &Path, name: &str) -> Result<Table, LoadError> {
        let path = dir.join(format!("{name}.csv"));
        let reader = csv::Reader::from_path(&path).map_err(|source| LoadError::Csv {
            table: name.to_string(),
            source,
        })?;
        Self::decode(name, reader)
    }

    /// Decode a table from any byte source; `name` is used in errors.
    pub fn from_reader<R: io::Read>(name: &str, source: R) -> Result<Table, LoadError> {
        Self::decode(name, csv::Reader::from_reader(source))
    }

    fn decode<R: io::Read>(name: &str, mut reader: csv::Reader<R>) -> Result<Table, LoadError> {
        let csv_err = |source| LoadError::Csv {
            table: name.to_string(),
            source,
        };

        let columns = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .enumerate()
            .map(|(position, header)| (header.to_string(), position))
            .collect();

        let mut records = Vec::new();
        for record in reader.records() {
            records.push(record.map_err(csv_err)?);
        }
        debug!(table = name, rows = records.len(), "decoded table");

        Ok(Table {
            name: name.to_string(),
            columns,
            records,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the data rows in file order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.records.iter().map(move |record| Row {
            table: self,
            record,
        })
    }
}

/// A borrowed, column-addressed view of one data row.
#[derive(Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    /// Required field. The empty string is a legal value here.
    pub fn get(&self, column: &'static str) -> Result<&'a str, LoadError> {
        let &position = self
            .table
            .columns
            .get(column)
            .ok_or_else(|| LoadError::MissingColumn {
                table: self.table.name.clone(),
                column,
            })?;
        Ok(self.record.get(position).unwrap_or(""))
    }

    /// Optional field: the empty string decodes as `None`.
    pub fn get_opt(&self, column: &'static str) -> Result<Option<&'a str>, LoadError> {
        let value = self.get(column)?;
        Ok(if value.is_empty() { None } else { Some(value) })
    }

    /// Required integer field.
    pub fn get_u64(&self, column: &'static str) -> Result<u64, LoadError> {
        let value = self.get(column)?;
        value.parse().map_err(|_| LoadError::InvalidId {
            table: self.table.name.clone(),
            column,
            value: value.to_string(),
        })
    }

    /// Required timestamp field.
    pub fn get_timestamp(&self, column: &'static str) -> Result<NaiveDateTime, LoadError> {
        parse_timestamp(self.get(column)?)
    }
}
