use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::de::{self, DeserializeOwned, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Separator for list-valued columns in CSV exports.
pub const LIST_SEPARATOR: char = ';';

/// Failure to read a catalog or questionnaire snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON catalog data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV catalog data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid CSV record on line {line}: {source}")]
    CsvRecord {
        line: u64,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported catalog format for {0} (expected .json or .csv)")]
    UnsupportedFormat(PathBuf),
}

/// On-disk encodings accepted for catalog snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Csv,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

pub fn read_json<T: DeserializeOwned, R: Read>(reader: R) -> Result<T, CatalogLoadError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads CSV rows keyed by header. Every cell reaches the record type as the text that
/// was written, so list and numeric columns are parsed by the record's own field
/// deserializers instead of by csv type guessing.
pub fn read_csv<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>, CatalogLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|position| position.line()).unwrap_or_default();
        let cells: Map<String, Value> = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.to_string(), Value::String(cell.to_string())))
            .collect();
        let record = serde_json::from_value(Value::Object(cells))
            .map_err(|source| CatalogLoadError::CsvRecord { line, source })?;
        records.push(record);
    }

    Ok(records)
}

/// Reads a record list, picking the decoder from the file extension.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogLoadError> {
    let format = SnapshotFormat::from_path(path)
        .ok_or_else(|| CatalogLoadError::UnsupportedFormat(path.to_path_buf()))?;
    let file = std::fs::File::open(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        SnapshotFormat::Json => read_json(file),
        SnapshotFormat::Csv => read_csv(file),
    }
}

/// Accepts either a JSON array or a `;`-separated CSV cell for list fields.
pub(crate) fn list_field<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ListFieldVisitor)
}

struct ListFieldVisitor;

impl<'de> Visitor<'de> for ListFieldVisitor {
    type Value = Vec<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of strings or a ';'-separated string")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::new();
        while let Some(value) = seq.next_element::<String>()? {
            values.push(value);
        }
        Ok(values)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(value
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }
}

pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumericCell<T> {
    Number(T),
    Text(String),
    Null(()),
}

fn parse_numeric<T, E>(text: &str) -> Result<T, E>
where
    T: FromStr,
    T::Err: fmt::Display,
    E: de::Error,
{
    text.trim()
        .parse::<T>()
        .map_err(|err| E::custom(format!("invalid number '{text}': {err}")))
}

/// Numeric field given either as a JSON number or as CSV text.
pub(crate) fn numeric_field<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match NumericCell::<T>::deserialize(deserializer)? {
        NumericCell::Number(value) => Ok(value),
        NumericCell::Text(text) => parse_numeric(&text),
        NumericCell::Null(()) => Err(de::Error::custom("missing number")),
    }
}

/// Like [`numeric_field`], but blank cells and `null` read as the default value.
pub(crate) fn empty_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + Default,
    T::Err: fmt::Display,
{
    match NumericCell::<T>::deserialize(deserializer)? {
        NumericCell::Number(value) => Ok(value),
        NumericCell::Text(text) if text.trim().is_empty() => Ok(T::default()),
        NumericCell::Text(text) => parse_numeric(&text),
        NumericCell::Null(()) => Ok(T::default()),
    }
}
