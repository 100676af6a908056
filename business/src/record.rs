//! Wire records and their projection onto the four table fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, TableError};

/// One of the four columns a [`Record`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Athlete,
    Year,
    Country,
    Age,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Athlete, Self::Year, Self::Country, Self::Age];

    /// Key used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Athlete => "athlete",
            Self::Year => "year",
            Self::Country => "country",
            Self::Age => "age",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Self::Athlete => "Athlete",
            Self::Year => "Year",
            Self::Country => "Country",
            Self::Age => "Age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| TableError::UnknownField(s.to_string()))
    }
}

/// A cell as received from the endpoint, or as typed by the user.
///
/// `year` and `age` usually arrive as integers but nothing enforces it; edits
/// always store [`CellValue::Text`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    /// JSON `null`, or the key was missing.
    #[default]
    Empty,
    /// A nested array or object, shown as its JSON text.
    Json(serde_json::Value),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Empty => Ok(()),
            Self::Json(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

/// One table row. Unknown keys on the wire are dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub athlete: CellValue,
    #[serde(default)]
    pub year: CellValue,
    #[serde(default)]
    pub country: CellValue,
    #[serde(default)]
    pub age: CellValue,
}

impl Record {
    pub fn new(
        athlete: impl Into<CellValue>,
        year: impl Into<CellValue>,
        country: impl Into<CellValue>,
        age: impl Into<CellValue>,
    ) -> Self {
        Self {
            athlete: athlete.into(),
            year: year.into(),
            country: country.into(),
            age: age.into(),
        }
    }

    pub fn get(&self, field: Field) -> &CellValue {
        match field {
            Field::Athlete => &self.athlete,
            Field::Year => &self.year,
            Field::Country => &self.country,
            Field::Age => &self.age,
        }
    }

    pub fn set(&mut self, field: Field, value: CellValue) {
        match field {
            Field::Athlete => self.athlete = value,
            Field::Year => self.year = value,
            Field::Country => self.country = value,
            Field::Age => self.age = value,
        }
    }

    /// A copy of `self` with one field replaced.
    pub fn with_field(&self, field: Field, value: CellValue) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }
}

/// Parse a response body into records, keeping source order.
///
/// The body must be a JSON array of objects. Whatever a projected field holds
/// is kept as received.
pub fn project_records(body: &[u8]) -> Result<Vec<Record>, LoadError> {
    let records: Vec<Record> = serde_json::from_slice(body)?;
    Ok(records)
}
