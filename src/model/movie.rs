use crate::error::{Result, TweetqlError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON object relayed from the YTS API without reshaping.
///
/// Nothing is checked when a record is decoded. Typed accessors read a single
/// key on demand; an absent key and an explicit `null` both read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

/// A movie as returned by `list_movies.json` or `movie_details.json`.
pub type Movie = Record;

/// One entry of a movie's `torrents` list.
pub type Torrent = Record;

impl Record {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn str(&self, key: &str) -> Result<Option<&str>> {
        self.typed(key, "a string", Value::as_str)
    }

    pub fn int(&self, key: &str) -> Result<Option<i64>> {
        self.typed(key, "an integer", Value::as_i64)
    }

    /// Integers are accepted as floats; YTS sends `"rating": 7` as well as `7.5`.
    pub fn float(&self, key: &str) -> Result<Option<f64>> {
        self.typed(key, "a number", Value::as_f64)
    }

    pub fn strings(&self, key: &str) -> Result<Option<Vec<String>>> {
        self.typed(key, "a list of strings", |v| {
            v.as_array()?
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect()
        })
    }

    pub fn records(&self, key: &str) -> Result<Option<Vec<Record>>> {
        self.typed(key, "a list of objects", |v| {
            v.as_array()?
                .iter()
                .map(|item| item.as_object().cloned().map(Record))
                .collect()
        })
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        expected: &'static str,
        read: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => read(value).map(Some).ok_or_else(|| TweetqlError::FieldType {
                field: key.to_string(),
                expected,
            }),
        }
    }
}

/// Turn an absent value into a [`TweetqlError::MissingField`] for `key`.
pub fn required<T>(key: &str, value: Result<Option<T>>) -> Result<T> {
    value?.ok_or_else(|| TweetqlError::MissingField(key.to_string()))
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}
