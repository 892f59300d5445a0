//! Submitted form values.

use crate::{Error, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::FpCategory;

/// A single submitted value.
///
/// Any JSON value is accepted. Nested objects keep their field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit null.
    Null,
    /// Boolean.
    Flag(bool),
    /// Integer.
    Number(i64),
    /// Any other number.
    Float(f64),
    /// Text.
    Text(String),
    /// Array, e.g. a multi-select.
    List(Vec<FieldValue>),
    /// Nested object.
    Map(Submission),
}

impl FieldValue {
    /// Text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether a checkbox with this value counts as checked.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Flag(b) => *b,
            Self::Number(n) => *n != 0,
            Self::Float(f) => f.classify() != FpCategory::Zero,
            Self::Text(s) => {
                !(s.is_empty()
                    || s == "0"
                    || s.eq_ignore_ascii_case("false")
                    || s.eq_ignore_ascii_case("off"))
            }
            Self::List(items) => !items.is_empty(),
            Self::Map(fields) => !fields.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Field name to value mapping, in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    fields: Vec<(String, FieldValue)>,
}

impl Submission {
    /// Create an empty submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field. An existing field keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Value of a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        let index = self.fields.iter().position(|(n, _)| n == name)?;
        Some(self.fields.remove(index).1)
    }

    /// Whether a field is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Fields in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field was submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse `FIELD=VALUE` pairs. Values are kept as text.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut submission = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (name, value) = pair.split_once('=').ok_or_else(|| {
                Error::invalid_submission(Some(pair.to_string()), "expected FIELD=VALUE")
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(Error::invalid_submission(None, "empty field name"));
            }
            submission.insert(name, value);
        }
        Ok(submission)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Submission {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut submission = Self::new();
        for (name, value) in iter {
            submission.insert(name, value);
        }
        submission
    }
}

impl Serialize for Submission {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Submission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct SubmissionVisitor;

        impl<'de> Visitor<'de> for SubmissionVisitor {
            type Value = Submission;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of submitted form fields")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Submission, A::Error> {
                let mut submission = Submission::new();
                while let Some((name, value)) = access.next_entry::<String, FieldValue>()? {
                    submission.insert(name, value);
                }
                Ok(submission)
            }
        }

        deserializer.deserialize_map(SubmissionVisitor)
    }
}
