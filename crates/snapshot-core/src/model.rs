use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

pub type ResponseBody = Value;

pub type QueryParams = Vec<(String, String)>;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form options for a single action call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Arguments {
    values: BTreeMap<String, Value>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Arguments::new();
        for (key, value) in iter {
            args.insert(key, value);
        }
        args
    }
}

/// Target repositories. `All` leaves the path segment empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum RepositoryIdentifier {
    #[default]
    All,
    Names(Vec<String>),
}

impl RepositoryIdentifier {
    pub fn names(&self) -> &[String] {
        match self {
            RepositoryIdentifier::All => &[],
            RepositoryIdentifier::Names(names) => names,
        }
    }

    pub fn from_value(key: &str, value: Option<Value>) -> Result<Self> {
        let names = match value {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| scalar_to_string(key, &item))
                .collect::<Result<Vec<_>>>()?,
            Some(other) => vec![scalar_to_string(key, &other)?],
        };
        Ok(Self::from(names))
    }
}

impl From<Vec<String>> for RepositoryIdentifier {
    fn from(names: Vec<String>) -> Self {
        let names: Vec<String> = names.into_iter().filter(|name| !name.is_empty()).collect();
        if names.is_empty() {
            RepositoryIdentifier::All
        } else {
            RepositoryIdentifier::Names(names)
        }
    }
}

impl From<&str> for RepositoryIdentifier {
    fn from(name: &str) -> Self {
        Self::from(vec![name.to_string()])
    }
}

impl From<&[&str]> for RepositoryIdentifier {
    fn from(names: &[&str]) -> Self {
        Self::from(names.iter().map(|name| name.to_string()).collect::<Vec<_>>())
    }
}

/// HTTP statuses whose errors the caller wants folded into a result.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IgnoreStatuses(Vec<u16>);

impl IgnoreStatuses {
    pub fn new(statuses: impl IntoIterator<Item = u16>) -> Self {
        Self(statuses.into_iter().collect())
    }

    pub fn contains(&self, status: u16) -> bool {
        self.0.contains(&status)
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }

    pub fn from_value(value: Option<&Value>) -> Self {
        let items: Vec<&Value> = match value {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.iter().collect(),
            Some(other) => vec![other],
        };
        let mut statuses = Vec::with_capacity(items.len());
        for item in items {
            match status_code(item) {
                Some(code) => statuses.push(code),
                None => tracing::warn!(value = %item, "skipping non-numeric ignore entry"),
            }
        }
        Self(statuses)
    }
}

/// Reads an integral JSON number as a status code; `404.0` counts as `404`.
fn status_code(value: &Value) -> Option<u16> {
    let code = match value.as_u64() {
        Some(code) => code,
        None => {
            let float = value.as_f64()?;
            if float.fract() != 0.0 || float < 0.0 || float > f64::from(u16::MAX) {
                return None;
            }
            float as u64
        }
    };
    u16::try_from(code).ok()
}

/// Renders a scalar argument the way it appears on the wire.
pub(crate) fn scalar_to_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(value) => Ok(value.clone()),
        Value::Bool(value) => Ok(value.to_string()),
        Value::Number(value) => Ok(value.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(Error::invalid(
            key,
            "expected a string, number or boolean",
        )),
    }
}
