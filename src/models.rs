use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shown in place of a field the API did not return.
pub const PLACEHOLDER: &str = "N/A";
/// Fallback display name for resources without a name/title.
pub const UNKNOWN: &str = "Unknown";

/// A person record exactly as returned by the API.
///
/// No schema is imposed: the record is kept as a JSON object (field order
/// preserved) so it can be written back to disk untouched. Accessors read
/// individual fields with a fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Character(Map<String, Value>);

impl Character {
    pub fn name(&self) -> &str {
        self.0.get("name").and_then(Value::as_str).unwrap_or(UNKNOWN)
    }

    /// Display string for `key`, or [`PLACEHOLDER`] when absent.
    ///
    /// Strings are returned verbatim; other JSON values use their JSON text.
    pub fn attribute(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(v) => v.to_string(),
            None => PLACEHOLDER.to_string(),
        }
    }

    pub fn homeworld(&self) -> Option<&str> {
        self.0.get("homeworld").and_then(Value::as_str)
    }

    /// Film URLs in listed order.
    pub fn films(&self) -> Vec<&str> {
        self.0
            .get("films")
            .and_then(Value::as_array)
            .map(|arr| arr.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// One entry of the species collection. Only the fields used for statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Species {
    /// Read leniently: a non-string name falls back to [`UNKNOWN`].
    #[serde(default)]
    pub name: Option<Value>,
    /// Usually digits-only text, but may be a sentinel such as `"unknown"`.
    #[serde(default)]
    pub average_lifespan: Option<Value>,
}

impl Species {
    pub fn display_name(&self) -> &str {
        self.name.as_ref().and_then(Value::as_str).unwrap_or(UNKNOWN)
    }

    /// Validated lifespan; `None` for anything that is not purely decimal digits.
    pub fn lifespan(&self) -> Option<u64> {
        match &self.average_lifespan {
            Some(Value::String(s)) => parse_lifespan(s),
            _ => None,
        }
    }
}

/// Accept only non-empty, ASCII-digit-only text that fits in `u64`.
pub fn parse_lifespan(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// A page of a collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    /// URL of the next page; `None` (null or missing) on the last page.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    #[serde(default)]
    pub title: Option<String>,
}

/// Species name paired with its validated lifespan, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifespanDataset {
    entries: Vec<(String, u64)>,
}

impl LifespanDataset {
    pub fn push(&mut self, name: impl Into<String>, lifespan: u64) {
        self.entries.push((name.into(), lifespan));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn values(&self) -> Vec<u64> {
        self.entries.iter().map(|(_, v)| *v).collect()
    }

    /// Arithmetic mean over every entry, duplicates included.
    pub fn mean(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: f64 = self.entries.iter().map(|(_, v)| *v as f64).sum();
        Some(sum / self.entries.len() as f64)
    }

    /// Name -> lifespan object in first-seen key order; a repeated name keeps
    /// its first position and takes the last value.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for (name, v) in &self.entries {
            map.insert(name.clone(), Value::from(*v));
        }
        map
    }
}

impl FromIterator<(String, u64)> for LifespanDataset {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// File name for a record labelled `label`: spaces become underscores.
pub fn file_name_for(label: &str) -> String {
    format!("{}.json", label.replace(' ', "_"))
}
