use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Opaque identifier handed out by the result store; safe to embed in a URL path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(pub String);

impl ResultId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contact details captured before the quiz. Never used for scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Lead {
    /// Reads string fields from a JSON object, ignoring blanks and non-string values.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };

        Self {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            company: field("company"),
            website: field("website"),
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Per-section response codes after lenient coercion.
///
/// Codes are kept in `0..=3`; anything else in the payload (strings that are not
/// whole numbers, fractions, negatives, `null`, booleans) is stored as `0`, the
/// most manual answer. A section whose value is not an array has no answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAnswers {
    sections: BTreeMap<String, Vec<u8>>,
}

impl RawAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds answers from an untrusted JSON payload. Non-object input is empty.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        let sections = map
            .iter()
            .map(|(key, codes)| {
                let codes = match codes.as_array() {
                    Some(items) => items.iter().map(coerce_code).collect(),
                    None => Vec::new(),
                };
                (key.clone(), codes)
            })
            .collect();

        Self { sections }
    }

    pub fn with_section(mut self, key: impl Into<String>, codes: &[i64]) -> Self {
        self.insert(key, codes);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, codes: &[i64]) {
        let codes = codes.iter().map(|code| normalize_code(*code)).collect();
        self.sections.insert(key.into(), codes);
    }

    pub fn section(&self, key: &str) -> Option<&[u8]> {
        self.sections.get(key).map(Vec::as_slice)
    }

    /// Iterates sections in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.sections
            .iter()
            .map(|(key, codes)| (key.as_str(), codes.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

/// Keeps codes inside the closed answer set; everything else becomes `0`.
pub fn normalize_code(code: i64) -> u8 {
    match code {
        0..=3 => code as u8,
        _ => 0,
    }
}

/// Total numeric coercion for a single answer value.
pub fn coerce_code(value: &Value) -> u8 {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(number) if number.is_finite() && number.fract() == 0.0 => {
            if (0.0..=3.0).contains(&number) {
                number as u8
            } else {
                0
            }
        }
        _ => 0,
    }
}

/// Score for one section as shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    pub key: String,
    pub label: String,
    pub score: u8,
}

/// Immutable outcome of one scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub overall_score: u8,
    pub tier: String,
    pub sections: Vec<SectionScore>,
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub quick_wins: Vec<String>,
}
