//! Lenient deserializers for loosely typed backend fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use super::event::EventResult;
use super::tee::TeeBlock;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumberOrString::Number(n) => Some(*n),
            NumberOrString::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|n| n.is_finite())
    }
}

/// Accept `12.4`, `"12.4"`, `null` or a missing field. Blank or
/// unparsable strings become `None`.
pub(crate) fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_f64()))
}

fn whole_number(n: f64) -> Option<i32> {
    Some(n.round())
        .filter(|n| *n >= i32::MIN as f64 && *n <= i32::MAX as f64)
        .map(|n| n as i32)
}

/// Same as [`opt_f64`] but for whole-number scores.
pub(crate) fn opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_f64()).and_then(whole_number))
}

/// Required whole number that may arrive as a string, e.g. `"par": "72"`.
pub(crate) fn i32_value<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = NumberOrString::deserialize(deserializer)?;
    raw.as_f64()
        .and_then(whole_number)
        .ok_or_else(|| serde::de::Error::custom("expected a whole number"))
}

/// An incomplete or malformed tee block reads as "no tee data" instead of
/// failing the whole event.
pub(crate) fn opt_tee<'de, D>(deserializer: D) -> Result<Option<TeeBlock>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(value) = raw.filter(|v| !v.is_null()) else {
        return Ok(None);
    };
    match TeeBlock::deserialize(value) {
        Ok(tee) => Ok(Some(tee)),
        Err(e) => {
            warn!(error = %e, "Ignoring unusable tee block");
            Ok(None)
        }
    }
}

/// Deserialize a free-text label into one of our enums, falling back to
/// the enum's default for `null`.
pub(crate) fn label<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: for<'a> From<&'a str> + Default,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(T::from).unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResultsShape {
    List(Vec<EventResult>),
    ByMember(BTreeMap<String, EventResult>),
}

/// Results may be stored as a list or as an object keyed by member id.
/// The object form has no meaningful order, so entries come out in key
/// order; the list form keeps entry order.
pub(crate) fn results<'de, D>(deserializer: D) -> Result<Vec<EventResult>, D::Error>
where
    D: Deserializer<'de>,
{
    let shape = Option::<ResultsShape>::deserialize(deserializer)?;
    Ok(match shape {
        None => Vec::new(),
        Some(ResultsShape::List(list)) => list,
        Some(ResultsShape::ByMember(map)) => map
            .into_iter()
            .map(|(member_id, mut result)| {
                if result.member_id.is_empty() {
                    result.member_id = member_id;
                }
                result
            })
            .collect(),
    })
}

/// Required numeric field that may arrive as a string.
pub(crate) fn f64_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = NumberOrString::deserialize(deserializer)?;
    raw.as_f64()
        .ok_or_else(|| serde::de::Error::custom("expected a finite number"))
}
