//! Assessment records as exchanged with the risk API.
//!
//! DESIGN
//! ======
//! The API returns one flat JSON object per record, with a pair of
//! `outcome_<model>` / `prediction_prob_<model>` fields for every model it
//! scored. [`Assessment`] regroups those pairs into a per-model map so views
//! can switch models without knowing the wire layout.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use time::Date;
use time::macros::format_description;

use crate::model::ModelKey;
use crate::risk::RiskLevel;

/// Health measurements submitted for scoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(default, deserialize_with = "deserialize_u32_from_number")]
    pub pregnancies: u32,
    /// Two-hour oral glucose tolerance result, mg/dL.
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub glucose: u32,
    /// Diastolic blood pressure, mmHg.
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub blood_pressure: u32,
    /// Two-hour serum insulin, µU/mL. Zero means not measured.
    #[serde(default, deserialize_with = "deserialize_u32_from_number")]
    pub insulin: u32,
    pub bmi: f64,
    #[serde(serialize_with = "serialize_flag", deserialize_with = "deserialize_flag")]
    pub diabetic_family: bool,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub age: u32,
}

/// One model's verdict on a record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    pub level: RiskLevel,
    /// Probability of diabetes in percent (0-100).
    pub percentage: f64,
}

/// A stored assessment with its per-model predictions.
#[derive(Clone, Debug, PartialEq)]
pub struct Assessment {
    pub id: String,
    /// Raw creation timestamp as sent by the API.
    pub created_at: Option<String>,
    pub measurements: Measurements,
    pub predictions: BTreeMap<ModelKey, Prediction>,
}

impl Assessment {
    #[must_use]
    pub fn prediction(&self, model: ModelKey) -> Option<Prediction> {
        self.predictions.get(&model).copied()
    }

    /// Calendar date of creation, if the timestamp is present and parseable.
    #[must_use]
    pub fn date(&self) -> Option<Date> {
        self.created_at.as_deref().and_then(parse_date)
    }
}

/// Parse the date portion of an ISO-8601 timestamp (`2024-03-10T08:15:00.123`).
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    let day = raw.trim().get(..10)?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

fn outcome_field(model: ModelKey) -> String {
    format!("outcome_{}", model.as_str())
}

fn probability_field(model: ModelKey) -> String {
    format!("prediction_prob_{}", model.as_str())
}

impl<'de> Deserialize<'de> for Assessment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;

        let id = match map.get("record_id").or_else(|| map.get("id")) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return Err(D::Error::missing_field("record_id")),
        };
        let created_at = map.get("created_at").and_then(Value::as_str).map(ToOwned::to_owned);

        let mut predictions = BTreeMap::new();
        for model in ModelKey::ALL {
            let level = map
                .get(&outcome_field(model))
                .and_then(Value::as_str)
                .and_then(RiskLevel::parse_label);
            let percentage = map.get(&probability_field(model)).and_then(Value::as_f64);
            if let (Some(level), Some(percentage)) = (level, percentage) {
                predictions.insert(model, Prediction { level, percentage });
            }
        }

        let measurements = Measurements::deserialize(Value::Object(map)).map_err(D::Error::custom)?;
        Ok(Self { id, created_at, measurements, predictions })
    }
}

impl Serialize for Assessment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error as _;
        let mut map = match serde_json::to_value(&self.measurements).map_err(S::Error::custom)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        map.insert("record_id".to_owned(), Value::String(self.id.clone()));
        if let Some(created_at) = &self.created_at {
            map.insert("created_at".to_owned(), Value::String(created_at.clone()));
        }
        for (model, prediction) in &self.predictions {
            map.insert(outcome_field(*model), Value::String(prediction.level.api_label().to_owned()));
            map.insert(probability_field(*model), serde_json::json!(prediction.percentage));
        }
        map.serialize(serializer)
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(D::Error::custom("expected 0 or 1")),
        },
        _ => Err(D::Error::custom("expected boolean or 0/1")),
    }
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Number(number) = value else {
        return Err(D::Error::custom("expected number"));
    };
    if let Some(int) = number.as_u64() {
        return u32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= 0.0
        && float <= f64::from(u32::MAX)
    {
        return Ok(float as u32);
    }
    Err(D::Error::custom("expected non-negative integer-compatible number"))
}
