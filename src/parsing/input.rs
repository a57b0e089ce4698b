use serde::Deserialize;
use std::path::Path;

use crate::core::measurement::{Measurement, Measurements};
use crate::core::types::Gender;

/// A raw measurement field as submitted by a form or JSON document
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum RawValue {
    /// Not provided: missing field, `null` or an empty string
    #[default]
    Absent,
    Number(f64),
    /// A non-empty string still to be parsed
    Text(String),
    /// Any other JSON value, kept as its textual form for diagnostics
    Unsupported(String),
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Absent,
            serde_json::Value::Number(n) => n
                .as_f64()
                .map_or_else(|| Self::Unsupported(n.to_string()), Self::Number),
            serde_json::Value::String(s) => Self::from(s),
            other => Self::Unsupported(other.to_string()),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for RawValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Absent, Self::Number)
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Self::Absent
        } else {
            Self::Text(value)
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

/// Measurements and gender as entered by a user, before normalization
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingInput {
    #[serde(default)]
    pub height: RawValue,
    #[serde(default)]
    pub chest: RawValue,
    #[serde(default)]
    pub waist: RawValue,
    #[serde(default)]
    pub hip: RawValue,
    #[serde(default)]
    pub inside_leg_length: RawValue,
    pub gender: Gender,
}

impl ClothingInput {
    /// Create an input with every measurement absent
    #[must_use]
    pub fn new(gender: Gender) -> Self {
        Self {
            height: RawValue::Absent,
            chest: RawValue::Absent,
            waist: RawValue::Absent,
            hip: RawValue::Absent,
            inside_leg_length: RawValue::Absent,
            gender,
        }
    }

    #[must_use]
    pub fn with_height(mut self, value: impl Into<RawValue>) -> Self {
        self.height = value.into();
        self
    }

    #[must_use]
    pub fn with_chest(mut self, value: impl Into<RawValue>) -> Self {
        self.chest = value.into();
        self
    }

    #[must_use]
    pub fn with_waist(mut self, value: impl Into<RawValue>) -> Self {
        self.waist = value.into();
        self
    }

    #[must_use]
    pub fn with_hip(mut self, value: impl Into<RawValue>) -> Self {
        self.hip = value.into();
        self
    }

    #[must_use]
    pub fn with_inside_leg_length(mut self, value: impl Into<RawValue>) -> Self {
        self.inside_leg_length = value.into();
        self
    }

    /// Parse an input record from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the gender is missing or unknown.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load an input record from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Raw fields paired with the measurement they describe
    #[must_use]
    pub fn fields(&self) -> [(Measurement, &RawValue); Measurement::COUNT] {
        [
            (Measurement::Height, &self.height),
            (Measurement::ChestCircumference, &self.chest),
            (Measurement::WaistCircumference, &self.waist),
            (Measurement::HipCircumference, &self.hip),
            (Measurement::InsideLegLength, &self.inside_leg_length),
        ]
    }

    /// Normalized measurements for scoring
    #[must_use]
    pub fn measurements(&self) -> Measurements {
        normalize(self)
    }
}

/// Convert one raw field into a number, or `None` if absent or unusable.
///
/// Numbers pass through unchanged. Strings are parsed after trimming
/// whitespace; strings that do not hold a finite number are logged and
/// treated as absent, as are unsupported value types.
#[must_use]
pub fn normalize_value(measurement: Measurement, value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Absent => None,
        RawValue::Number(n) => Some(*n),
        RawValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => Some(n),
                _ => {
                    tracing::warn!(%measurement, value = %s, "Non-numeric input value");
                    None
                }
            }
        }
        RawValue::Unsupported(raw) => {
            tracing::warn!(%measurement, value = %raw, "Invalid input value");
            None
        }
    }
}

/// Normalize every field of an input record into a fixed-shape measurement set
#[must_use]
pub fn normalize(input: &ClothingInput) -> Measurements {
    let mut measurements = Measurements::new();
    for (kind, raw) in input.fields() {
        measurements.set(kind, normalize_value(kind, raw));
    }
    measurements
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log output in memory
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            let buf = self.0.lock().unwrap();
            String::from_utf8_lossy(&buf).into_owned()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` with warnings routed to an in-memory buffer, returning the output
    fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, String) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .without_time()
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.contents())
    }

    #[test]
    fn test_normalize_numbers_pass_through() {
        assert_eq!(
            normalize_value(Measurement::Height, &RawValue::Number(180.5)),
            Some(180.5)
        );
        // Zero is preserved here; scoring decides whether it is usable
        assert_eq!(
            normalize_value(Measurement::Height, &RawValue::Number(0.0)),
            Some(0.0)
        );
    }

    #[test]
    fn test_normalize_strings() {
        let parse = |s: &str| normalize_value(Measurement::WaistCircumference, &RawValue::from(s));

        assert_eq!(parse("88"), Some(88.0));
        assert_eq!(parse(" 88.5 "), Some(88.5));
        assert_eq!(parse("1e2"), Some(100.0));
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("eighty"), None);
        assert_eq!(parse("88cm"), None);
        assert_eq!(parse("NaN"), None);
        assert_eq!(parse("inf"), None);
    }

    #[test]
    fn test_normalize_absent_and_unsupported() {
        assert_eq!(normalize_value(Measurement::Height, &RawValue::Absent), None);
        assert_eq!(
            normalize_value(Measurement::Height, &RawValue::Unsupported("true".into())),
            None
        );
    }

    #[test]
    fn test_unsupported_value_logs_warning() {
        let (value, logs) = capture_warnings(|| {
            normalize_value(Measurement::HipCircumference, &RawValue::Unsupported("[90]".into()))
        });
        assert_eq!(value, None);
        assert!(logs.contains("WARN"), "no warning in: {logs}");
        assert!(logs.contains("Invalid input value"));
        assert!(logs.contains("hipCircumference"));
        assert!(logs.contains("[90]"));
    }

    #[test]
    fn test_non_numeric_text_logs_warning() {
        let (value, logs) = capture_warnings(|| {
            normalize_value(Measurement::WaistCircumference, &RawValue::from("eighty"))
        });
        assert_eq!(value, None);
        assert!(logs.contains("Non-numeric input value"));
        assert!(logs.contains("eighty"));
    }

    #[test]
    fn test_absent_and_blank_values_are_silent() {
        let (values, logs) = capture_warnings(|| {
            [
                normalize_value(Measurement::Height, &RawValue::Absent),
                normalize_value(Measurement::Height, &RawValue::Text("   ".into())),
            ]
        });
        assert_eq!(values, [None, None]);
        assert!(logs.is_empty(), "unexpected output: {logs}");
    }

    #[test]
    fn test_raw_value_from_json() {
        assert_eq!(RawValue::from(serde_json::json!(null)), RawValue::Absent);
        assert_eq!(RawValue::from(serde_json::json!("")), RawValue::Absent);
        assert_eq!(RawValue::from(serde_json::json!(82)), RawValue::Number(82.0));
        assert_eq!(
            RawValue::from(serde_json::json!("82")),
            RawValue::Text("82".to_string())
        );
        assert_eq!(
            RawValue::from(serde_json::json!(true)),
            RawValue::Unsupported("true".to_string())
        );
        assert!(matches!(
            RawValue::from(serde_json::json!({ "cm": 82 })),
            RawValue::Unsupported(_)
        ));
    }

    #[test]
    fn test_input_from_json() {
        let json = r#"{
            "height": 180,
            "chest": "100",
            "waist": null,
            "hip": 90,
            "insideLegLength": "",
            "gender": "male"
        }"#;
        let input = ClothingInput::from_json(json).unwrap();

        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.height, RawValue::Number(180.0));
        assert_eq!(input.chest, RawValue::Text("100".to_string()));
        assert_eq!(input.waist, RawValue::Absent);
        assert_eq!(input.inside_leg_length, RawValue::Absent);

        let m = input.measurements();
        assert_eq!(m.get(Measurement::Height), Some(180.0));
        assert_eq!(m.get(Measurement::ChestCircumference), Some(100.0));
        assert_eq!(m.get(Measurement::WaistCircumference), None);
        assert_eq!(m.get(Measurement::HipCircumference), Some(90.0));
        assert_eq!(m.get(Measurement::InsideLegLength), None);
    }

    #[test]
    fn test_input_from_json_missing_fields_are_absent() {
        let input = ClothingInput::from_json(r#"{ "gender": "female" }"#).unwrap();
        assert_eq!(input, ClothingInput::new(Gender::Female));
        assert_eq!(input.measurements(), Measurements::new());
    }

    #[test]
    fn test_input_from_json_requires_gender() {
        assert!(ClothingInput::from_json(r#"{ "height": 180 }"#).is_err());
        assert!(ClothingInput::from_json(r#"{ "gender": "unisex" }"#).is_err());
    }

    #[test]
    fn test_unsupported_field_becomes_absent() {
        let input =
            ClothingInput::from_json(r#"{ "hip": [90], "height": false, "gender": "male" }"#)
                .unwrap();
        let m = input.measurements();
        assert!(m.get(Measurement::HipCircumference).is_none());
        assert!(m.get(Measurement::Height).is_none());
    }

    #[test]
    fn test_builder() {
        let input = ClothingInput::new(Gender::Male)
            .with_height(180.0)
            .with_chest("100")
            .with_waist("")
            .with_hip(None::<f64>)
            .with_inside_leg_length(82.0);

        let m = normalize(&input);
        assert_eq!(m.get(Measurement::Height), Some(180.0));
        assert_eq!(m.get(Measurement::ChestCircumference), Some(100.0));
        assert_eq!(m.get(Measurement::WaistCircumference), None);
        assert_eq!(m.get(Measurement::HipCircumference), None);
        assert_eq!(m.get(Measurement::InsideLegLength), Some(82.0));
    }
}
