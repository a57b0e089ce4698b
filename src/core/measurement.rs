use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A body measurement a size table can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Measurement {
    Height,
    ChestCircumference,
    WaistCircumference,
    HipCircumference,
    InsideLegLength,
}

impl Measurement {
    pub const COUNT: usize = 5;

    /// All measurement kinds in their canonical order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Height,
        Self::ChestCircumference,
        Self::WaistCircumference,
        Self::HipCircumference,
        Self::InsideLegLength,
    ];

    /// Identifier used in catalogs and JSON output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::ChestCircumference => "chestCircumference",
            Self::WaistCircumference => "waistCircumference",
            Self::HipCircumference => "hipCircumference",
            Self::InsideLegLength => "insideLegLength",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The measurements a user supplied, one optional value per kind
///
/// The shape is fixed: every [`Measurement`] has a slot, and `None` means the
/// value was not provided.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    values: [Option<f64>; Measurement::COUNT],
}

impl Measurements {
    /// Create a set with every measurement absent
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, kind: Measurement, value: f64) -> Self {
        self.set(kind, Some(value));
        self
    }

    pub fn set(&mut self, kind: Measurement, value: Option<f64>) {
        self.values[kind.index()] = value;
    }

    /// The value as provided, including zero
    #[must_use]
    pub fn get(&self, kind: Measurement) -> Option<f64> {
        self.values[kind.index()]
    }

    /// The value if it can be scored.
    ///
    /// Zero and non-finite values count as not provided, so a literal `0`
    /// receives the missing-measurement penalty.
    #[must_use]
    pub fn usable(&self, kind: Measurement) -> Option<f64> {
        self.get(kind).filter(|v| v.is_finite() && *v != 0.0)
    }

    /// True if the measurement cannot be scored
    #[must_use]
    pub fn is_missing(&self, kind: Measurement) -> bool {
        self.usable(kind).is_none()
    }

    /// Iterate over all kinds with their raw values
    pub fn iter(&self) -> impl Iterator<Item = (Measurement, Option<f64>)> + '_ {
        Measurement::ALL.iter().map(|&kind| (kind, self.get(kind)))
    }

    /// Number of measurements usable for scoring
    #[must_use]
    pub fn usable_count(&self) -> usize {
        Measurement::ALL
            .iter()
            .filter(|&&kind| self.usable(kind).is_some())
            .count()
    }
}

impl Serialize for Measurements {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Measurement::COUNT))?;
        for (kind, value) in self.iter() {
            map.serialize_entry(kind.as_str(), &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_is_all_absent() {
        let m = Measurements::new();
        for kind in Measurement::ALL {
            assert_eq!(m.get(kind), None);
            assert!(m.is_missing(kind));
        }
        assert_eq!(m.usable_count(), 0);
    }

    #[test]
    fn test_with_and_get() {
        let m = Measurements::new()
            .with(Measurement::Height, 180.0)
            .with(Measurement::WaistCircumference, 88.5);

        assert_eq!(m.get(Measurement::Height), Some(180.0));
        assert_eq!(m.usable(Measurement::WaistCircumference), Some(88.5));
        assert_eq!(m.get(Measurement::ChestCircumference), None);
        assert_eq!(m.usable_count(), 2);
    }

    #[test]
    fn test_zero_counts_as_missing() {
        let m = Measurements::new().with(Measurement::HipCircumference, 0.0);

        // The raw value is preserved, but it is not usable for scoring
        assert_eq!(m.get(Measurement::HipCircumference), Some(0.0));
        assert_eq!(m.usable(Measurement::HipCircumference), None);
        assert!(m.is_missing(Measurement::HipCircumference));
    }

    #[test]
    fn test_non_finite_counts_as_missing() {
        let m = Measurements::new()
            .with(Measurement::Height, f64::NAN)
            .with(Measurement::InsideLegLength, f64::INFINITY);

        assert!(m.is_missing(Measurement::Height));
        assert!(m.is_missing(Measurement::InsideLegLength));
    }

    #[test]
    fn test_serialize_has_fixed_shape() {
        let m = Measurements::new().with(Measurement::Height, 180.0);
        let json = serde_json::to_value(m).unwrap();

        assert_eq!(json["height"], serde_json::json!(180.0));
        assert!(json["chestCircumference"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_measurement_names() {
        let names: Vec<_> = Measurement::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "height",
                "chestCircumference",
                "waistCircumference",
                "hipCircumference",
                "insideLegLength"
            ]
        );
        let parsed: Measurement = serde_json::from_str("\"insideLegLength\"").unwrap();
        assert_eq!(parsed, Measurement::InsideLegLength);
    }
}
