//! Load Normalizer
//!
//! Turns caller-supplied loads (string type tag, optional fields, aliases) into a
//! validated list of [`Load`]s. The only defaulting performed is the documented
//! one: a distributed load with missing bounds spans the full beam.

use log::warn;
use serde::{Deserialize, Serialize};

use super::Load;
use crate::errors::{CalcError, CalcResult};

/// A load as it arrives from JSON or a UI row, before validation
///
/// ## JSON Format
///
/// ```json
/// { "type": "point", "magnitude": 10.0, "position": 2.5 }
/// { "type": "udl", "magnitude": 4.0 }
/// { "type": "moment", "value": 12.0, "position": 3.0 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLoad {
    /// Load type tag: `point`, `distributed` (`udl`, `uniform`), or `moment` (`couple`)
    #[serde(rename = "type", alias = "kind")]
    pub load_type: String,

    /// Magnitude (kN, kN/m, or kN·m)
    #[serde(default, alias = "value")]
    pub magnitude: Option<f64>,

    /// Position for point loads and couples (m)
    #[serde(default, alias = "x")]
    pub position: Option<f64>,

    /// Start of a distributed load (m), default 0
    #[serde(default)]
    pub start: Option<f64>,

    /// End of a distributed load (m), default span
    #[serde(default)]
    pub end: Option<f64>,
}

impl RawLoad {
    /// Create a raw load with just a type tag and magnitude
    pub fn new(load_type: impl Into<String>, magnitude: f64) -> Self {
        RawLoad {
            load_type: load_type.into(),
            magnitude: Some(magnitude),
            ..Default::default()
        }
    }

    /// Set position and return self (builder pattern)
    pub fn at(mut self, position: f64) -> Self {
        self.position = Some(position);
        self
    }

    /// Set distributed bounds and return self (builder pattern)
    pub fn between(mut self, start: f64, end: f64) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Complete and validate this load against the span
    pub fn normalize(&self, span: f64, index: usize) -> CalcResult<Load> {
        let field = |name: &str| format!("loads[{}].{}", index, name);
        let required = |value: Option<f64>, name: &str| {
            value.ok_or_else(|| CalcError::missing_field(field(name)))
        };

        let magnitude = required(self.magnitude, "magnitude")?;

        let load = match self.load_type.trim().to_ascii_lowercase().as_str() {
            "point" | "concentrated" => Load::Point {
                magnitude,
                position: required(self.position, "position")?,
            },
            "distributed" | "udl" | "uniform" => {
                if self.start.is_none() || self.end.is_none() {
                    warn!(
                        "loads[{}]: distributed load bounds missing, defaulting to full span",
                        index
                    );
                }
                Load::Distributed {
                    magnitude,
                    start: self.start.unwrap_or(0.0),
                    end: self.end.unwrap_or(span),
                }
            }
            "moment" | "couple" => Load::Moment {
                magnitude,
                position: required(self.position, "position")?,
            },
            other => {
                return Err(CalcError::invalid_input(
                    field("type"),
                    other,
                    "Load type must be one of: point, distributed, moment",
                ));
            }
        };

        load.validate(span, index)?;
        Ok(load)
    }
}

impl From<Load> for RawLoad {
    fn from(load: Load) -> Self {
        match load {
            Load::Point { magnitude, position } => RawLoad::new("point", magnitude).at(position),
            Load::Distributed { magnitude, start, end } => {
                RawLoad::new("distributed", magnitude).between(start, end)
            }
            Load::Moment { magnitude, position } => RawLoad::new("moment", magnitude).at(position),
        }
    }
}

/// Normalize a list of raw loads against the span (m)
///
/// Fails on the first invalid load; no partial list is returned.
pub fn normalize_loads(raw: &[RawLoad], span: f64) -> CalcResult<Vec<Load>> {
    raw.iter()
        .enumerate()
        .map(|(i, load)| load.normalize(span, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distributed_defaults_to_full_span() {
        let loads = normalize_loads(&[RawLoad::new("udl", 5.0)], 6.0).unwrap();
        assert_eq!(loads, vec![Load::distributed(5.0, 0.0, 6.0)]);
    }

    #[test]
    fn test_distributed_partial_bounds() {
        let raw = RawLoad {
            load_type: "distributed".to_string(),
            magnitude: Some(2.0),
            start: Some(1.5),
            ..Default::default()
        };
        assert_eq!(raw.normalize(4.0, 0).unwrap(), Load::distributed(2.0, 1.5, 4.0));
    }

    #[test]
    fn test_point_and_moment() {
        let loads = normalize_loads(
            &[RawLoad::new("Point", 10.0).at(2.0), RawLoad::new("couple", -3.0).at(1.0)],
            4.0,
        )
        .unwrap();
        assert_eq!(loads, vec![Load::point(10.0, 2.0), Load::moment(-3.0, 1.0)]);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = normalize_loads(&[RawLoad::new("triangular", 1.0)], 4.0).unwrap_err();
        assert!(
            matches!(err, CalcError::InvalidInput { ref field, .. } if field == "loads[0].type")
        );
    }

    #[test]
    fn test_missing_fields_rejected() {
        let err = normalize_loads(&[RawLoad::new("point", 1.0)], 4.0).unwrap_err();
        assert_eq!(err, CalcError::missing_field("loads[0].position"));

        let no_magnitude = RawLoad {
            load_type: "point".to_string(),
            position: Some(1.0),
            ..Default::default()
        };
        let err = no_magnitude.normalize(4.0, 3).unwrap_err();
        assert_eq!(err, CalcError::missing_field("loads[3].magnitude"));
    }

    #[test]
    fn test_out_of_range_and_inverted() {
        assert!(normalize_loads(&[RawLoad::new("point", 1.0).at(5.0)], 4.0).is_err());
        let inverted = RawLoad::new("distributed", 1.0).between(3.0, 1.0);
        assert!(normalize_loads(&[inverted], 4.0).is_err());
        assert!(normalize_loads(&[RawLoad::new("moment", f64::NAN).at(1.0)], 4.0).is_err());
    }

    #[test]
    fn test_json_aliases() {
        let raw: Vec<RawLoad> = serde_json::from_str(
            r#"[{"type":"point","value":10,"x":2},{"kind":"uniform","magnitude":3}]"#,
        )
        .unwrap();
        let loads = normalize_loads(&raw, 8.0).unwrap();
        assert_eq!(loads[0], Load::point(10.0, 2.0));
        assert_eq!(loads[1], Load::distributed(3.0, 0.0, 8.0));
    }

    #[test]
    fn test_roundtrip_from_load() {
        let load = Load::distributed(2.0, 0.5, 1.5);
        assert_eq!(RawLoad::from(load).normalize(2.0, 0).unwrap(), load);
    }
}
