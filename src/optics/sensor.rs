// SPDX-License-Identifier: MPL-2.0
//! Camera sensor catalog.
//!
//! The catalog is fixed: every sensor the application can select is listed in
//! [`SENSORS`], so sensor selection can never fail.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a catalog sensor, used in the config file and CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensorId {
    #[default]
    FullFrame,
    ApsCCanon,
    ApsCNikonSony,
    MicroFourThirds,
    OneInch,
}

impl SensorId {
    /// Every identifier, in catalog order.
    pub const ALL: [SensorId; 5] = [
        SensorId::FullFrame,
        SensorId::ApsCCanon,
        SensorId::ApsCNikonSony,
        SensorId::MicroFourThirds,
        SensorId::OneInch,
    ];

    /// Kebab-case name used in `settings.toml` and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SensorId::FullFrame => "full-frame",
            SensorId::ApsCCanon => "aps-c-canon",
            SensorId::ApsCNikonSony => "aps-c-nikon-sony",
            SensorId::MicroFourThirds => "micro-four-thirds",
            SensorId::OneInch => "one-inch",
        }
    }

    /// Returns the i18n message key for the sensor's display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SensorId::FullFrame => "sensor-full-frame",
            SensorId::ApsCCanon => "sensor-aps-c-canon",
            SensorId::ApsCNikonSony => "sensor-aps-c-nikon-sony",
            SensorId::MicroFourThirds => "sensor-micro-four-thirds",
            SensorId::OneInch => "sensor-one-inch",
        }
    }

    /// Parses a kebab-case identifier, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let wanted = raw.trim().to_lowercase();
        Self::ALL.into_iter().find(|id| id.as_str() == wanted)
    }

    /// Catalog entry for this identifier.
    #[must_use]
    pub fn sensor(self) -> Sensor {
        match self {
            SensorId::FullFrame => SENSORS[0],
            SensorId::ApsCCanon => SENSORS[1],
            SensorId::ApsCNikonSony => SENSORS[2],
            SensorId::MicroFourThirds => SENSORS[3],
            SensorId::OneInch => SENSORS[4],
        }
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical description of a camera sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensor {
    pub id: SensorId,
    /// English display name; the UI uses [`SensorId::i18n_key`] instead.
    pub name: &'static str,
    /// Ratio of the full-frame diagonal to this sensor's diagonal.
    pub crop_factor: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Default for Sensor {
    fn default() -> Self {
        SensorId::default().sensor()
    }
}

/// The fixed sensor catalog, ordered from largest to smallest.
pub const SENSORS: [Sensor; 5] = [
    Sensor {
        id: SensorId::FullFrame,
        name: "Full frame (35mm)",
        crop_factor: 1.0,
        width_mm: 36.0,
        height_mm: 24.0,
    },
    Sensor {
        id: SensorId::ApsCCanon,
        name: "APS-C (Canon)",
        crop_factor: 1.6,
        width_mm: 22.3,
        height_mm: 14.9,
    },
    Sensor {
        id: SensorId::ApsCNikonSony,
        name: "APS-C (Nikon/Sony)",
        crop_factor: 1.5,
        width_mm: 23.6,
        height_mm: 15.6,
    },
    Sensor {
        id: SensorId::MicroFourThirds,
        name: "Micro 4/3",
        crop_factor: 2.0,
        width_mm: 17.3,
        height_mm: 13.0,
    },
    Sensor {
        id: SensorId::OneInch,
        name: "1-inch",
        crop_factor: 2.7,
        width_mm: 13.2,
        height_mm: 8.8,
    },
];

const _: () = {
    let mut i = 0;
    while i < SENSORS.len() {
        assert!(SENSORS[i].crop_factor > 0.0);
        assert!(SENSORS[i].width_mm > 0.0);
        assert!(SENSORS[i].height_mm > 0.0);
        i += 1;
    }
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn catalog_lookup_matches_identifier() {
        for id in SensorId::ALL {
            assert_eq!(id.sensor().id, id);
        }
    }

    #[test]
    fn parse_accepts_config_names() {
        assert_eq!(SensorId::parse("aps-c-canon"), Some(SensorId::ApsCCanon));
        assert_eq!(SensorId::parse("  One-Inch "), Some(SensorId::OneInch));
        assert_eq!(SensorId::parse("medium-format"), None);
    }

    #[test]
    fn identifiers_round_trip_through_as_str() {
        for id in SensorId::ALL {
            assert_eq!(SensorId::parse(id.as_str()), Some(id));
        }
    }

    fn diagonal(sensor: &Sensor) -> f64 {
        sensor.width_mm.hypot(sensor.height_mm)
    }

    #[test]
    fn full_frame_diagonal_is_about_43mm() {
        assert_abs_diff_eq!(diagonal(&SENSORS[0]), 43.266, epsilon = 0.001);
    }

    #[test]
    fn crop_factors_roughly_match_diagonal_ratio() {
        let ff = diagonal(&SENSORS[0]);
        for sensor in SENSORS {
            let measured = ff / diagonal(&sensor);
            assert!(
                (measured - sensor.crop_factor).abs() < 0.1,
                "{} crop factor {} vs diagonal ratio {measured}",
                sensor.name,
                sensor.crop_factor
            );
        }
    }
}
