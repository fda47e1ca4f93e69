/// Domain models for the application
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The complete set of displayable astronomy facts for one day.
///
/// Built whole by the snapshot service and never mutated afterwards.
/// Every field always carries something renderable; when an upstream
/// API fails or omits a field, the value from `Snapshot::default()`
/// stays in place. Rise/set fields hold "None" when the body does not
/// rise or set during that 24-hour period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub phase: String,
    pub fracillum: String,
    pub apod_title: String,
    pub apod_image: String,
    pub apod_copyright: String,
    pub apod_explanation: String,
    pub apod_date: String,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            sunrise: "None".to_string(),
            sunset: "None".to_string(),
            moonrise: "None".to_string(),
            moonset: "None".to_string(),
            phase: "Unknown".to_string(),
            fracillum: "??%".to_string(),
            apod_title: "Untitled".to_string(),
            apod_image:
                "No image supplied (check the <a href=\"https://apod.nasa.gov/\">APOD website</a>)"
                    .to_string(),
            apod_copyright: "Unknown".to_string(),
            apod_explanation: "No explanation provided".to_string(),
            apod_date: "????-??-??".to_string(),
        }
    }
}

/// One photo shoot: directory name plus pre-built gallery markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shoot {
    pub name: String,
    pub markup: String,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_has_every_field_populated() {
        let snap = Snapshot::default();
        for field in [
            &snap.sunrise,
            &snap.sunset,
            &snap.moonrise,
            &snap.moonset,
            &snap.phase,
            &snap.fracillum,
            &snap.apod_title,
            &snap.apod_image,
            &snap.apod_copyright,
            &snap.apod_explanation,
            &snap.apod_date,
        ] {
            assert!(!field.is_empty());
        }
    }
}
