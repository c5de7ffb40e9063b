use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kinds::{EventKind, SourceKind};

/// Wire format of the `date` field, e.g. `2023-08-06 12:12:44 UTC`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// A synthesized alert, serialized as one flat JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMessage {
    pub event: EventKind,
    pub source: SourceKind,
    #[serde(with = "alert_date")]
    pub date: DateTime<Utc>,
    pub ra: String,
    pub dec: String,
    pub name: String,
    pub urgency: u8,
}

mod alert_date {
    use super::DATE_FORMAT;
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DATE_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let alert = AlertMessage {
            event: EventKind::GammaRayBurst,
            source: SourceKind::Mmt,
            date: DateTime::parse_from_rfc3339("2023-08-06T12:12:44Z")
                .unwrap()
                .with_timezone(&Utc),
            ra: "22:10:00.10".to_string(),
            dec: "-28:17:33.00".to_string(),
            name: "A5V".to_string(),
            urgency: 2,
        };

        let json = serde_json::to_string(&alert).unwrap();
        assert_eq!(
            json,
            r#"{"event":"GRB","source":"MMT","date":"2023-08-06 12:12:44 UTC","ra":"22:10:00.10","dec":"-28:17:33.00","name":"A5V","urgency":2}"#
        );

        let parsed: AlertMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, alert);
    }

    #[test]
    fn test_rejects_date_without_utc_marker() {
        let json = r#"{"event":"Comet","source":"Keck 1 and 2","date":"2023-08-06 12:12:44","ra":"a","dec":"b","name":"c","urgency":1}"#;
        assert!(serde_json::from_str::<AlertMessage>(json).is_err());
    }
}
