//! The synthetic event record and its JSON wire form.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::generators::timestamp::parse_event_timestamp;

/// Lifecycle status carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordStatus {
    Active,
    Inactive,
    Canceled,
}

impl RecordStatus {
    /// All statuses, in the order the generator draws from.
    pub const ALL: [RecordStatus; 3] = [
        RecordStatus::Active,
        RecordStatus::Inactive,
        RecordStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
            RecordStatus::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthetic event.
///
/// Field names follow Rust conventions; the serde renames pin the wire keys
/// consumers of the stream expect (`uuid`, `event_date`, `name`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventRecord {
    #[serde(rename = "uuid")]
    pub id: Uuid,
    #[serde(rename = "event_date")]
    pub event_timestamp: String,
    pub status: RecordStatus,
    #[serde(rename = "name")]
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: u32,
}

impl EventRecord {
    /// Encode as a single-line JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a record previously produced by [`EventRecord::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse `event_timestamp` back into a naive local date-time.
    pub fn event_time(&self) -> Option<NaiveDateTime> {
        parse_event_timestamp(&self.event_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> EventRecord {
        EventRecord {
            id: Uuid::parse_str("6f1c2d3e-4a5b-4c6d-8e7f-0a1b2c3d4e5f").unwrap(),
            event_timestamp: "2024-03-15T10:20:30.123456".to_string(),
            status: RecordStatus::Inactive,
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            email: "alice@example.com".to_string(),
            phone: 912_345_678,
        }
    }

    #[test]
    fn test_wire_keys() {
        let json = sample_record().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "email",
                "event_date",
                "last_name",
                "name",
                "phone",
                "status",
                "uuid"
            ]
        );

        assert_eq!(object["uuid"], "6f1c2d3e-4a5b-4c6d-8e7f-0a1b2c3d4e5f");
        assert_eq!(object["event_date"], "2024-03-15T10:20:30.123456");
        assert_eq!(object["status"], "Inactive");
        assert_eq!(object["name"], "Alice");
        assert_eq!(object["phone"], 912_345_678);
    }

    #[test]
    fn test_json_is_single_line() {
        let json = sample_record().to_json().unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_json_round_trip() {
        let record = sample_record();
        let decoded = EventRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let json = r#"{"uuid":"6f1c2d3e-4a5b-4c6d-8e7f-0a1b2c3d4e5f","event_date":"2024-03-15T10:20:30","status":"Active","name":"A","last_name":"B","email":"a@b.c","phone":900000000,"extra":1}"#;
        assert!(EventRecord::from_json(json).is_err());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let json = r#"{"uuid":"6f1c2d3e-4a5b-4c6d-8e7f-0a1b2c3d4e5f","event_date":"2024-03-15T10:20:30","status":"Pending","name":"A","last_name":"B","email":"a@b.c","phone":900000000}"#;
        assert!(EventRecord::from_json(json).is_err());
    }

    #[test]
    fn test_event_time() {
        let record = sample_record();
        let time = record.event_time().unwrap();
        assert_eq!(time.to_string(), "2024-03-15 10:20:30.123456");
    }

    #[test]
    fn test_status_display() {
        let names: Vec<String> = RecordStatus::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["Active", "Inactive", "Canceled"]);
    }
}
