//! Frontend Models
//!
//! Data structures matching the records API.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned record identifier
pub type RecordId = i64;

/// Owner of a set of records
pub type UserId = i64;

/// One logged egg count (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub user_id: UserId,
    pub date: String,
    pub count: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
}

/// Identity of a rendered table row
pub type RowKey = (RecordId, String, i64, String);

impl Record {
    /// Row key for keyed rendering.
    ///
    /// Carries the displayed fields so a row edited elsewhere under the same
    /// id is redrawn on the next load.
    pub fn row_key(&self) -> RowKey {
        (self.id, self.date.clone(), self.count, self.notes.clone())
    }
}

/// Body of `POST /records/`
///
/// `count` is `None` when the typed text held no integer; it goes out as
/// JSON `null` and the server decides what to do with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub user_id: UserId,
    pub date: String,
    pub count: Option<i64>,
    pub notes: String,
}

/// Body returned by `POST /records/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedRecord {
    pub id: RecordId,
}

/// Body returned by `GET /records/{user_id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecordList {
    pub records: Vec<Record>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_list_parses() {
        let body = r#"{"records":[
            {"id":7,"user_id":42,"date":"2024-01-01","count":5,"notes":"morning"},
            {"id":9,"user_id":42,"date":"2024-01-02","count":0,"notes":null},
            {"id":11,"user_id":42,"date":"2024-01-03","count":2}
        ]}"#;

        let list: RecordList = serde_json::from_str(body).unwrap();
        assert_eq!(list.records.len(), 3);
        assert_eq!(list.records[0].notes, "morning");
        assert_eq!(list.records[1].notes, "");
        assert_eq!(list.records[2].notes, "");
        assert_eq!(list.records[2].id, 11);
    }

    #[test]
    fn test_row_key_follows_content() {
        let before = Record {
            id: 3,
            user_id: 42,
            date: "2024-01-01".to_string(),
            count: 4,
            notes: String::new(),
        };
        let recounted = Record { count: 6, ..before.clone() };
        let annotated = Record { notes: "one cracked".to_string(), ..before.clone() };
        let redated = Record { date: "2024-01-02".to_string(), ..before.clone() };

        assert_eq!(before.row_key(), before.clone().row_key());
        assert_ne!(before.row_key(), recounted.row_key());
        assert_ne!(before.row_key(), annotated.row_key());
        assert_ne!(before.row_key(), redated.row_key());
    }

    #[test]
    fn test_unparsed_count_serializes_as_null() {
        let record = NewRecord {
            user_id: 42,
            date: "2024-01-01".to_string(),
            count: None,
            notes: String::new(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["count"].is_null());
        assert_eq!(json["user_id"], 42);
    }

    #[test]
    fn test_created_record_ignores_extra_fields() {
        let created: CreatedRecord = serde_json::from_str(r#"{"id":12,"status":"ok"}"#).unwrap();
        assert_eq!(created.id, 12);
    }
}
