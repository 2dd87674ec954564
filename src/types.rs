//! Common types and data structures

use serde::{Deserialize, Deserializer};

/// A single doa entry from the remote collection.
///
/// `id`, `doa` and `ayat` are required by the screen; everything else the
/// API sends is carried along untouched so the detail view can show it
/// without a second fetch.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DoaRecord {
    #[serde(deserialize_with = "id_string_or_number")]
    pub id: String,
    pub doa: String,
    pub ayat: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DoaRecord {
    /// Passthrough field lookup for the detail view (e.g. "latin", "artinya").
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(|v| v.as_str())
    }
}

/// The API serves string ids, but the original client stringified them
/// defensively, so numeric ids are tolerated here too.
fn id_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Load state for the favorites screen.
///
/// Created as `Loading` when the screen mounts and settles exactly once to
/// `Ready` or `Failed`; there are no further transitions for the lifetime of
/// the screen instance. `Failed` carries no payload: the fetch error is
/// logged at the loader boundary and never surfaced to the user.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Vec<DoaRecord>),
    Failed,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Records to render once settled. `Failed` shows the same empty list a
    /// genuinely empty `Ready` does.
    pub fn records(&self) -> &[DoaRecord] {
        match self {
            LoadState::Ready(records) => records,
            _ => &[],
        }
    }
}

/// Everything that can go wrong between issuing the GET and having a list of
/// validated records. Callers convert this into `LoadState::Failed`; it is
/// never shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_required_fields() {
        let record: DoaRecord = serde_json::from_str(
            r#"{"id":"7","doa":"Doa Sebelum Tidur","ayat":"بِسْمِكَ"}"#,
        )
        .unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.doa, "Doa Sebelum Tidur");
        assert_eq!(record.ayat, "بِسْمِكَ");
        assert!(record.extra.is_empty());
    }

    #[test]
    fn numeric_id_is_stringified() {
        let record: DoaRecord =
            serde_json::from_str(r#"{"id":12,"doa":"a","ayat":"b"}"#).unwrap();
        assert_eq!(record.id, "12");
    }

    #[test]
    fn unknown_fields_pass_through() {
        let record: DoaRecord = serde_json::from_str(
            r#"{"id":"1","doa":"a","ayat":"b","latin":"bismika","artinya":"Dengan nama-Mu"}"#,
        )
        .unwrap();
        assert_eq!(record.extra_str("latin"), Some("bismika"));
        assert_eq!(record.extra_str("artinya"), Some("Dengan nama-Mu"));
        assert_eq!(record.extra_str("missing"), None);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let result = serde_json::from_str::<DoaRecord>(r#"{"id":"1","doa":"a"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn failed_and_empty_ready_render_the_same_rows() {
        assert_eq!(LoadState::Failed.records(), &[] as &[DoaRecord]);
        assert_eq!(LoadState::Ready(Vec::new()).records(), &[] as &[DoaRecord]);
        assert!(LoadState::Loading.is_loading());
        assert!(!LoadState::Failed.is_loading());
    }
}
