use serde::{Deserialize, Deserializer};

/// Current UTC time in Unix milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a print job id (UUID v4)
pub fn new_job_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Deserialize a present field (including `null`) as `Some(..)`.
///
/// Paired with `#[serde(default)]` this tells "absent" (`None`) apart from
/// "explicitly null" (`Some(None)`).
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
