use serde::{Deserialize, Deserializer};

/// Deserializes an optional string, treating empty or whitespace-only values as `None`.
///
/// Role descriptions and colors arrive from forms where a cleared field is sent
/// as `""` rather than `null`.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => Ok(Some(s)),
        None => Ok(None),
    }
}
