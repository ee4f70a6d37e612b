use serde::{Deserialize, Deserializer, de::Error as _};

/// Separator of multi-valued fields such as landmarks and neighbour ids
pub(super) const LIST_SEPARATOR: char = ';';

pub(super) fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(split_list(&raw))
}

pub(super) fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Boolean column, empty cells read as `false`
pub(super) fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw, false).map_err(D::Error::custom)
}

/// Boolean column, empty cells read as `true`
pub(super) fn deserialize_flag_or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw, true).map_err(D::Error::custom)
}

fn parse_flag(raw: &str, empty: bool) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(empty),
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(format!("invalid boolean '{other}'")),
    }
}

/// `YYYY-MM-DD`
pub(super) fn deserialize_date<'de, D>(deserializer: D) -> Result<chrono::NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(D::Error::custom)
}
