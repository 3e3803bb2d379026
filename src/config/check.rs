use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
/// `chart_width` is optional and therefore not listed.
pub const EXPECTED_KEYS: [&str; 6] = [
    "store",
    "page_title",
    "date_format",
    "axis_label_font_size",
    "milestone_size",
    "separator_char",
];

/// Return the expected keys missing from the YAML file at `path`.
///
/// A missing file reports every key; missing keys fall back to defaults at load time.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(EXPECTED_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let missing = match yaml.as_mapping() {
        Some(map) => EXPECTED_KEYS
            .iter()
            .filter(|k| !map.contains_key(**k))
            .copied()
            .collect(),
        None => EXPECTED_KEYS.to_vec(),
    };

    Ok(missing)
}
