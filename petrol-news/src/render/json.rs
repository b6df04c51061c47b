use crate::types::{Item, Result};

/// Pretty-printed JSON array of the whole pool. Non-ASCII text is written as-is.
pub fn render_json(items: &[Item]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(items)?;
    json.push('\n');
    Ok(json)
}
