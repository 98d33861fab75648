//! Lenient JSON extraction for storefront responses.

use serde::de::DeserializeOwned;

/// Parse `body` as JSON, falling back to the outermost brace-delimited span
/// (first `{` to last `}`) when the body is wrapped in other text.
///
/// # Errors
///
/// Returns a description of the failure when neither attempt parses.
pub fn parse_lenient<T: DeserializeOwned>(body: &str) -> Result<T, String> {
    let trimmed = body.trim();
    let direct_err = match serde_json::from_str(trimmed) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) else {
        return Err(format!("no JSON object in body: {direct_err}"));
    };
    if end < start {
        return Err(format!("no JSON object in body: {direct_err}"));
    }

    serde_json::from_str(&trimmed[start..=end]).map_err(|err| err.to_string())
}
