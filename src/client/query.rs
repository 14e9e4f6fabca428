//! Query string construction.
//!
//! Parameters arrive as any serializable value that flattens to a JSON
//! object. Keys are translated to the snake_case names Mealie expects on the
//! wire; values that are not primitives are dropped.

use serde::Serialize;
use serde_json::Value;

use crate::client::error::{Error, Result};

/// Serializes `params` into a query string without the leading `?`.
///
/// Returns an empty string when nothing survives filtering.
pub fn build_query<P>(params: &P) -> Result<String>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(params).map_err(Error::Encode)?;
    let Value::Object(map) = value else {
        return Ok(String::new());
    };

    let pairs: Vec<String> = map
        .iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => return None,
            };
            Some(format!(
                "{}={}",
                urlencoding::encode(&to_snake_case(key)),
                urlencoding::encode(&rendered)
            ))
        })
        .collect();

    Ok(pairs.join("&"))
}

/// `recipeId` -> `recipe_id`, `perPage` -> `per_page`. Already snake_case
/// keys pass through unchanged and acronyms stay whole (`recipeURL` ->
/// `recipe_url`).
pub fn to_snake_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_ascii_uppercase() {
            out.push(ch);
            continue;
        }

        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1);
        let boundary = match prev {
            Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
            // last capital of an acronym that starts a new word: `URLParam`
            Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
            _ => false,
        };
        if boundary {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}
