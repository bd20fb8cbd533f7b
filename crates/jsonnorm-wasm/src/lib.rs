use std::error::Error as _;

use jsonnorm::Options;
use wasm_bindgen::prelude::*;

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(feature = "size_opt")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Maximum input size in bytes (10 MB)
const MAX_INPUT_SIZE: usize = 10 * 1024 * 1024;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn check_size(input: &str) -> Result<(), String> {
    if input.len() > MAX_INPUT_SIZE {
        return Err(format!(
            "Input exceeds maximum size limit of {} bytes",
            MAX_INPUT_SIZE
        ));
    }
    Ok(())
}

fn describe(e: jsonnorm::Error) -> String {
    match e.source() {
        Some(cause) => format!("{e}: {cause}"),
        None => e.to_string(),
    }
}

/// Normalize a JSON string. An empty string normalizes to an empty string.
#[wasm_bindgen(js_name = normalizeJson)]
pub fn normalize_json(input: &str, collapse: bool) -> Result<String, String> {
    check_size(input)?;
    let options = Options {
        collapse_single_element_arrays: collapse,
    };
    jsonnorm::normalize_json_string_with(Some(input), &options).map_err(describe)
}

/// Whether two JSON strings normalize to the same text
#[wasm_bindgen(js_name = jsonEquivalent)]
pub fn json_equivalent(a: &str, b: &str) -> Result<bool, String> {
    check_size(a)?;
    check_size(b)?;
    jsonnorm::equivalent(a, b).map_err(describe)
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses() {
        let result = normalize_json(r#"{"Resource": ["arn"]}"#, true);
        assert_eq!(result.unwrap(), r#"{"Resource":"arn"}"#);
    }

    #[test]
    fn test_normalize_without_collapse() {
        let result = normalize_json(r#"{"Resource": ["arn"]}"#, false);
        assert_eq!(result.unwrap(), r#"{"Resource":["arn"]}"#);
    }

    #[test]
    fn test_normalize_invalid() {
        let err = normalize_json("{", true).unwrap_err();
        assert!(err.starts_with("failed to parse JSON at line 1, column 1: EOF while parsing"));
    }

    #[test]
    fn test_equivalent() {
        assert_eq!(json_equivalent(r#"{"a":[1]}"#, "{ \"a\": 1 }"), Ok(true));
        assert_eq!(json_equivalent(r#"{"a":[1,2]}"#, "{ \"a\": 1 }"), Ok(false));
    }

    #[test]
    fn test_normalize_size_limit() {
        let large_json = "x".repeat(MAX_INPUT_SIZE + 1);
        let result = normalize_json(&large_json, true);
        assert!(
            result
                .unwrap_err()
                .contains("Input exceeds maximum size limit")
        );
    }
}
