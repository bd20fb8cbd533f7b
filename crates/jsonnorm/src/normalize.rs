use serde_json::Value;
use tracing::{debug, trace};

use crate::{Error, Options, Result};

/// Replace every single-element array with its sole element, at every depth.
///
/// The replacement repeats until the result is no longer a single-element
/// array, so `[[["x"]]]` becomes `"x"`. Arrays of any other length are kept
/// and their elements normalized in place. Object keys are never touched.
pub fn collapse_single_element_arrays(v: Value) -> Value {
    match v {
        Value::Array(mut a) if a.len() == 1 => match a.pop() {
            Some(only) => collapse_single_element_arrays(only),
            None => Value::Array(a),
        },
        Value::Array(a) => {
            Value::Array(a.into_iter().map(collapse_single_element_arrays).collect())
        }
        Value::Object(m) => Value::Object(
            m.into_iter()
                .map(|(k, vv)| (k, collapse_single_element_arrays(vv)))
                .collect(),
        ),
        other => other,
    }
}

/// Parse `input`, normalize it and serialize it back to minified text.
///
/// Absent and empty input both yield an empty string without parsing. On a
/// parse failure the returned [`Error::Parse`] owns the input unchanged.
pub fn normalize_json_string(input: Option<&str>) -> Result<String> {
    normalize_json_string_with(input, &Options::default())
}

pub fn normalize_json_string_with(input: Option<&str>, options: &Options) -> Result<String> {
    let s = match input {
        None | Some("") => {
            trace!("empty input, nothing to normalize");
            return Ok(String::new());
        }
        Some(s) => s,
    };

    let v: Value = match serde_json::from_str(s) {
        Ok(v) => v,
        Err(source) => {
            debug!(line = source.line(), column = source.column(), "input is not valid JSON");
            return Err(Error::Parse {
                input: s.to_owned(),
                source,
            });
        }
    };

    let v = if options.collapse_single_element_arrays {
        collapse_single_element_arrays(v)
    } else {
        v
    };

    let out = serde_json::to_string(&v).map_err(Error::Serialize)?;
    trace!(input_len = s.len(), output_len = out.len(), "normalized JSON");
    Ok(out)
}

/// Pair form of [`normalize_json_string`]: the text is the canonical form, or
/// the original input whenever the error is present.
pub fn normalize_or_echo(input: Option<&str>) -> (String, Option<Error>) {
    echo_on_error(input, normalize_json_string(input))
}

fn echo_on_error(input: Option<&str>, result: Result<String>) -> (String, Option<Error>) {
    match result {
        Ok(s) => (s, None),
        Err(e) => (input.unwrap_or_default().to_owned(), Some(e)),
    }
}

/// Normalize a dynamically typed input: `null` is absent, a string is parsed
/// as JSON text, and anything else is rejected with [`Error::InputType`].
pub fn normalize_json_value(input: &Value) -> Result<String> {
    match input {
        Value::Null => normalize_json_string(None),
        Value::String(s) => normalize_json_string(Some(s)),
        other => Err(Error::InputType {
            found: type_name(other),
        }),
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
