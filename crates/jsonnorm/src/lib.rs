#![doc = include_str!("../README.md")]

pub mod error;
pub mod normalize;
pub mod options;

pub use crate::error::{Error, Result};
pub use crate::normalize::{
    collapse_single_element_arrays, normalize_json_string, normalize_json_string_with,
    normalize_json_value, normalize_or_echo,
};
pub use crate::options::Options;

use std::io::Read;

pub fn normalize_from_reader<R: Read>(mut reader: R) -> Result<String> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    normalize_json_string(Some(&s))
}

/// Whether `a` and `b` normalize to the same canonical text.
///
/// Whitespace, key order and single-element arrays versus their element do not
/// matter. A parse failure on either side is returned as an error.
pub fn equivalent(a: &str, b: &str) -> Result<bool> {
    equivalent_with(a, b, &Options::default())
}

/// [`equivalent`] under explicit options; with collapse off, `["x"]` and `"x"`
/// differ.
pub fn equivalent_with(a: &str, b: &str, options: &Options) -> Result<bool> {
    Ok(normalize_json_string_with(Some(a), options)?
        == normalize_json_string_with(Some(b), options)?)
}
