#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Replace every single-element array with its sole element (default: on).
    ///
    /// With this off, normalization is a plain parse / minify round trip.
    pub collapse_single_element_arrays: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            collapse_single_element_arrays: true,
        }
    }
}
