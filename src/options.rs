//! Configuration options for HRON encoding.
//!
//! The decoder needs no configuration beyond a nesting-depth limit;
//! encoding is where layout choices live. [`HronOptions`] controls the
//! indentation width of the value block and whether the output is
//! decorated with ANSI colors.
//!
//! ```rust
//! use hron::HronOptions;
//!
//! // Pretty output, 4-space indent.
//! let options = HronOptions::new().with_indent(4);
//!
//! // Everything on one line.
//! let compact = HronOptions::compact();
//! assert_eq!(compact.indent, 0);
//! ```

/// Options controlling HRON output layout.
///
/// The default renders multi-entry containers across lines with a
/// two-space indent and no color. An `indent` of zero keeps the whole
/// document on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HronOptions {
    /// Spaces per nesting level in the value block. Zero means compact
    /// single-line output.
    pub indent: usize,
    /// Decorate the output with ANSI color codes.
    pub colorize: bool,
}

impl Default for HronOptions {
    fn default() -> Self {
        HronOptions {
            indent: 2,
            colorize: false,
        }
    }
}

impl HronOptions {
    /// Creates options with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for compact single-line output.
    #[must_use]
    pub fn compact() -> Self {
        HronOptions {
            indent: 0,
            colorize: false,
        }
    }

    /// Sets the indentation width.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables ANSI color decoration.
    #[must_use]
    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = HronOptions::default();
        assert_eq!(options.indent, 2);
        assert!(!options.colorize);
    }

    #[test]
    fn test_compact_options() {
        let options = HronOptions::compact();
        assert_eq!(options.indent, 0);
        assert!(!options.colorize);
    }

    #[test]
    fn test_builder_chain() {
        let options = HronOptions::new().with_indent(4).with_colorize(true);
        assert_eq!(options.indent, 4);
        assert!(options.colorize);
    }
}
