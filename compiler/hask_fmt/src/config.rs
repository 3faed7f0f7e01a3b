//! Layout thresholds.
//!
//! Every predicate and layout rule reads the same [`FormatConfig`], handed to
//! the formatter once at construction.

use thiserror::Error;

/// Default maximum line width.
pub const COLUMN_LIMIT: usize = 80;

/// Spaces per indentation step.
pub const INDENT_SPACES: usize = 2;

/// An application head is "short" when it ends fewer than this many columns
/// after it started.
pub const SHORT_NAME: usize = 10;

/// A trial is "small" when it stays on one line and ends before this
/// absolute column.
pub const SMALL_COLUMN_LIMIT: usize = 50;

/// Extra columns tolerated past [`COLUMN_LIMIT`] by the tolerant overflow check.
pub const OVERFLOW_MARGIN: usize = 20;

/// Configuration for the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatConfig {
    /// Column past which a line overflows.
    pub column_limit: usize,

    /// Indentation step in spaces.
    pub indent_spaces: usize,

    /// Column delta under which an application head counts as short.
    pub short_name: usize,

    /// Absolute column before which a single-line trial counts as small.
    pub small_column_limit: usize,

    /// Tolerance added to `column_limit` by the tolerant overflow check.
    pub overflow_margin: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            column_limit: COLUMN_LIMIT,
            indent_spaces: INDENT_SPACES,
            short_name: SHORT_NAME,
            small_column_limit: SMALL_COLUMN_LIMIT,
            overflow_margin: OVERFLOW_MARGIN,
        }
    }
}

impl FormatConfig {
    /// Default config with a different column limit.
    pub fn with_column_limit(column_limit: usize) -> Self {
        Self {
            column_limit,
            ..Default::default()
        }
    }

    /// Default config with a different indentation step.
    pub fn with_indent_spaces(indent_spaces: usize) -> Self {
        Self {
            indent_spaces,
            ..Default::default()
        }
    }

    /// Column past which the tolerant overflow check fires.
    #[inline]
    pub fn tolerant_limit(&self) -> usize {
        self.column_limit.saturating_add(self.overflow_margin)
    }

    /// Check the thresholds are usable, returning the config unchanged.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.column_limit == 0 {
            return Err(ConfigError::ZeroColumnLimit);
        }
        if self.indent_spaces == 0 {
            return Err(ConfigError::ZeroIndent);
        }
        if self.indent_spaces >= self.column_limit {
            return Err(ConfigError::IndentExceedsLimit {
                indent: self.indent_spaces,
                limit: self.column_limit,
            });
        }
        if self.short_name == 0 {
            return Err(ConfigError::ZeroShortName);
        }
        Ok(self)
    }
}

/// A [`FormatConfig`] that cannot drive layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("column limit must be at least 1")]
    ZeroColumnLimit,

    #[error("indent width must be at least 1")]
    ZeroIndent,

    #[error("indent width {indent} must be smaller than the column limit {limit}")]
    IndentExceedsLimit { indent: usize, limit: usize },

    #[error("short-name threshold must be at least 1")]
    ZeroShortName,
}

#[cfg(test)]
mod tests;
