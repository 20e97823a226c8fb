use serde::{Deserialize, Serialize};

use crate::{ConfigError, Field};

/// Parameters fixed for the duration of one run.
///
/// # Example
///
/// ```
/// use tetsolve_engine::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!((config.width, config.buffer_size), (11, 1));
/// assert_eq!(config.height_bound(100), 36);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Number of columns in the field.
    pub width: usize,
    /// Number of pieces held back in the lookahead buffer.
    pub buffer_size: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            width: 11,
            buffer_size: 1,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !Field::WIDTH_RANGE.contains(&self.width) {
            return Err(ConfigError::WidthOutOfRange {
                width: self.width,
                min: *Field::WIDTH_RANGE.start(),
                max: *Field::WIDTH_RANGE.end(),
            });
        }
        Ok(())
    }

    /// Rows of stack to provision for `piece_count` pieces.
    ///
    /// Each piece has four cells, so this is the height the pieces would reach
    /// if packed without gaps.
    #[must_use]
    pub fn height_bound(&self, piece_count: usize) -> usize {
        piece_count * 4 / self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_bound_rounds_down() {
        let config = SolverConfig::default();
        assert_eq!(config.height_bound(0), 0);
        assert_eq!(config.height_bound(7), 2);
        assert_eq!(config.height_bound(11), 4);
    }

    #[test]
    fn test_validate_width() {
        for width in [4, 11, 64] {
            let config = SolverConfig {
                width,
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "width {width}");
        }
        for width in [0, 3, 65] {
            let config = SolverConfig {
                width,
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("field width must be between 4 and 64, got {width}")
            );
        }
    }

    #[test]
    fn test_zero_buffer_is_valid() {
        let config = SolverConfig {
            buffer_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: SolverConfig = serde_json::from_str(r#"{"buffer_size":3}"#).unwrap();
        assert_eq!(
            config,
            SolverConfig {
                width: 11,
                buffer_size: 3
            }
        );
    }
}
