use std::fmt;

/// Why a grid configuration cannot be laid out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The column count was zero.
    ZeroColumns,
    /// Width or spacing was NaN or infinite.
    NonFiniteGeometry { total_width: f32, spacing: f32 },
    /// Spacing between columns and items was negative.
    NegativeSpacing { spacing: f32 },
    /// The spacing consumed all of the available width.
    NonPositiveColumnWidth {
        total_width: f32,
        spacing: f32,
        columns: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroColumns => write!(f, "column count must be at least 1"),
            ConfigError::NonFiniteGeometry {
                total_width,
                spacing,
            } => write!(
                f,
                "width {total_width} and spacing {spacing} must both be finite"
            ),
            ConfigError::NegativeSpacing { spacing } => {
                write!(f, "spacing {spacing} must not be negative")
            }
            ConfigError::NonPositiveColumnWidth {
                total_width,
                spacing,
                columns,
            } => write!(
                f,
                "width {total_width} leaves no room for {columns} columns spaced by {spacing}"
            ),
        }
    }
}

/// Failure of a layout pass. No partial layout is ever produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutError {
    InvalidConfiguration(ConfigError),
}

impl LayoutError {
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, LayoutError::InvalidConfiguration(_))
    }

    pub fn config_error(&self) -> ConfigError {
        match self {
            LayoutError::InvalidConfiguration(error) => *error,
        }
    }
}

impl From<ConfigError> for LayoutError {
    fn from(error: ConfigError) -> Self {
        LayoutError::InvalidConfiguration(error)
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidConfiguration(error) => {
                write!(f, "invalid grid configuration: {error}")
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::InvalidConfiguration(error) => Some(error),
        }
    }
}

impl std::error::Error for ConfigError {}
