//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered log severity.
///
/// Threshold comparisons (`record.level < effective_level`) are the only
/// operation dispatch needs; the derived `Ord` provides them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// All levels in ascending severity order.
    pub const ALL: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    #[cfg(feature = "console")]
    pub(crate) fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Trace => BrightBlack,
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("trace".parse::<Level>(), Ok(Level::Trace));
        assert_eq!("WARN".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("Warning".parse::<Level>(), Ok(Level::Warn));
        assert!("critical".parse::<Level>().is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(Level::default(), Level::Info);
    }
}
