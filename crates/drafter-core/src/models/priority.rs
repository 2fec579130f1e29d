//! Priority enumeration for draft items.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of item priorities.
///
/// Producers are not trusted to emit a clean value: absent or unrecognized
/// priorities normalize to [`Priority::None`] at the classifier boundary
/// rather than failing the record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// No priority assigned
    #[default]
    None,

    /// Low priority
    Low,

    /// Medium priority
    Medium,

    /// High priority
    High,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Priority::None),
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::None => "none",
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Get priority with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use drafter_core::models::Priority;
    ///
    /// assert_eq!(Priority::High.with_icon(), "▲ High");
    /// assert_eq!(Priority::Low.with_icon(), "▽ Low");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Priority::None => "· None",
            Priority::Low => "▽ Low",
            Priority::Medium => "■ Medium",
            Priority::High => "▲ High",
        }
    }
}
