//! Priority classification value objects.
//!
//! # Responsibility
//! - Define the fixed `low|medium|high` enumeration and its persisted codes.
//! - Map priorities to display labels and colors.
//!
//! # Invariants
//! - Classification is pure and never fails: values outside the enumeration
//!   map to `PriorityColor::Fallback`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Urgency chosen when a note is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    /// Initial picker selection.
    #[default]
    Medium,
    High,
}

/// Display color associated with a priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityColor {
    Green,
    Orange,
    Red,
    /// Unstyled rendering for values outside the enumeration.
    Fallback,
}

impl Priority {
    /// All cases in picker order.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Persisted code stored in `notes.priority`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses a persisted code. Case-insensitive; surrounding whitespace is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Capitalized display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn color(self) -> PriorityColor {
        match self {
            Self::Low => PriorityColor::Green,
            Self::Medium => PriorityColor::Orange,
            Self::High => PriorityColor::Red,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl PriorityColor {
    /// Stable color name handed to UI hosts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Fallback => "black",
        }
    }
}

/// Classifies a raw persisted priority value into a display color.
pub fn classify_priority(raw: &str) -> PriorityColor {
    Priority::parse(raw).map_or(PriorityColor::Fallback, Priority::color)
}

/// Priority as read back from storage.
///
/// Rows written by other tools (or damaged on disk) may carry a value outside
/// the enumeration; those are kept verbatim instead of failing the read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoredPriority {
    Known(Priority),
    Unrecognized(String),
}

impl StoredPriority {
    /// Builds a stored priority from its persisted text.
    pub fn from_db(raw: &str) -> Self {
        match Priority::parse(raw) {
            Some(priority) => Self::Known(priority),
            None => Self::Unrecognized(raw.to_string()),
        }
    }

    pub fn known(&self) -> Option<Priority> {
        match self {
            Self::Known(priority) => Some(*priority),
            Self::Unrecognized(_) => None,
        }
    }

    /// Persisted text for this value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(priority) => priority.as_str(),
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// Display label; unrecognized values are shown as stored.
    pub fn label(&self) -> &str {
        match self {
            Self::Known(priority) => priority.label(),
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    pub fn color(&self) -> PriorityColor {
        self.known().map_or(PriorityColor::Fallback, Priority::color)
    }
}

impl From<Priority> for StoredPriority {
    fn from(value: Priority) -> Self {
        Self::Known(value)
    }
}

// Serialized as the bare persisted code so unknown values survive a round trip.
impl Serialize for StoredPriority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StoredPriority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_db(&raw))
    }
}
