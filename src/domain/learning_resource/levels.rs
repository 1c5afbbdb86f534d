//! Closed vocabularies attached to a learning resource.

use crate::domain::foundation::{DomainError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant's wire name, in declaration order.
            pub const fn values() -> &'static [&'static str] {
                &[$($text),+]
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(DomainError::new(
                        ErrorCode::InvalidData,
                        format!("{} must be one of: {}", stringify!($name), Self::values().join(", ")),
                    )
                    .with_detail("value", other)),
                }
            }
        }
    };
}

string_enum! {
    /// How demanding the material is.
    Difficulty {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

string_enum! {
    /// Focus a resource asks of the learner.
    EnergyLevel {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

string_enum! {
    /// Progress through a resource.
    ResourceStatus {
        Pending => "pending",
        InProgress => "in_progress",
        Completed => "completed",
    }
}

impl Default for ResourceStatus {
    fn default() -> Self {
        ResourceStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_match_serialized_names() {
        for value in ResourceStatus::values() {
            let parsed: ResourceStatus = value.parse().unwrap();
            assert_eq!(serde_json::to_value(parsed).unwrap(), serde_json::json!(value));
        }
    }

    #[test]
    fn values_keep_declaration_order() {
        assert_eq!(Difficulty::values(), &["low", "medium", "high"]);
        assert_eq!(ResourceStatus::values(), &["pending", "in_progress", "completed"]);
    }

    #[test]
    fn unknown_names_fail_to_parse() {
        let err = "extreme".parse::<EnergyLevel>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidData);
        assert_eq!(err.message, "EnergyLevel must be one of: low, medium, high");
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(ResourceStatus::default(), ResourceStatus::Pending);
        assert_eq!(ResourceStatus::InProgress.to_string(), "in_progress");
    }
}
