//! Profile choices collected by the onboarding quiz

use serde::{Deserialize, Serialize};
use std::fmt;

/// The visitor's primary financial goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    /// Build emergency fund
    Emergency,
    /// Save for a house
    House,
    /// Plan for retirement
    Retirement,
    /// Travel and experiences
    Travel,
}

impl PrimaryGoal {
    /// All goals, in the order they are offered
    pub const ALL: [PrimaryGoal; 4] = [
        PrimaryGoal::Emergency,
        PrimaryGoal::House,
        PrimaryGoal::Retirement,
        PrimaryGoal::Travel,
    ];

    /// Parse a goal from its identifier
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "emergency" | "emergency_fund" | "emergency-fund" => Some(Self::Emergency),
            "house" | "home" => Some(Self::House),
            "retirement" | "retire" => Some(Self::Retirement),
            "travel" => Some(Self::Travel),
            _ => None,
        }
    }

    /// Identifier used on the wire and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::House => "house",
            Self::Retirement => "retirement",
            Self::Travel => "travel",
        }
    }

    /// Human-readable option label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Emergency => "Build emergency fund",
            Self::House => "Save for a house",
            Self::Retirement => "Plan for retirement",
            Self::Travel => "Travel and experiences",
        }
    }
}

impl fmt::Display for PrimaryGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How much investment risk the visitor accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    /// All tolerances, in the order they are offered
    pub const ALL: [RiskTolerance; 3] = [
        RiskTolerance::Conservative,
        RiskTolerance::Moderate,
        RiskTolerance::Aggressive,
    ];

    /// Parse a tolerance from its identifier
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "conservative" | "low" => Some(Self::Conservative),
            "moderate" | "medium" => Some(Self::Moderate),
            "aggressive" | "high" => Some(Self::Aggressive),
            _ => None,
        }
    }

    /// Identifier used on the wire and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }

    /// Human-readable option label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative - I prefer safety over growth",
            Self::Moderate => "Moderate - I want balanced growth",
            Self::Aggressive => "Aggressive - I want maximum growth",
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
