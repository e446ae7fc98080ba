//! Accumulated form data for a wizard session
//!
//! Step views write into [`FormData`] as the visitor types. Nothing is removed
//! until the session is reset or closed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::money::Money;
use super::profile::{PrimaryGoal, RiskTolerance};

/// A required field is missing
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,

    #[error("Choose a primary financial goal")]
    MissingGoal,

    #[error("Choose a risk tolerance")]
    MissingRiskTolerance,

    #[error("Emergency fund target must be greater than zero")]
    MissingEmergencyFundTarget,

    #[error("Monthly savings amount must be greater than zero")]
    MissingMonthlySavings,
}

/// Everything the visitor has entered so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub age: Option<u32>,
    pub primary_goal: Option<PrimaryGoal>,
    pub risk_tolerance: Option<RiskTolerance>,
    pub emergency_fund_target: Money,
    pub monthly_savings: Money,
}

impl FormData {
    /// Check the profile step's required fields
    pub fn validate_profile(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.primary_goal.is_none() {
            return Err(ValidationError::MissingGoal);
        }
        if self.risk_tolerance.is_none() {
            return Err(ValidationError::MissingRiskTolerance);
        }
        Ok(())
    }

    /// Check the goal step's required fields
    pub fn validate_goals(&self) -> Result<(), ValidationError> {
        if !self.emergency_fund_target.is_positive() {
            return Err(ValidationError::MissingEmergencyFundTarget);
        }
        if !self.monthly_savings.is_positive() {
            return Err(ValidationError::MissingMonthlySavings);
        }
        Ok(())
    }

    /// Whether nothing has been entered yet
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
