//! Result payloads returned by a response service
//!
//! Each endpoint has its own payload shape. Computed values (account totals,
//! goal progress, allocation sums) are derived on read and never stored; the
//! JSON form writes them out next to the stored fields.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use super::money::Money;
use crate::error::{SavrError, SavrResult};

/// Outcome of the onboarding assessment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileAssessment {
    pub risk_profile: String,
    pub recommended_portfolio: String,
    pub next_steps: Vec<String>,
}

/// A bank account linked during the connection step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedAccount {
    pub name: String,
    pub balance: Money,
}

impl LinkedAccount {
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }
}

/// Accounts returned by a bank connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConnection {
    pub accounts: Vec<LinkedAccount>,
}

impl BankConnection {
    /// Sum of all linked balances
    pub fn total_balance(&self) -> Money {
        self.accounts.iter().map(|a| a.balance).sum()
    }
}

/// One slice of a portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    #[serde(rename = "name")]
    pub label: String,
    pub percentage: u32,
    pub value: Money,
}

/// A recommended portfolio
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub total_value: Money,
    pub allocation: Vec<Allocation>,
    /// Expected annual return, in percent
    pub expected_return: f64,
    pub risk_level: String,
}

impl Portfolio {
    /// Build a portfolio from percentage weights
    ///
    /// Each slice gets `total * pct / 100`. The rounding remainder goes to the
    /// last slice so the values always add up to `total`.
    pub fn from_weights(
        total: Money,
        weights: &[(&str, u32)],
        expected_return: f64,
        risk_level: impl Into<String>,
    ) -> SavrResult<Self> {
        let pct_sum: u32 = weights.iter().map(|(_, pct)| pct).sum();
        if weights.is_empty() || pct_sum != 100 {
            return Err(SavrError::InvalidPayload(format!(
                "allocation weights must sum to 100, got {}",
                pct_sum
            )));
        }

        let mut allocation: Vec<Allocation> = weights
            .iter()
            .map(|(label, pct)| Allocation {
                label: (*label).to_string(),
                percentage: *pct,
                value: total.percent(*pct),
            })
            .collect();

        let assigned: Money = allocation.iter().map(|a| a.value).sum();
        if let Some(last) = allocation.last_mut() {
            last.value += total - assigned;
        }

        Ok(Self {
            total_value: total,
            allocation,
            expected_return,
            risk_level: risk_level.into(),
        })
    }

    /// Sum of all slice percentages
    pub fn percentage_sum(&self) -> u32 {
        self.allocation.iter().map(|a| a.percentage).sum()
    }

    /// Sum of all slice values
    pub fn value_sum(&self) -> Money {
        self.allocation.iter().map(|a| a.value).sum()
    }

    /// Percentages must sum to 100 and values to the total
    pub fn is_consistent(&self) -> bool {
        self.percentage_sum() == 100 && self.value_sum() == self.total_value
    }
}

/// A savings goal and how far along it is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub name: String,
    pub target: Money,
    pub current: Money,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: Money, current: Money) -> Self {
        Self {
            name: name.into(),
            target,
            current,
        }
    }

    /// `round(current / target * 100)`, half rounding up; 0 for a non-positive target
    pub fn progress(&self) -> u32 {
        let target = self.target.cents();
        let current = self.current.cents().max(0);
        if target <= 0 {
            return 0;
        }
        let pct = (current * 200 + target) / (target * 2);
        u32::try_from(pct).unwrap_or(u32::MAX)
    }
}

impl Serialize for Goal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Goal", 4)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("target", &self.target)?;
        state.serialize_field("current", &self.current)?;
        state.serialize_field("progress", &self.progress())?;
        state.end()
    }
}

/// Goals saved during the goal step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalPlan {
    pub goals: Vec<Goal>,
    pub monthly_contribution: Money,
}

/// Anything a response service can return
///
/// Serializes to the response object a web client expects, e.g.
/// `{"kind": "connection", "success": true, "accounts": [..], "totalBalance": 10500}`.
/// The recommendation nests its fields under `portfolio`.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Profile(ProfileAssessment),
    Connection(BankConnection),
    Recommendation(Portfolio),
    Goal(GoalPlan),
    /// Fallback for unrecognized endpoints: the input, echoed back
    Echo {
        success: bool,
        data: serde_json::Value,
    },
}

impl Payload {
    /// Tag written as `kind`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Profile(_) => "profile",
            Self::Connection(_) => "connection",
            Self::Recommendation(_) => "recommendation",
            Self::Goal(_) => "goal",
            Self::Echo { .. } => "echo",
        }
    }

    pub fn as_profile(&self) -> Option<&ProfileAssessment> {
        match self {
            Self::Profile(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_connection(&self) -> Option<&BankConnection> {
        match self {
            Self::Connection(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_portfolio(&self) -> Option<&Portfolio> {
        match self {
            Self::Recommendation(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_goal_plan(&self) -> Option<&GoalPlan> {
        match self {
            Self::Goal(g) => Some(g),
            _ => None,
        }
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", self.kind())?;
        match self {
            Self::Profile(profile) => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("riskProfile", &profile.risk_profile)?;
                map.serialize_entry("recommendedPortfolio", &profile.recommended_portfolio)?;
                map.serialize_entry("nextSteps", &profile.next_steps)?;
            }
            Self::Connection(connection) => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("accounts", &connection.accounts)?;
                map.serialize_entry("totalBalance", &connection.total_balance())?;
            }
            Self::Recommendation(portfolio) => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("portfolio", portfolio)?;
            }
            Self::Goal(plan) => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("goals", &plan.goals)?;
                map.serialize_entry("monthlyContribution", &plan.monthly_contribution)?;
            }
            Self::Echo { success, data } => {
                map.serialize_entry("success", success)?;
                map.serialize_entry("data", data)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_total() {
        let connection = BankConnection {
            accounts: vec![
                LinkedAccount::new("Chase Checking", Money::from_dollars(2500)),
                LinkedAccount::new("Chase Savings", Money::from_dollars(8000)),
            ],
        };
        assert_eq!(connection.total_balance(), Money::from_dollars(10_500));
    }

    #[test]
    fn test_empty_connection_total() {
        let connection = BankConnection { accounts: vec![] };
        assert!(connection.total_balance().is_zero());
    }

    #[test]
    fn test_goal_progress() {
        let emergency = Goal::new(
            "Emergency Fund",
            Money::from_dollars(10_000),
            Money::from_dollars(8000),
        );
        assert_eq!(emergency.progress(), 80);

        let vacation = Goal::new(
            "Vacation Fund",
            Money::from_dollars(5000),
            Money::from_dollars(2000),
        );
        assert_eq!(vacation.progress(), 40);
    }

    #[test]
    fn test_goal_progress_rounding() {
        let third = Goal::new("Third", Money::from_dollars(3), Money::from_dollars(1));
        assert_eq!(third.progress(), 33);
        let two_thirds = Goal::new("Two thirds", Money::from_dollars(3), Money::from_dollars(2));
        assert_eq!(two_thirds.progress(), 67);
        let half = Goal::new("Half", Money::from_cents(200), Money::from_cents(1));
        assert_eq!(half.progress(), 1);
    }

    #[test]
    fn test_goal_progress_edges() {
        let no_target = Goal::new("None", Money::zero(), Money::from_dollars(5));
        assert_eq!(no_target.progress(), 0);
        let overshoot = Goal::new("Over", Money::from_dollars(100), Money::from_dollars(150));
        assert_eq!(overshoot.progress(), 150);
    }

    #[test]
    fn test_portfolio_from_weights() {
        let portfolio = Portfolio::from_weights(
            Money::from_dollars(5000),
            &[("VTI", 40), ("VXUS", 25), ("BND", 20), ("VGLT", 15)],
            8.5,
            "Moderate",
        )
        .unwrap();

        let values: Vec<Money> = portfolio.allocation.iter().map(|a| a.value).collect();
        assert_eq!(
            values,
            vec![
                Money::from_dollars(2000),
                Money::from_dollars(1250),
                Money::from_dollars(1000),
                Money::from_dollars(750),
            ]
        );
        assert_eq!(portfolio.percentage_sum(), 100);
        assert_eq!(portfolio.value_sum(), Money::from_dollars(5000));
        assert!(portfolio.is_consistent());
    }

    #[test]
    fn test_from_weights_assigns_remainder() {
        let portfolio = Portfolio::from_weights(
            Money::from_cents(1001),
            &[("A", 33), ("B", 33), ("C", 34)],
            5.0,
            "Moderate",
        )
        .unwrap();

        assert_eq!(portfolio.allocation[0].value, Money::from_cents(330));
        assert_eq!(portfolio.allocation[1].value, Money::from_cents(330));
        assert_eq!(portfolio.allocation[2].value, Money::from_cents(341));
        assert!(portfolio.is_consistent());
    }

    #[test]
    fn test_from_weights_rejects_bad_sum() {
        let result = Portfolio::from_weights(Money::from_dollars(100), &[("A", 50)], 1.0, "Low");
        assert!(result.is_err());
        let result = Portfolio::from_weights(Money::from_dollars(100), &[], 1.0, "Low");
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_tagging() {
        let payload = Payload::Echo {
            success: true,
            data: serde_json::json!({"hello": "world"}),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["kind"], "echo");
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["hello"], "world");
        assert!(payload.as_profile().is_none());
    }

    #[test]
    fn test_connection_json_shape() {
        let payload = Payload::Connection(BankConnection {
            accounts: vec![
                LinkedAccount::new("Chase Checking", Money::from_dollars(2500)),
                LinkedAccount::new("Chase Savings", Money::from_dollars(8000)),
            ],
        });
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "connection",
                "success": true,
                "accounts": [
                    {"name": "Chase Checking", "balance": 2500},
                    {"name": "Chase Savings", "balance": 8000}
                ],
                "totalBalance": 10500
            })
        );
    }

    #[test]
    fn test_goal_json_includes_progress() {
        let payload = Payload::Goal(GoalPlan {
            goals: vec![Goal::new(
                "Emergency Fund",
                Money::from_dollars(10_000),
                Money::from_dollars(8000),
            )],
            monthly_contribution: Money::from_cents(50_050),
        });
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(
            value["goals"][0],
            serde_json::json!({"name": "Emergency Fund", "target": 10000, "current": 8000, "progress": 80})
        );
        assert_eq!(value["monthlyContribution"], 500.5);
    }

    #[test]
    fn test_recommendation_nests_portfolio() {
        let portfolio = Portfolio::from_weights(
            Money::from_dollars(5000),
            &[("VTI", 60), ("BND", 40)],
            8.5,
            "Moderate",
        )
        .unwrap();
        let value = serde_json::to_value(Payload::Recommendation(portfolio)).unwrap();
        assert_eq!(value["kind"], "recommendation");
        assert_eq!(value["success"], true);
        assert_eq!(value["portfolio"]["totalValue"], 5000);
        assert_eq!(value["portfolio"]["expectedReturn"], 8.5);
        assert_eq!(value["portfolio"]["riskLevel"], "Moderate");
        assert_eq!(
            value["portfolio"]["allocation"][0],
            serde_json::json!({"name": "VTI", "percentage": 60, "value": 3000})
        );
    }
}
