//! Mock response service
//!
//! Stands in for a real backend. Every call waits a fixed delay, then returns
//! the canned payload for its endpoint. Unknown endpoints get their input
//! echoed back. A [`FailurePlan`] makes chosen endpoints reject so that the
//! retry path of the wizard can be exercised.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::endpoint::Endpoint;
use super::response::ResponseService;
use crate::config::Settings;
use crate::error::{SavrError, SavrResult};
use crate::models::{
    Allocation, BankConnection, Goal, GoalPlan, LinkedAccount, Money, Payload, Portfolio,
    ProfileAssessment,
};

/// Simulated latency of every mock response, in milliseconds
pub const RESPONSE_DELAY_MS: u64 = 1500;

/// Simulated latency of every mock response
pub const RESPONSE_DELAY: Duration = Duration::from_millis(RESPONSE_DELAY_MS);

/// Canned payload for an endpoint
///
/// Known endpoints ignore `input` entirely.
pub fn fixture(endpoint: &Endpoint, input: serde_json::Value) -> Payload {
    match endpoint {
        Endpoint::Profile => Payload::Profile(ProfileAssessment {
            risk_profile: "Moderate".to_string(),
            recommended_portfolio: "Balanced".to_string(),
            next_steps: vec!["Connect bank".to_string(), "Set goals".to_string()],
        }),
        Endpoint::Connection => Payload::Connection(BankConnection {
            accounts: vec![
                LinkedAccount::new("Chase Checking", Money::from_dollars(2500)),
                LinkedAccount::new("Chase Savings", Money::from_dollars(8000)),
            ],
        }),
        Endpoint::Recommendation => Payload::Recommendation(Portfolio {
            total_value: Money::from_dollars(5000),
            allocation: vec![
                allocation("VTI", 40, 2000),
                allocation("VXUS", 25, 1250),
                allocation("BND", 20, 1000),
                allocation("VGLT", 15, 750),
            ],
            expected_return: 8.5,
            risk_level: "Moderate".to_string(),
        }),
        Endpoint::Goal => Payload::Goal(GoalPlan {
            goals: vec![
                Goal::new(
                    "Emergency Fund",
                    Money::from_dollars(10_000),
                    Money::from_dollars(8000),
                ),
                Goal::new(
                    "Vacation Fund",
                    Money::from_dollars(5000),
                    Money::from_dollars(2000),
                ),
            ],
            monthly_contribution: Money::from_dollars(500),
        }),
        Endpoint::Other(_) => Payload::Echo {
            success: true,
            data: input,
        },
    }
}

fn allocation(label: &str, percentage: u32, dollars: i64) -> Allocation {
    Allocation {
        label: label.to_string(),
        percentage,
        value: Money::from_dollars(dollars),
    }
}

/// Which endpoints should reject, and how often
#[derive(Debug, Default)]
pub struct FailurePlan {
    always: HashSet<Endpoint>,
    remaining: HashMap<Endpoint, u32>,
}

impl FailurePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call to `endpoint` reject
    pub fn always_fail(&mut self, endpoint: Endpoint) {
        self.always.insert(endpoint);
    }

    /// Make the next `count` calls to `endpoint` reject
    pub fn fail_next(&mut self, endpoint: Endpoint, count: u32) {
        *self.remaining.entry(endpoint).or_insert(0) += count;
    }

    /// Stop injecting failures
    pub fn clear(&mut self) {
        self.always.clear();
        self.remaining.clear();
    }

    /// Decide whether this call rejects, consuming one queued failure
    fn take(&mut self, endpoint: &Endpoint) -> bool {
        if self.always.contains(endpoint) {
            return true;
        }
        match self.remaining.get_mut(endpoint) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

/// A response service that answers from fixtures after a fixed delay
#[derive(Debug)]
pub struct MockResponseService {
    delay: Duration,
    failures: Mutex<FailurePlan>,
}

impl MockResponseService {
    /// Create a mock with the standard delay and no failures
    pub fn new() -> Self {
        Self::with_delay(RESPONSE_DELAY)
    }

    /// Create a mock with a custom delay
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            failures: Mutex::new(FailurePlan::new()),
        }
    }

    /// Create a mock configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        let service = Self::with_delay(settings.response_delay());
        for name in &settings.mock.fail_endpoints {
            service.always_fail(Endpoint::parse(name));
        }
        service
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Make every call to `endpoint` reject
    pub fn always_fail(&self, endpoint: Endpoint) {
        self.with_plan(|plan| plan.always_fail(endpoint));
    }

    /// Make the next `count` calls to `endpoint` reject
    pub fn fail_next(&self, endpoint: Endpoint, count: u32) {
        self.with_plan(|plan| plan.fail_next(endpoint, count));
    }

    /// Stop injecting failures
    pub fn clear_failures(&self) {
        self.with_plan(FailurePlan::clear);
    }

    fn with_plan<R>(&self, f: impl FnOnce(&mut FailurePlan) -> R) -> R {
        let mut guard = match self.failures.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

impl Default for MockResponseService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseService for MockResponseService {
    async fn respond(&self, endpoint: &Endpoint, input: serde_json::Value) -> SavrResult<Payload> {
        debug!(endpoint = %endpoint, delay_ms = self.delay.as_millis() as u64, "mock request");
        tokio::time::sleep(self.delay).await;

        if self.with_plan(|plan| plan.take(endpoint)) {
            warn!(endpoint = %endpoint, "mock request rejected");
            return Err(SavrError::fetch(
                endpoint.as_str(),
                "simulated service outage",
            ));
        }

        Ok(fixture(endpoint, input))
    }
}
