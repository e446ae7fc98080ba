//! Illustrative dashboard shown on the final step
//!
//! These figures are fixed sample values, not computed from the session.

use super::money::Money;

/// Snapshot rendered by the summary step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    /// Year-to-date return, in tenths of a percent
    pub ytd_return_tenths: i32,
    /// Progress of the headline goal, in percent
    pub goal_progress: u32,
    pub goal_caption: String,
    /// Initials of the accountability circle members
    pub circle: Vec<char>,
    pub monthly_contribution: Money,
}

impl DashboardSnapshot {
    pub fn illustrative() -> Self {
        Self {
            ytd_return_tenths: 125,
            goal_progress: 80,
            goal_caption: "Emergency fund complete".to_string(),
            circle: vec!['A', 'B', 'C'],
            monthly_contribution: Money::from_dollars(500),
        }
    }

    /// e.g. `+12.5%`
    pub fn ytd_return_label(&self) -> String {
        let sign = if self.ytd_return_tenths >= 0 { "+" } else { "-" };
        let abs = self.ytd_return_tenths.unsigned_abs();
        format!("{}{}.{}%", sign, abs / 10, abs % 10)
    }

    pub fn circle_caption(&self) -> String {
        match self.circle.len() {
            1 => "1 friend is cheering you on!".to_string(),
            n => format!("{} friends are cheering you on!", n),
        }
    }
}
