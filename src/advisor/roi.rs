//! Return-on-investment estimate for a locality
//!
//! revenue = avg_daily_customers * capture_rate * 30 * avg_transaction_value
//! months  = budget_lakhs * 100000 / (revenue - monthly_rent)
//!
//! A non-positive margin is reported as `NotAttainable`, never as an infinite
//! or negative duration.

use serde::Serialize;

use crate::dataset::LocalityRecord;

/// Days in a billing month
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Rupees per lakh
pub const RUPEES_PER_LAKH: f64 = 100_000.0;

/// Revenue model parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiAssumptions {
    /// Average value of one transaction, in rupees
    pub avg_transaction_value: f64,
    /// Share of daily customers the business captures
    pub capture_rate: f64,
}

impl Default for RoiAssumptions {
    fn default() -> Self {
        Self {
            avg_transaction_value: 500.0,
            capture_rate: 0.8,
        }
    }
}

/// Payback outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoiOutcome {
    /// Investment recovered after `months`
    Attainable { months: f64 },
    /// Revenue does not exceed rent at current parameters
    NotAttainable,
}

impl RoiOutcome {
    pub fn months(&self) -> Option<f64> {
        match self {
            RoiOutcome::Attainable { months } => Some(*months),
            RoiOutcome::NotAttainable => None,
        }
    }
}

/// Estimated monthly revenue and payback period
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiEstimate {
    pub estimated_revenue: f64,
    pub monthly_rent: f64,
    pub roi: RoiOutcome,
}

/// Estimates ROI for `row` given a budget in lakhs
pub fn estimate_roi(
    row: &LocalityRecord,
    investment_budget_lakhs: f64,
    assumptions: &RoiAssumptions,
) -> RoiEstimate {
    let estimated_revenue = row.avg_daily_customers
        * assumptions.capture_rate
        * DAYS_PER_MONTH
        * assumptions.avg_transaction_value;

    let margin = estimated_revenue - row.monthly_rent;
    let roi = if margin > 0.0 {
        RoiOutcome::Attainable {
            months: investment_budget_lakhs * RUPEES_PER_LAKH / margin,
        }
    } else {
        RoiOutcome::NotAttainable
    };

    RoiEstimate {
        estimated_revenue,
        monthly_rent: row.monthly_rent,
        roi,
    }
}
