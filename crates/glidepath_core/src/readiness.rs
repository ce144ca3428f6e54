//! Retirement readiness scoring.
//!
//! Derives a single 0-100 score from one projection result: a weighted sum of
//! savings-rate adequacy (40), emergency-fund adequacy (20), funds coverage
//! toward age 100 (30), and end-of-horizon leftover buffer (10). Each term is
//! clamped to its cap before summing; the total is clamped to [0, 100].

use serde::{Deserialize, Serialize};

use crate::model::{Calculation, Profile};

/// Benchmark savings rate that earns the full 40 points.
pub const RECOMMENDED_SAVINGS_RATE: f64 = 0.15;

/// Readiness score with its component ratios and textual recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub readiness_score: f64,
    pub current_savings_rate: f64,
    pub recommended_savings_rate: f64,
    pub monthly_savings: f64,
    pub projected_retirement_income: f64,
    pub current_monthly_expenses: f64,
    /// Years covered toward age 100 over years needed, clamped to [0, 1].
    pub coverage_ratio: f64,
    /// End-of-horizon funds over a two-year expense buffer, clamped to [0, 1].
    pub leftover_ratio: f64,
    /// Total assets over a six-month expense fund, clamped to [0, 1].
    pub emergency_fund_ratio: f64,
    pub recommendations: Vec<String>,
}

/// Score one projection result against the profile it was derived from.
pub fn score(profile: &Profile, calculation: &Calculation) -> ReadinessReport {
    let monthly_expenses = profile.monthly_expenses_base();
    let monthly_savings = profile.monthly_salary_net - monthly_expenses;
    let savings_rate = if profile.monthly_salary_net > 0.0 {
        monthly_savings / profile.monthly_salary_net
    } else {
        0.0
    };

    let depleted = calculation
        .assumptions
        .timeline
        .iter()
        .any(|row| row.final_value < 0.0);
    let age_when_depleted = calculation.depletion_age().unwrap_or(profile.base_age);

    let needed_years = f64::from(100u32.saturating_sub(profile.base_age).max(1));
    let covered_years = f64::from(age_when_depleted.saturating_sub(profile.base_age));
    let coverage_ratio = (covered_years / needed_years).clamp(0.0, 1.0);

    let buffer_target = (monthly_expenses * 12.0 * 2.0).max(1.0);
    let leftover_ratio = (calculation.leftover_funds() / buffer_target).clamp(0.0, 1.0);

    let emergency_fund_target = (monthly_expenses * 6.0).max(1.0);
    let emergency_fund_ratio = (profile.total_assets / emergency_fund_target).min(1.0);

    let readiness_score = ((savings_rate / RECOMMENDED_SAVINGS_RATE * 40.0).clamp(0.0, 40.0)
        + (emergency_fund_ratio * 20.0).clamp(0.0, 20.0)
        + coverage_ratio * 30.0
        + leftover_ratio * 10.0)
        .clamp(0.0, 100.0);

    let mut recommendations = Vec::new();
    if savings_rate < RECOMMENDED_SAVINGS_RATE {
        recommendations
            .push("Increase your monthly savings rate to at least 15% of your income".to_string());
    }
    if profile.total_assets < profile.monthly_salary_net * 6.0 {
        recommendations.push("Build an emergency fund of 3-6 months of expenses".to_string());
    }
    if calculation.monthly_retirement_income < monthly_expenses * 0.8 {
        recommendations
            .push("Consider increasing your retirement savings or working longer".to_string());
    }
    if coverage_ratio < 1.0 {
        recommendations.push(
            "Funds may not last to age 100; consider reducing expenses, increasing savings, \
             or delaying retirement"
                .to_string(),
        );
    }
    if leftover_ratio < 0.5 && !depleted {
        recommendations.push(
            "End-of-horizon reserves are low; aim for a larger buffer (e.g. 2 years of expenses)"
                .to_string(),
        );
    }

    ReadinessReport {
        readiness_score,
        current_savings_rate: savings_rate,
        recommended_savings_rate: RECOMMENDED_SAVINGS_RATE,
        monthly_savings,
        projected_retirement_income: calculation.monthly_retirement_income,
        current_monthly_expenses: monthly_expenses,
        coverage_ratio,
        leftover_ratio,
        emergency_fund_ratio,
        recommendations,
    }
}

/// Required-savings estimate toward a target monthly retirement income,
/// using the 4% rule for the fund target and the standard annuity factor for
/// the monthly contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSavings {
    pub required_monthly_savings: f64,
    pub required_retirement_fund: f64,
    pub target_monthly_income: f64,
    pub target_annual_income: f64,
    pub years_to_retirement: i32,
    pub expected_return_rate: f64,
    pub inflation_rate: f64,
    pub safe_withdrawal_rate: f64,
}

/// Monthly savings needed to fund `target_monthly_income` (in today's money)
/// starting `years_to_retirement` from now.
pub fn required_savings(
    target_monthly_income: f64,
    years_to_retirement: i32,
    expected_return_rate: f64,
    inflation_rate: f64,
) -> RequiredSavings {
    const SAFE_WITHDRAWAL_RATE: f64 = 0.04;

    let inflation_adjustment = (1.0 + inflation_rate).powi(years_to_retirement);
    let target_annual_income = target_monthly_income * 12.0 * inflation_adjustment;
    let required_fund = target_annual_income / SAFE_WITHDRAWAL_RATE;

    let months = (years_to_retirement.max(0) * 12) as f64;
    let required_monthly_savings = if months == 0.0 {
        required_fund
    } else if expected_return_rate > 0.0 {
        let monthly_rate = expected_return_rate / 12.0;
        required_fund / (((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate)
    } else {
        required_fund / months
    };

    RequiredSavings {
        required_monthly_savings,
        required_retirement_fund: required_fund,
        target_monthly_income,
        target_annual_income,
        years_to_retirement,
        expected_return_rate,
        inflation_rate,
        safe_withdrawal_rate: SAFE_WITHDRAWAL_RATE,
    }
}
