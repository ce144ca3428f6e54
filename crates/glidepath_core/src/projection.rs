//! Deterministic year-by-year retirement projection.
//!
//! `project` turns a [`Profile`] plus three tunables into a [`Calculation`]:
//! a timeline of simulated years from retirement start until the target age
//! or depletion, with monthly compounding and a one-year capital-gains tax
//! lag. The only external dependency is "today", which is injected so the
//! function stays pure and the test suite deterministic.

use jiff::civil::Date;
use tracing::debug;

use crate::date_math::{add_months, add_years, years_between};
use crate::error::Result;
use crate::model::{Assumptions, Calculation, Profile, TimelineRow};

/// Hard ceiling on simulated years, independent of the target-age stop.
const MAX_SIMULATED_YEARS: u32 = 200;

/// Tunables supplied per projection call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    pub expected_return_rate: f64,
    pub retirement_duration_years: u32,
    /// Simulate until this age (inclusive).
    pub target_age: u32,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            expected_return_rate: 0.07,
            retirement_duration_years: 25,
            target_age: 100,
        }
    }
}

/// Round to 2 decimal places for storage in a timeline row. Intermediate
/// simulation values are never rounded.
#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn period_label(start: Date, end: Date) -> String {
    format!(
        "{:02}-{:04} - {:02}-{:04}",
        start.month(),
        start.year(),
        end.month(),
        end.year()
    )
}

/// Project a profile with the system clock as "today".
pub fn project_at_today(profile: &Profile, params: &ProjectionParams) -> Result<Calculation> {
    project(profile, params, jiff::Zoned::now().date())
}

/// Project a profile year by year until the target age, the 200-year ceiling,
/// or depletion, whichever comes first.
///
/// Pure and deterministic: identical inputs and an identical `today` yield an
/// identical `Calculation`. Numerically valid but degenerate profiles (zero
/// income, zero assets) produce a timeline that depletes immediately, which
/// is correct output rather than an error.
pub fn project(profile: &Profile, params: &ProjectionParams, today: Date) -> Result<Calculation> {
    profile.validate()?;

    let years_to_retirement = profile.years_to_retirement(today);

    // Timeline start anchors the simulated calendar; the government pension
    // starts a configured number of years later.
    let timeline_start = profile
        .start_date
        .unwrap_or_else(|| jiff::civil::date(today.year(), 1, 1));
    let government_start = add_years(timeline_start, profile.government_retirement_start_years);

    // Align simulated year 0 near the timeline start, reconciling the
    // day-based and year-count-based estimates. The 0.5-year threshold is
    // pinned behavior inherited from the source system.
    let date_based_years = years_between(today, timeline_start);
    let base_year = if (date_based_years - f64::from(years_to_retirement)).abs() > 0.5 {
        i32::from(timeline_start.year()) - date_based_years.trunc() as i32
    } else {
        i32::from(timeline_start.year()) - years_to_retirement
    };

    // Salary runs for a number of years measured from TODAY, not from the
    // timeline start. Intentional; must be preserved.
    let end_of_salary_date = add_years(today, profile.end_of_salary_years);

    let fixed_assets_growth_rate = profile.resolved_fixed_assets_growth_rate();
    let taxable_percentage = profile.resolved_taxable_percentage();
    let monthly_expenses_base = profile.monthly_expenses_base();
    let monthly_return_rate = profile.monthly_return_rate;

    let anchor_month = timeline_start.month();
    let start_year = i32::from(timeline_start.year());

    // Fixed assets never enter the liquid simulation.
    let mut current_value = (profile.total_assets - profile.fixed_assets).max(0.0);
    let mut pending_tax = 0.0;
    let mut projected_monthly_retirement = profile.government_retirement_income;
    let mut retirement_start_fund: Option<f64> = None;
    let mut timeline: Vec<TimelineRow> = Vec::new();

    for y in 0..MAX_SIMULATED_YEARS {
        let age = profile.base_age + y;
        if age > params.target_age {
            break;
        }
        // Depletion is evaluated at year start; the boundary row with a
        // negative final_value was already emitted last iteration.
        if y > 0 && current_value <= 0.0 {
            break;
        }

        let current_year = base_year + y as i32;
        let year_start = jiff::civil::date(current_year as i16, anchor_month, 1);
        let years_since_start = (current_year - start_year).max(0);
        let in_retirement = current_year >= start_year;

        // Capture the fund at the start of the retirement-start year and
        // restart the tax clock, so the first emitted row carries no tax.
        if current_year == start_year && retirement_start_fund.is_none() {
            retirement_start_fund = Some(current_value);
            pending_tax = 0.0;
        }

        // Inflation resets its baseline at retirement start: year 1 of the
        // timeline shows baseline amounts.
        let inflation_years = if in_retirement {
            years_since_start
        } else {
            y as i32
        };
        let inflation = (1.0 + profile.annual_inflation).powi(inflation_years);

        let monthly_expense = monthly_expenses_base * inflation;
        let monthly_one_time = profile.one_time_annual_expense * inflation / 12.0;
        let total_monthly_expense = monthly_expense + monthly_one_time;

        let mut total_expenses_year = 0.0;
        let mut total_income_salary_year = 0.0;
        let mut total_income_retirement_year = 0.0;

        let mut value = current_value;
        for m in 0..12 {
            let month_date = add_months(year_start, m);

            let monthly_salary = if month_date < end_of_salary_date {
                profile.monthly_salary_net * inflation
            } else {
                0.0
            };
            let monthly_retirement_income = if month_date >= government_start {
                projected_monthly_retirement
            } else {
                0.0
            };

            let monthly_net = monthly_salary + monthly_retirement_income - total_monthly_expense;

            // Contributions are added without compounding when the rate is
            // not positive.
            value = if monthly_return_rate > 0.0 {
                value * (1.0 + monthly_return_rate) + monthly_net
            } else {
                value + monthly_net
            };

            total_expenses_year += total_monthly_expense;
            total_income_salary_year += monthly_salary;
            total_income_retirement_year += monthly_retirement_income;
        }

        // Taxes are paid with a one-year lag: this year settles the tax
        // accrued on last year's gains.
        let final_value_before_tax = value;
        let taxes_paid = pending_tax;
        let final_value = final_value_before_tax - taxes_paid;

        let total_to_be_added = final_value_before_tax - current_value;
        let net_cashflow =
            total_income_salary_year + total_income_retirement_year - total_expenses_year;

        if in_retirement {
            let display_start = jiff::civil::date(
                (start_year + years_since_start) as i16,
                anchor_month,
                1,
            );
            let display_end = jiff::civil::date(
                (start_year + years_since_start + 1) as i16,
                anchor_month,
                1,
            );
            timeline.push(TimelineRow {
                year: (years_since_start + 1) as u32,
                age,
                period: period_label(display_start, display_end),
                value_invested: round2(current_value),
                total_expenses: round2(total_expenses_year),
                total_income_salary: round2(total_income_salary_year),
                total_income_retirement: round2(total_income_retirement_year),
                total_to_be_added: round2(total_to_be_added),
                taxes_over_investments: round2(taxes_paid),
                net_cashflow: round2(net_cashflow),
                final_value: round2(final_value),
            });
        }

        // Gain excludes net contributions; tax on it is charged next year.
        let gain = final_value_before_tax - current_value - net_cashflow;
        pending_tax = gain.max(0.0) * profile.investment_tax_rate * taxable_percentage;

        projected_monthly_retirement *= 1.0 + profile.government_retirement_adjustment;
        current_value = final_value;
    }

    let monthly_savings = profile.monthly_salary_net - monthly_expenses_base;
    let total_retirement_fund = retirement_start_fund.unwrap_or(current_value);
    let fixed_assets_at_retirement = profile.fixed_assets
        * (1.0 + fixed_assets_growth_rate).powi(years_to_retirement);

    // Informational only; the simulation above always uses the profile's
    // monthly_return_rate directly.
    let monthly_growth_used = if monthly_return_rate > 0.0 {
        monthly_return_rate
    } else if params.expected_return_rate > 0.0 {
        params.expected_return_rate / 12.0
    } else {
        0.0
    };

    debug!(
        profile_id = profile.id,
        rows = timeline.len(),
        years_to_retirement,
        "projection complete"
    );

    Ok(Calculation {
        profile_id: profile.id,
        monthly_savings,
        total_retirement_fund,
        monthly_retirement_income: profile.government_retirement_income,
        years_to_retirement,
        assumptions: Assumptions {
            expected_return_rate: params.expected_return_rate,
            retirement_duration_years: params.retirement_duration_years,
            inflation_rate: profile.annual_inflation,
            monthly_expenses: monthly_expenses_base,
            monthly_growth_used,
            retirement_start_date: timeline_start,
            end_of_salary_date,
            target_age: params.target_age,
            fixed_assets_at_retirement,
            fixed_assets_growth_rate,
            timeline,
        },
    })
}
