//! What-if scenario solving over the projection engine.
//!
//! Each lever (extra work years, expense cut, fixed-asset sale, return-rate
//! override) maps a value onto a mutated copy of the profile; a bounded
//! binary search then finds the minimal value whose projection keeps funds
//! intact to the target age. The search assumes the depletion age is
//! monotonically non-decreasing in the lever value — an implementer
//! obligation for any new lever, confirmed by property tests rather than
//! checked at runtime.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::Result;
use crate::model::{Calculation, Profile};
use crate::projection::{ProjectionParams, project};

/// Search ceiling for additional salary years.
pub const MAX_EXTRA_WORK_YEARS: u32 = 50;
/// Search ceiling for percentage levers.
pub const MAX_PERCENT: u32 = 100;
/// Search ceiling for the return-rate lever, in monthly basis points (500 bp
/// = 5% per month, the largest rate the profile store accepts).
pub const MAX_RETURN_RATE_BASIS_POINTS: u32 = 500;

/// Already-applied profile modifications, for compounded "given X, then Y"
/// questions. Applied to a working copy before any lever search begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAdjustments {
    /// Extra years of salary, added to `end_of_salary_years`.
    pub extra_work_years: Option<u32>,
    /// Percentage cut of recurring and one-time expenses (rent untouched).
    pub expense_reduction_percent: Option<f64>,
    /// Percentage of fixed assets liquidated.
    pub fixed_asset_sale_percent: Option<f64>,
    /// Direct override of the monthly return rate.
    pub monthly_return_rate: Option<f64>,
}

impl ScenarioAdjustments {
    /// Produce a mutated clone; the input profile is never touched.
    pub fn apply(&self, profile: &Profile) -> Profile {
        let mut adjusted = profile.clone();
        if let Some(years) = self.extra_work_years {
            adjusted.end_of_salary_years += years as i32;
        }
        if let Some(pct) = self.expense_reduction_percent {
            let factor = 1.0 - pct / 100.0;
            adjusted.monthly_expense_recurring *= factor;
            adjusted.one_time_annual_expense *= factor;
        }
        if let Some(pct) = self.fixed_asset_sale_percent {
            // total_assets already includes fixed assets, so only
            // fixed_assets shrinks: the sold share moves into the liquid
            // pool. Reducing both would double count.
            adjusted.fixed_assets *= 1.0 - pct / 100.0;
        }
        if let Some(rate) = self.monthly_return_rate {
            adjusted.monthly_return_rate = rate;
        }
        adjusted
    }
}

/// Result of one scenario query, shaped for direct embedding as a tool-call
/// result. `description` is the only locale-sensitive field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Minimal sufficient lever value, `None` when infeasible or when no
    /// search was performed.
    pub lever_value_needed: Option<f64>,
    pub target_age: u32,
    /// Depletion age of the winning (or combined) projection.
    pub final_age: Option<u32>,
    pub achievable: bool,
    pub description: String,
}

/// Binary search for the minimal lever value in `lo..=hi` whose predicate
/// holds. The predicate must be monotone: false below some threshold, true
/// at and above it.
fn solve_minimal_lever<F>(lo: u32, hi: u32, mut meets_target: F) -> Result<Option<u32>>
where
    F: FnMut(u32) -> Result<bool>,
{
    let (mut lo, mut hi) = (lo, hi);
    let mut candidate = None;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let meets = meets_target(mid)?;
        trace!(mid, meets, "lever midpoint evaluated");
        if meets {
            candidate = Some(mid);
            if mid == 0 {
                break;
            }
            hi = mid - 1;
        } else {
            lo = mid + 1;
        }
    }
    Ok(candidate)
}

/// Depletion age of the projection for a lever-mutated profile.
fn depletion_age_for(
    profile: &Profile,
    params: &ProjectionParams,
    today: Date,
) -> Result<Option<u32>> {
    let calculation = project(profile, params, today)?;
    Ok(calculation.depletion_age())
}

fn meets(depletion_age: Option<u32>, target_age: u32) -> bool {
    depletion_age.is_some_and(|age| age >= target_age)
}

struct LeverSearch<'a> {
    base: Profile,
    params: &'a ProjectionParams,
    today: Date,
    target_age: u32,
}

impl LeverSearch<'_> {
    /// Projection tunables with the horizon stretched to the solve target.
    /// A timeline truncated below the target would make every solvent
    /// profile look infeasible.
    fn effective_params(&self) -> ProjectionParams {
        ProjectionParams {
            target_age: self.params.target_age.max(self.target_age),
            ..*self.params
        }
    }

    /// Run the search for one lever and shape the outcome. `mutate` maps a
    /// lever value onto a profile copy; `report` converts the winning
    /// integer into the reported lever value; the three description closures
    /// cover the met/already-met/infeasible cases.
    fn run(
        &self,
        hi: u32,
        mutate: impl Fn(&Profile, u32) -> Profile,
        report: impl Fn(u32) -> f64,
        describe_met: impl Fn(u32, u32) -> String,
        describe_already_met: impl Fn(u32) -> String,
        describe_infeasible: impl Fn() -> String,
    ) -> Result<ScenarioOutcome> {
        let params = self.effective_params();
        let candidate = solve_minimal_lever(0, hi, |value| {
            let adjusted = mutate(&self.base, value);
            Ok(meets(
                depletion_age_for(&adjusted, &params, self.today)?,
                self.target_age,
            ))
        })?;

        match candidate {
            Some(value) => {
                let adjusted = mutate(&self.base, value);
                let final_age = depletion_age_for(&adjusted, &params, self.today)?;
                let description = if value == 0 {
                    describe_already_met(final_age.unwrap_or(self.target_age))
                } else {
                    describe_met(value, final_age.unwrap_or(self.target_age))
                };
                Ok(ScenarioOutcome {
                    lever_value_needed: Some(report(value)),
                    target_age: self.target_age,
                    final_age,
                    achievable: true,
                    description,
                })
            }
            None => {
                let final_age = depletion_age_for(&self.base, &params, self.today)?;
                Ok(ScenarioOutcome {
                    lever_value_needed: None,
                    target_age: self.target_age,
                    final_age,
                    achievable: false,
                    description: describe_infeasible(),
                })
            }
        }
    }
}

/// Minimal number of additional salary years (0-50) that keeps funds intact
/// to `target_age`, given any already-applied adjustments.
pub fn solve_work_years(
    profile: &Profile,
    params: &ProjectionParams,
    today: Date,
    target_age: u32,
    adjustments: &ScenarioAdjustments,
) -> Result<ScenarioOutcome> {
    let search = LeverSearch {
        base: adjustments.apply(profile),
        params,
        today,
        target_age,
    };
    search.run(
        MAX_EXTRA_WORK_YEARS,
        |base, years| {
            let mut adjusted = base.clone();
            adjusted.end_of_salary_years += years as i32;
            adjusted
        },
        f64::from,
        |years, final_age| {
            format!(
                "Working {years} additional year(s) keeps funds intact to age {final_age} \
                 (target {target_age})."
            )
        },
        |final_age| {
            format!(
                "Target age {target_age} is already met without additional work years; \
                 funds last to age {final_age}."
            )
        },
        || {
            format!(
                "No amount of additional work years (0-{MAX_EXTRA_WORK_YEARS}) makes funds \
                 last to age {target_age}."
            )
        },
    )
}

/// Minimal expense-reduction percentage (0-100) that keeps funds intact to
/// `target_age`. Rent is not reduced.
pub fn solve_expense_reduction(
    profile: &Profile,
    params: &ProjectionParams,
    today: Date,
    target_age: u32,
    adjustments: &ScenarioAdjustments,
) -> Result<ScenarioOutcome> {
    let search = LeverSearch {
        base: adjustments.apply(profile),
        params,
        today,
        target_age,
    };
    search.run(
        MAX_PERCENT,
        |base, pct| {
            let mut adjusted = base.clone();
            let factor = 1.0 - f64::from(pct) / 100.0;
            adjusted.monthly_expense_recurring *= factor;
            adjusted.one_time_annual_expense *= factor;
            adjusted
        },
        f64::from,
        |pct, final_age| {
            format!(
                "Cutting recurring expenses by {pct}% keeps funds intact to age {final_age} \
                 (target {target_age})."
            )
        },
        |final_age| {
            format!(
                "Target age {target_age} is already met without cutting expenses; \
                 funds last to age {final_age}."
            )
        },
        || {
            format!(
                "No expense reduction (0-{MAX_PERCENT}%) makes funds last to age {target_age}."
            )
        },
    )
}

/// Minimal percentage of fixed assets (0-100) to liquidate so that funds
/// last to `target_age`.
pub fn solve_asset_sale(
    profile: &Profile,
    params: &ProjectionParams,
    today: Date,
    target_age: u32,
    adjustments: &ScenarioAdjustments,
) -> Result<ScenarioOutcome> {
    let search = LeverSearch {
        base: adjustments.apply(profile),
        params,
        today,
        target_age,
    };
    search.run(
        MAX_PERCENT,
        |base, pct| {
            let mut adjusted = base.clone();
            adjusted.fixed_assets *= 1.0 - f64::from(pct) / 100.0;
            adjusted
        },
        f64::from,
        |pct, final_age| {
            format!(
                "Selling {pct}% of fixed assets keeps funds intact to age {final_age} \
                 (target {target_age})."
            )
        },
        |final_age| {
            format!(
                "Target age {target_age} is already met without selling fixed assets; \
                 funds last to age {final_age}."
            )
        },
        || {
            format!(
                "Selling fixed assets (0-{MAX_PERCENT}%) cannot make funds last to age \
                 {target_age}."
            )
        },
    )
}

/// Minimal monthly return rate (searched on a basis-point grid, 0-500 bp)
/// that keeps funds intact to `target_age`. Reported as a decimal rate.
pub fn solve_return_rate(
    profile: &Profile,
    params: &ProjectionParams,
    today: Date,
    target_age: u32,
    adjustments: &ScenarioAdjustments,
) -> Result<ScenarioOutcome> {
    let search = LeverSearch {
        base: adjustments.apply(profile),
        params,
        today,
        target_age,
    };
    let rate_of = |bp: u32| f64::from(bp) / 10_000.0;
    search.run(
        MAX_RETURN_RATE_BASIS_POINTS,
        move |base, bp| {
            let mut adjusted = base.clone();
            adjusted.monthly_return_rate = rate_of(bp);
            adjusted
        },
        rate_of,
        move |bp, final_age| {
            format!(
                "A monthly return rate of {:.4} keeps funds intact to age {final_age} \
                 (target {target_age}).",
                rate_of(bp)
            )
        },
        |final_age| {
            format!(
                "Target age {target_age} is already met even with a zero return rate; \
                 funds last to age {final_age}."
            )
        },
        || {
            format!(
                "No monthly return rate up to {:.2} makes funds last to age {target_age}.",
                f64::from(MAX_RETURN_RATE_BASIS_POINTS) / 10_000.0
            )
        },
    )
}

/// Apply every named change at once and project a single time — the
/// non-searching variant for compound scenario evaluation.
pub fn evaluate_combined(
    profile: &Profile,
    params: &ProjectionParams,
    today: Date,
    target_age: u32,
    adjustments: &ScenarioAdjustments,
) -> Result<ScenarioOutcome> {
    let adjusted = adjustments.apply(profile);
    // Same horizon rule as the lever search: the projection must reach the
    // target age for the depletion comparison to be meaningful.
    let effective = ProjectionParams {
        target_age: params.target_age.max(target_age),
        ..*params
    };
    let calculation: Calculation = project(&adjusted, &effective, today)?;
    let final_age = calculation.depletion_age();
    let achievable = meets(final_age, target_age);
    let description = match final_age {
        Some(age) if achievable => {
            format!("With the requested changes applied, funds last to age {age} (target {target_age}).")
        }
        Some(age) => {
            format!(
                "Even with the requested changes applied, funds deplete at age {age} \
                 (target {target_age})."
            )
        }
        None => format!(
            "The projection produced no retirement years to evaluate against target age \
             {target_age}."
        ),
    };
    Ok(ScenarioOutcome {
        lever_value_needed: None,
        target_age,
        final_age,
        achievable,
        description,
    })
}
