use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};

/// Annual growth applied to fixed assets when the profile does not carry an
/// explicit (non-zero) rate.
pub const DEFAULT_FIXED_ASSETS_GROWTH_RATE: f64 = 0.04;

/// Fraction of investment gains subject to tax when the profile does not
/// carry an explicit value.
pub const DEFAULT_TAXABLE_PERCENTAGE: f64 = 1.0;

/// A financial profile as supplied by the external profile store.
///
/// All rates are decimals (0.005 = 0.5%). Monetary amounts share one implied
/// currency. `fixed_assets ≤ total_assets` is expected but not re-validated
/// here; that contract belongs to the collaborator that persists profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Opaque identifier, echoed into every derived `Calculation`.
    pub id: u64,
    /// Current age in whole years.
    pub base_age: u32,
    /// Explicit retirement-timeline start date, when known.
    #[serde(default)]
    pub start_date: Option<Date>,
    /// Years from today until salary stops.
    pub end_of_salary_years: i32,
    /// Years from the timeline start until the government pension begins.
    pub government_retirement_start_years: i32,
    pub total_assets: f64,
    /// Non-liquid portion of `total_assets` (property and similar).
    pub fixed_assets: f64,
    pub monthly_salary_net: f64,
    /// Expected monthly government pension, net of taxes.
    pub government_retirement_income: f64,
    pub monthly_expense_recurring: f64,
    pub rent: f64,
    pub one_time_annual_expense: f64,
    pub monthly_return_rate: f64,
    pub investment_tax_rate: f64,
    pub annual_inflation: f64,
    /// Annual COLA applied to the government pension.
    pub government_retirement_adjustment: f64,
    #[serde(default)]
    pub fixed_assets_growth_rate: Option<f64>,
    #[serde(default)]
    pub investment_taxable_percentage: Option<f64>,
}

impl Profile {
    /// Reject non-finite numeric fields with an error naming the field.
    ///
    /// Degenerate but finite values (zero income, zero assets) are valid
    /// input and are not rejected here.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("total_assets", self.total_assets),
            ("fixed_assets", self.fixed_assets),
            ("monthly_salary_net", self.monthly_salary_net),
            (
                "government_retirement_income",
                self.government_retirement_income,
            ),
            ("monthly_expense_recurring", self.monthly_expense_recurring),
            ("rent", self.rent),
            ("one_time_annual_expense", self.one_time_annual_expense),
            ("monthly_return_rate", self.monthly_return_rate),
            ("investment_tax_rate", self.investment_tax_rate),
            ("annual_inflation", self.annual_inflation),
            (
                "government_retirement_adjustment",
                self.government_retirement_adjustment,
            ),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ProfileError::InvalidField { field });
            }
        }
        if let Some(rate) = self.fixed_assets_growth_rate
            && !rate.is_finite()
        {
            return Err(ProfileError::InvalidField {
                field: "fixed_assets_growth_rate",
            });
        }
        if let Some(pct) = self.investment_taxable_percentage
            && !pct.is_finite()
        {
            return Err(ProfileError::InvalidField {
                field: "investment_taxable_percentage",
            });
        }
        Ok(())
    }

    /// Years until retirement, resolved in priority order: explicit start
    /// date (calendar-year difference from today, floored at 0), then the
    /// explicit year count when positive, then 0.
    pub fn years_to_retirement(&self, today: Date) -> i32 {
        if let Some(start) = self.start_date {
            return (i32::from(start.year()) - i32::from(today.year())).max(0);
        }
        if self.government_retirement_start_years > 0 {
            return self.government_retirement_start_years;
        }
        0
    }

    /// Recurring monthly outflow at today's rates (expenses plus rent).
    pub fn monthly_expenses_base(&self) -> f64 {
        self.monthly_expense_recurring + self.rent
    }

    /// Fixed-asset growth rate with the documented 4% fallback. A zero rate
    /// is treated as absent, matching the source system.
    pub fn resolved_fixed_assets_growth_rate(&self) -> f64 {
        self.fixed_assets_growth_rate
            .filter(|r| *r != 0.0)
            .unwrap_or(DEFAULT_FIXED_ASSETS_GROWTH_RATE)
    }

    /// Taxable share of gains, defaulting to fully taxable when absent.
    pub fn resolved_taxable_percentage(&self) -> f64 {
        self.investment_taxable_percentage
            .unwrap_or(DEFAULT_TAXABLE_PERCENTAGE)
    }
}
