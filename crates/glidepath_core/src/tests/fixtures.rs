//! Shared profile fixtures. Every test injects the same fixed "today" so
//! results never depend on the wall clock.

use jiff::civil::{Date, date};

use crate::model::Profile;

pub(crate) fn today() -> Date {
    date(2025, 6, 15)
}

/// Mid-career saver: 20 years of salary ahead, pension at retirement start.
pub(crate) fn standard_profile() -> Profile {
    Profile {
        id: 1,
        base_age: 40,
        start_date: None,
        end_of_salary_years: 20,
        government_retirement_start_years: 20,
        total_assets: 100_000.0,
        fixed_assets: 20_000.0,
        monthly_salary_net: 5_000.0,
        government_retirement_income: 3_000.0,
        monthly_expense_recurring: 2_000.0,
        rent: 500.0,
        one_time_annual_expense: 1_200.0,
        monthly_return_rate: 0.005,
        investment_tax_rate: 0.15,
        annual_inflation: 0.03,
        government_retirement_adjustment: 0.02,
        fixed_assets_growth_rate: Some(0.04),
        investment_taxable_percentage: Some(1.0),
    }
}

/// Pure drawdown: already retired at 60, no income of any kind, spending
/// 4000/month out of 100k at 0.5% monthly growth. No inflation, no tax.
pub(crate) fn drawdown_profile() -> Profile {
    Profile {
        id: 2,
        base_age: 60,
        start_date: None,
        end_of_salary_years: 0,
        government_retirement_start_years: 0,
        total_assets: 100_000.0,
        fixed_assets: 0.0,
        monthly_salary_net: 5_000.0,
        government_retirement_income: 0.0,
        monthly_expense_recurring: 4_000.0,
        rent: 0.0,
        one_time_annual_expense: 0.0,
        monthly_return_rate: 0.005,
        investment_tax_rate: 0.0,
        annual_inflation: 0.0,
        government_retirement_adjustment: 0.0,
        fixed_assets_growth_rate: None,
        investment_taxable_percentage: None,
    }
}

/// Zero rate, zero net cash flow: final_value must stay flat.
pub(crate) fn flat_profile() -> Profile {
    Profile {
        id: 3,
        base_age: 60,
        start_date: None,
        end_of_salary_years: 0,
        government_retirement_start_years: 0,
        total_assets: 50_000.0,
        fixed_assets: 0.0,
        monthly_salary_net: 0.0,
        government_retirement_income: 1_000.0,
        monthly_expense_recurring: 1_000.0,
        rent: 0.0,
        one_time_annual_expense: 0.0,
        monthly_return_rate: 0.0,
        investment_tax_rate: 0.0,
        annual_inflation: 0.0,
        government_retirement_adjustment: 0.0,
        fixed_assets_growth_rate: None,
        investment_taxable_percentage: None,
    }
}
