use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One simulated year of the retirement timeline.
///
/// Rows are appended in strictly increasing age order and never mutated.
/// Monetary fields are rounded to 2 decimal places at the point of storage;
/// the simulation itself runs unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineRow {
    /// 1-based index relative to retirement start.
    pub year: u32,
    pub age: u32,
    /// Display label, "MM-YYYY - MM-YYYY".
    pub period: String,
    /// Liquid invested value at the start of the year.
    pub value_invested: f64,
    pub total_expenses: f64,
    pub total_income_salary: f64,
    pub total_income_retirement: f64,
    /// Change in invested value over the year before taxes (returns plus net
    /// contributions).
    pub total_to_be_added: f64,
    /// Tax paid this year on the previous year's investment gains.
    pub taxes_over_investments: f64,
    /// Raw income minus expenses for the year.
    pub net_cashflow: f64,
    /// Value at year end, after this year's deferred tax is paid.
    pub final_value: f64,
}

/// Tunables echoed back with each calculation, plus the derived timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub expected_return_rate: f64,
    pub retirement_duration_years: u32,
    pub inflation_rate: f64,
    /// Recurring monthly expenses (including rent) at today's rates.
    pub monthly_expenses: f64,
    /// Informational only: the monthly rate the caller would expect the
    /// projection to use. The simulation always compounds with the profile's
    /// `monthly_return_rate` directly.
    pub monthly_growth_used: f64,
    pub retirement_start_date: Date,
    pub end_of_salary_date: Date,
    pub target_age: u32,
    /// Fixed assets grown to retirement start; contingency figure only, never
    /// part of the liquid simulation.
    pub fixed_assets_at_retirement: f64,
    pub fixed_assets_growth_rate: f64,
    pub timeline: Vec<TimelineRow>,
}

/// Result of one projection run. Entirely derived from the profile and the
/// tunables; owned by the caller and safe to serialize directly to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub profile_id: u64,
    /// Salary minus recurring expenses at today's rates.
    pub monthly_savings: f64,
    /// Liquid fund value at the retirement-start instant (or the final
    /// simulated value if retirement start was never reached).
    pub total_retirement_fund: f64,
    /// Monthly government pension as configured on the profile.
    pub monthly_retirement_income: f64,
    pub years_to_retirement: i32,
    pub assumptions: Assumptions,
}

impl Calculation {
    /// Age at the first timeline row whose `final_value` is negative, or the
    /// last row's age when no row depletes. `None` when the timeline is
    /// empty (retirement start beyond the simulated horizon).
    pub fn depletion_age(&self) -> Option<u32> {
        let timeline = &self.assumptions.timeline;
        timeline
            .iter()
            .find(|row| row.final_value < 0.0)
            .or(timeline.last())
            .map(|row| row.age)
    }

    /// Final value of the last simulated year, 0.0 when funds depleted or the
    /// timeline is empty.
    pub fn leftover_funds(&self) -> f64 {
        let timeline = &self.assumptions.timeline;
        if timeline.iter().any(|row| row.final_value < 0.0) {
            return 0.0;
        }
        timeline.last().map_or(0.0, |row| row.final_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn row(age: u32, final_value: f64) -> TimelineRow {
        TimelineRow {
            year: age - 64,
            age,
            period: String::new(),
            value_invested: 0.0,
            total_expenses: 0.0,
            total_income_salary: 0.0,
            total_income_retirement: 0.0,
            total_to_be_added: 0.0,
            taxes_over_investments: 0.0,
            net_cashflow: 0.0,
            final_value,
        }
    }

    fn calculation(timeline: Vec<TimelineRow>) -> Calculation {
        Calculation {
            profile_id: 1,
            monthly_savings: 0.0,
            total_retirement_fund: 0.0,
            monthly_retirement_income: 0.0,
            years_to_retirement: 0,
            assumptions: Assumptions {
                expected_return_rate: 0.07,
                retirement_duration_years: 25,
                inflation_rate: 0.0,
                monthly_expenses: 0.0,
                monthly_growth_used: 0.0,
                retirement_start_date: date(2025, 1, 1),
                end_of_salary_date: date(2025, 1, 1),
                target_age: 100,
                fixed_assets_at_retirement: 0.0,
                fixed_assets_growth_rate: 0.04,
                timeline,
            },
        }
    }

    #[test]
    fn test_depletion_age_first_negative_row() {
        let calc = calculation(vec![row(65, 100.0), row(66, -5.0), row(67, -50.0)]);
        assert_eq!(calc.depletion_age(), Some(66));
        assert_eq!(calc.leftover_funds(), 0.0);
    }

    #[test]
    fn test_depletion_age_last_row_when_solvent() {
        let calc = calculation(vec![row(65, 100.0), row(66, 90.0)]);
        assert_eq!(calc.depletion_age(), Some(66));
        assert_eq!(calc.leftover_funds(), 90.0);
    }

    #[test]
    fn test_depletion_age_empty_timeline() {
        let calc = calculation(vec![]);
        assert_eq!(calc.depletion_age(), None);
        assert_eq!(calc.leftover_funds(), 0.0);
    }
}
