//! Retirement projection and scenario-solving library
//!
//! This crate projects an individual's investable wealth year by year from
//! today until a target age and answers what-if questions about it:
//! - Deterministic projection engine with monthly compounding, inflation
//!   scaling, a government pension with COLA, and a one-year capital-gains
//!   tax lag
//! - Scenario solver: bounded binary search for the minimal lever change
//!   (work longer, spend less, sell assets, higher return) that makes funds
//!   last to a target age
//! - Readiness scoring with textual recommendations
//!
//! Every computation is a synchronous pure function of its inputs; "today"
//! is injected explicitly so results are reproducible.
//!
//! ```ignore
//! use glidepath_core::{project, ProjectionParams};
//!
//! let params = ProjectionParams::default();
//! let today = jiff::civil::date(2025, 6, 15);
//! let calculation = project(&profile, &params, today)?;
//! for row in &calculation.assumptions.timeline {
//!     println!("{} age {}: {:.2}", row.period, row.age, row.final_value);
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod date_math;
pub mod error;
pub mod projection;
pub mod readiness;
pub mod scenario;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::ProfileError;
pub use model::{Assumptions, Calculation, Profile, TimelineRow};
pub use projection::{ProjectionParams, project, project_at_today};
pub use readiness::{ReadinessReport, RequiredSavings, required_savings, score};
pub use scenario::{
    ScenarioAdjustments, ScenarioOutcome, evaluate_combined, solve_asset_sale,
    solve_expense_reduction, solve_return_rate, solve_work_years,
};
