//! Value objects exchanged with the projection engine.
//!
//! A [`Profile`] is owned by the caller (typically a profile store) and is
//! never mutated by the core; the scenario solver works on clones. A
//! [`Calculation`] is derived fresh on every projection and is safe to
//! serialize straight to JSON.

mod calculation;
mod profile;

pub use calculation::{Assumptions, Calculation, TimelineRow};
pub use profile::{Profile, DEFAULT_FIXED_ASSETS_GROWTH_RATE, DEFAULT_TAXABLE_PERCENTAGE};
