//! Integration tests for the projection core
//!
//! Tests are organized by topic:
//! - `projection` - Engine mechanics: timeline shape, tax lag, depletion
//! - `scenario` - Lever solving and compound scenario evaluation
//! - `readiness` - Scoring and recommendations
//! - `properties` - Proptest monotonicity and idempotence properties
//! - `serialization` - JSON shape of the public value objects

pub(crate) mod fixtures;
