//! Domain Policies
//!
//! Business rules and thresholds that govern the advisor.
//! These are plain data plus pure predicates over it.

mod industry_standards;

pub use industry_standards::{HingeBand, IndustryStandards};
