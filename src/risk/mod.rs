//! Failure-probability scoring.

mod engine;

pub use engine::{
    score, RiskAssessment, RiskBreakdown, RiskEngine, RiskLevel, MAX_PROBABILITY,
};
