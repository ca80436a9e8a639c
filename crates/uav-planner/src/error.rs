//! Planner error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("unknown policy `{0}` (expected one of RR, MAF, AWN)")]
    UnknownPolicy(String),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
