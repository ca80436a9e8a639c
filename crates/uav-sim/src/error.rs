use thiserror::Error;
use uav_planner::PlannerError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Planner(#[from] PlannerError),
}

pub type SimResult<T> = Result<T, SimError>;
