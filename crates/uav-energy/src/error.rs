use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnergyError {
    #[error("aerodynamic config is missing `{0}`")]
    MissingKey(&'static str),

    #[error("aerodynamic config value `{key}` = {value} is out of range")]
    InvalidValue { key: &'static str, value: f64 },
}

pub type EnergyResult<T> = Result<T, EnergyError>;
