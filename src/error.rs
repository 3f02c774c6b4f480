use thiserror::Error;

pub type ThermometerResult<T> = Result<T, ThermometerError>;

#[derive(Debug, Error, PartialEq)]
pub enum ThermometerError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("thermometer has not been rendered yet")]
    NotRendered,

    #[error("container `{container}` cannot host a thermometer surface")]
    ContainerNotFound { container: String },

    #[error("no thermometer surface is mounted in container `{container}`")]
    NotMounted { container: String },

    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    #[error("json: {0}")]
    Json(String),
}
