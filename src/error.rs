use thiserror::Error;

pub type VizResult<T> = Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("statistics requested on an empty input")]
    EmptyInput,

    #[error("projection domain requested on an empty value set")]
    EmptyDomain,

    #[error("input sequences differ in length: left={left}, right={right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("unknown metric key: `{0}`")]
    UnknownMetric(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
