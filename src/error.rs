use thiserror::Error;

pub type RadarResult<T> = Result<T, RadarError>;

#[derive(Debug, Error)]
pub enum RadarError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("degenerate axis value range: [{min}, {max}]")]
    DegenerateRange { min: f64, max: f64 },

    #[error(
        "mismatched document lengths: data={data}, databounds={databounds}, labels={labels}"
    )]
    LengthMismatch {
        data: usize,
        databounds: usize,
        labels: usize,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
