use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrdError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("unrecognized GRD magic {0:?}")]
    Magic([u8; 4]),

    #[error("malformed GRD header, {0}")]
    Header(String),

    #[error("{axis} of {value} does not fit in a DSBB header")]
    Dimension { axis: &'static str, value: usize },

    #[error("expected {expected} samples, found {actual}")]
    Length { expected: usize, actual: usize },

    #[error("unknown GRD format {0}")]
    Format(String),
}
