use thiserror::Error;

/// Top-level error type for the billiard core.
#[derive(Debug, Error)]
pub enum Error {
    /// A curve was evaluated outside its parameter domain.
    #[error("parameter t = {t} is outside [0, 1]")]
    ParameterOutOfRange { t: f64 },

    /// A direction was requested from a zero-length vector
    /// (degenerate segment, collapsed Bézier control points, ...).
    #[error("zero-length vector has no direction")]
    ZeroVector,

    /// A world document names a curve class this crate does not know.
    #[error("unrecognized curve class `{0}`")]
    UnknownCurveClass(String),

    /// A world document carries the wrong class tag for its position
    /// (e.g. a curve object inside the `balls` array).
    #[error("expected class `{expected}`, found `{found}`")]
    UnexpectedClass {
        expected: &'static str,
        found: String,
    },

    /// The world document is not structurally valid JSON for the format.
    #[error("malformed world document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Convenience alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
