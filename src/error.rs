/// Errors raised while sampling a gradient or building a colormap.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GradientError {
    /// The [`StopSet`](crate::StopSet) has no stop, so no color can be
    /// interpolated.  No default color is made up.
    #[error("the gradient has no color stop")]
    EmptyGradient,
    /// An element of an anchor list is not a number.
    #[error("anchor #{index} “{text}” is not a number")]
    InvalidAnchor { index: usize, text: String },
}

pub type Result<T> = std::result::Result<T, GradientError>;
