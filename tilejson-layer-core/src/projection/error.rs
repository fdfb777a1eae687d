/// A convenience [`Result`] for projection lookups and transforms.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors that can occur when resolving or applying a projection.
#[non_exhaustive]
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProjectionError {
    /// No definition is registered for the code.
    #[error("Projection {0} is not defined")]
    UnknownProjection(String),

    /// The registered definition could not be parsed.
    #[error("Invalid definition of projection {1}: {0}")]
    InvalidDefinition(String, String),

    /// The point could not be transformed between the two projections.
    #[error("Unable to transform point from {1} to {2}: {0}")]
    TransformFailed(String, String, String),
}
