use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("plane fit needs at least 3 points, got {0}")]
    NotEnoughPoints(usize),

    #[error("point set is degenerate (coincident or collinear), no unique plane")]
    DegeneratePointSet,
}

pub type GeometryResult<T> = Result<T, GeometryError>;
