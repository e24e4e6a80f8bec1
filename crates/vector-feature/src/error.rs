//! Error types for feature mutation.

use thiserror::Error;

/// Error returned by the fallible feature setters.
///
/// The core model accepts every geometry and identifier, so these variants
/// are produced only by format-specific feature implementations layered on
/// top; the setter signatures keep the failure channel open for them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// The geometry type is not allowed by the feature's schema.
    #[error("geometry type {geometry} is not allowed by schema {schema}")]
    GeometryTypeMismatch {
        schema: String,
        geometry: &'static str,
    },

    /// The identifier is rejected by the target format.
    ///
    /// Ids should be zero or greater, with [`NULL_FID`](crate::NULL_FID)
    /// meaning unassigned.
    #[error("invalid feature id: {fid}")]
    InvalidFid { fid: i64 },
}
