//! In-memory vector feature model.
//!
//! A *feature* is one record of a vector layer: an attribute array whose
//! field layout is dictated by a shared [`Schema`], an optional owned
//! [`Geometry`], and an integer identifier. This crate is the
//! representation every vector-format reader and writer in the
//! surrounding system produces, consumes, and mutates; it holds one
//! record in memory and does not parse or write any on-disk format.
//!
//! # Quick Start
//!
//! ```rust
//! use vector_feature::{Coord, Feature, FieldType, Geometry, Schema};
//!
//! let schema = Schema::builder("wells")
//!     .field("name", FieldType::String)
//!     .field("depth_m", FieldType::Real)
//!     .build();
//!
//! let mut well = Feature::new(&schema);
//! well.set_fid(17)?;
//! well.set_field_string(0, "Deep Creek 3");
//! well.set_field_double(1, 181.25);
//! well.set_geometry(Geometry::Point(Coord::new(-120.4, 46.1)))?;
//!
//! // Getters coerce between the supported types.
//! assert_eq!(well.field_as_string(1), "181.25");
//! assert_eq!(well.field_as_integer(1), 181);
//! # Ok::<(), vector_feature::FeatureError>(())
//! ```
//!
//! # Modules
//!
//! - [`model`]: schema, field, geometry and feature types
//! - [`util`]: numeric text conversion rules shared by the accessors
//! - [`error`]: error types
//!
//! # Ownership
//!
//! A feature exclusively owns its string buffers and its geometry; only
//! the schema is shared, through the counted [`SchemaRef`] handle. The
//! count is not atomic; features and their schemas stay on one thread.
//!
//! # Coercion
//!
//! Field getters and setters never fail. Each accessor coerces between
//! the integer, real and string representations under fixed, lossy rules
//! (truncation toward zero, leading-prefix parsing, six-significant-digit
//! float text); combinations involving the reserved list and wide-string
//! types silently read as zero and write as no-ops. An out-of-range field
//! index is a caller defect and panics.

pub mod error;
pub mod model;
pub mod util;

// Re-export commonly used types at crate root
pub use error::FeatureError;
pub use model::{
    Coord, Feature, FieldDef, FieldType, FieldValue, Geometry, Schema, SchemaBuilder, SchemaRef,
    NULL_FID,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
