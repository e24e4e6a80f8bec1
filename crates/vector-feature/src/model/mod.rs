//! Data model types for vector features.
//!
//! This module contains the core types for representing one feature:
//! - Schema snapshots ([`Schema`], [`SchemaRef`], [`FieldDef`])
//! - Tagged field slots ([`FieldType`], [`FieldValue`])
//! - Geometry values ([`Geometry`], [`Coord`])
//! - The feature record itself ([`Feature`])

pub mod feature;
pub mod field;
pub mod geometry;
pub mod schema;

pub use feature::{Feature, NULL_FID};
pub use field::{FieldType, FieldValue};
pub use geometry::{Coord, Geometry};
pub use schema::{FieldDef, Schema, SchemaBuilder, SchemaRef};
