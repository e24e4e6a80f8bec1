//! The feature record: a schema-typed attribute array, an optional owned
//! geometry, and an integer identifier.

use std::fmt::{self, Write};
use std::rc::Rc;

use crate::error::FeatureError;
use crate::model::field::FieldValue;
use crate::model::geometry::Geometry;
use crate::model::schema::{FieldDef, Schema, SchemaRef};
use crate::util::numeric::{format_general, parse_integer_prefix, parse_real_prefix};

/// Identifier value meaning "no id assigned".
pub const NULL_FID: i64 = -1;

/// One record of a vector layer.
///
/// A feature holds a counted reference to the [`Schema`] it was created
/// against. Its attribute array always has one slot per schema field, and
/// each slot's tag matches the schema's type at that index. The feature
/// exclusively owns its string buffers and its geometry; only the schema
/// is shared.
///
/// Format readers fill features through the typed setters; consumers read
/// them back through the coercing getters, which never fail: unsupported
/// type combinations read as zero or empty and write as no-ops.
#[derive(Debug)]
pub struct Feature {
    schema: SchemaRef,
    fid: i64,
    fields: Vec<FieldValue>,
    geometry: Option<Geometry>,
}

impl Feature {
    /// Creates a feature bound to a schema snapshot.
    ///
    /// Every slot starts zero-initialized (0, 0.0, unset string, empty
    /// list). Schema-declared defaults, where a format has them, are the
    /// reader's job to apply.
    pub fn new(schema: &SchemaRef) -> Feature {
        Feature {
            schema: Rc::clone(schema),
            fid: NULL_FID,
            fields: schema
                .fields()
                .iter()
                .map(|def| FieldValue::zeroed(def.field_type()))
                .collect(),
            geometry: None,
        }
    }

    /// Returns the schema handle this feature adheres to.
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Returns the number of attribute fields (always the schema's count).
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns the field definition at `index`.
    ///
    /// Panics when `index` is out of range, as do all field accessors;
    /// an out-of-range index is a caller defect.
    pub fn field_def(&self, index: usize) -> &FieldDef {
        self.schema.field(index)
    }

    /// Looks up a field index by name (cover for [`Schema::field_index`]).
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.schema.field_index(name)
    }

    /// Returns a read-only view of the raw slot value at `index`.
    pub fn raw_field(&self, index: usize) -> &FieldValue {
        &self.fields[index]
    }

    // =========================================================================
    // Identifier
    // =========================================================================

    /// Returns the feature id, or [`NULL_FID`] when unassigned.
    pub fn fid(&self) -> i64 {
        self.fid
    }

    /// Returns whether an id has been assigned.
    pub fn has_fid(&self) -> bool {
        self.fid != NULL_FID
    }

    /// Assigns the feature id.
    ///
    /// Always succeeds here. Format-specific features may reject ids that
    /// are negative without being [`NULL_FID`], hence the `Result`.
    pub fn set_fid(&mut self, fid: i64) -> Result<(), FeatureError> {
        self.fid = fid;
        Ok(())
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Sets the geometry, taking ownership.
    ///
    /// Any previous geometry is dropped first. Whether the geometry type
    /// is legal for the schema is not verified yet.
    pub fn set_geometry(&mut self, geometry: Geometry) -> Result<(), FeatureError> {
        self.geometry = Some(geometry);
        Ok(())
    }

    /// Sets the geometry to a deep copy of `geometry`; the caller keeps
    /// its own instance.
    ///
    /// Any previous geometry is dropped first. Whether the geometry type
    /// is legal for the schema is not verified yet.
    pub fn set_geometry_copy(&mut self, geometry: &Geometry) -> Result<(), FeatureError> {
        self.geometry = Some(geometry.clone());
        Ok(())
    }

    /// Borrows the geometry, if any.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Transfers the owned geometry out of the feature, leaving none.
    pub fn take_geometry(&mut self) -> Option<Geometry> {
        self.geometry.take()
    }

    // =========================================================================
    // Typed field access
    // =========================================================================

    /// Reads the field at `index` as an integer.
    ///
    /// Real fields truncate toward zero. String fields parse a leading
    /// integer prefix; an unset or unparsable string reads as 0, as do
    /// unsupported field types.
    pub fn field_as_integer(&self, index: usize) -> i64 {
        match &self.fields[index] {
            FieldValue::Integer(v) => *v,
            FieldValue::Real(v) => *v as i64,
            FieldValue::Str(s) => s.as_deref().map_or(0, parse_integer_prefix),
            _ => 0,
        }
    }

    /// Reads the field at `index` as a double.
    ///
    /// Integer fields widen. String fields parse a leading floating-point
    /// prefix; an unset or unparsable string reads as 0.0, as do
    /// unsupported field types.
    pub fn field_as_double(&self, index: usize) -> f64 {
        match &self.fields[index] {
            FieldValue::Real(v) => *v,
            FieldValue::Integer(v) => *v as f64,
            FieldValue::Str(s) => s.as_deref().map_or(0.0, parse_real_prefix),
            _ => 0.0,
        }
    }

    /// Reads the field at `index` as text, returned as a fresh owned
    /// string.
    ///
    /// Integer fields format in decimal; real fields use the general
    /// six-significant-digit form, so the text is not round-trip exact.
    /// Unset string fields and unsupported field types read as `""`.
    pub fn field_as_string(&self, index: usize) -> String {
        match &self.fields[index] {
            FieldValue::Str(s) => s.clone().unwrap_or_default(),
            FieldValue::Integer(v) => v.to_string(),
            FieldValue::Real(v) => format_general(*v),
            _ => String::new(),
        }
    }

    /// Sets the field at `index` from an integer.
    ///
    /// Real fields widen; string fields replace their buffer with the
    /// decimal text; unsupported field types are left untouched.
    pub fn set_field_integer(&mut self, index: usize, value: i64) {
        match &mut self.fields[index] {
            FieldValue::Integer(slot) => *slot = value,
            FieldValue::Real(slot) => *slot = value as f64,
            FieldValue::Str(slot) => *slot = Some(value.to_string()),
            _ => {}
        }
    }

    /// Sets the field at `index` from a double.
    ///
    /// Integer fields truncate toward zero; string fields replace their
    /// buffer with the general-form text; unsupported field types are
    /// left untouched.
    pub fn set_field_double(&mut self, index: usize, value: f64) {
        match &mut self.fields[index] {
            FieldValue::Real(slot) => *slot = value,
            FieldValue::Integer(slot) => *slot = value as i64,
            FieldValue::Str(slot) => *slot = Some(format_general(value)),
            _ => {}
        }
    }

    /// Sets the field at `index` from text.
    ///
    /// String fields replace their buffer with a fresh copy. Integer and
    /// real fields parse a leading numeric prefix (unparsable text stores
    /// zero); unsupported field types are left untouched.
    pub fn set_field_string(&mut self, index: usize, value: &str) {
        match &mut self.fields[index] {
            FieldValue::Str(slot) => *slot = Some(value.to_owned()),
            FieldValue::Integer(slot) => *slot = parse_integer_prefix(value),
            FieldValue::Real(slot) => *slot = parse_real_prefix(value),
            _ => {}
        }
    }

    /// Copies a raw slot value into the field at `index`.
    ///
    /// The value's tag must match the field's type. A mismatched copy is a
    /// caller defect: debug builds assert, release builds leave the slot
    /// untouched. Integer, real and string values are copied (string
    /// buffers freshly allocated); other tags are never copied.
    pub fn set_field(&mut self, index: usize, value: &FieldValue) {
        match (&mut self.fields[index], value) {
            (FieldValue::Integer(slot), FieldValue::Integer(v)) => *slot = *v,
            (FieldValue::Real(slot), FieldValue::Real(v)) => *slot = *v,
            (FieldValue::Str(slot), FieldValue::Str(v)) => *slot = v.clone(),
            (slot, value) => {
                debug_assert!(
                    slot.field_type() == value.field_type(),
                    "value tag {:?} does not match slot type {:?}",
                    value.field_type(),
                    slot.field_type(),
                );
            }
        }
    }

    // =========================================================================
    // Equality & dump
    // =========================================================================

    /// Tests whether two features are the same record.
    ///
    /// Features are equal when they carry the same id, share the same
    /// schema snapshot (by identity, never structurally), and, when this
    /// feature has a geometry, that geometry structurally matches the
    /// other's.
    // TODO: also compare attribute values.
    pub fn equal(&self, other: &Feature) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        if self.fid != other.fid {
            return false;
        }

        if !Schema::same_schema(&self.schema, &other.schema) {
            return false;
        }

        if let Some(geometry) = &self.geometry {
            if other.geometry.as_ref() != Some(geometry) {
                return false;
            }
        }

        true
    }

    /// Writes a human-readable dump of the feature.
    ///
    /// One header line with the schema name and id, one line per field in
    /// its string form, the geometry dump when present, and a trailing
    /// blank line.
    pub fn dump_readable(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "Feature({}):{}", self.schema.name(), self.fid)?;
        for index in 0..self.field_count() {
            let def = self.schema.field(index);
            writeln!(
                out,
                "  {} ({}) = {}",
                def.name(),
                def.field_type().name(),
                self.field_as_string(index),
            )?;
        }

        if let Some(geometry) = &self.geometry {
            geometry.dump_readable(out, "  ")?;
        }

        writeln!(out)
    }

    /// Returns the [`dump_readable`](Self::dump_readable) output as a
    /// string.
    pub fn dump_string(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.dump_readable(&mut out);
        out
    }
}

impl Clone for Feature {
    /// Duplicates the feature: the schema handle is shared (one more
    /// count), the id is copied, and the geometry and every field buffer
    /// are copied afresh.
    fn clone(&self) -> Feature {
        Feature {
            schema: Rc::clone(&self.schema),
            fid: self.fid,
            fields: self.fields.clone(),
            geometry: self.geometry.clone(),
        }
    }
}
