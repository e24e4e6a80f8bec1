//! Shared schema snapshots describing a feature's field layout.
//!
//! A schema is built once, frozen, and handed to features as a counted
//! [`SchemaRef`] handle. Features attach by cloning the handle and detach
//! when dropped; immutability after [`SchemaBuilder::build`] guarantees a
//! feature's attribute array can never desynchronize from its schema.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::model::field::FieldType;

/// Shared handle to an immutable schema snapshot.
///
/// The reference count is not atomic; schemas and their features stay on
/// one thread unless externally synchronized.
pub type SchemaRef = Rc<Schema>;

/// Name and type of one field slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    name: String,
    field_type: FieldType,
}

impl FieldDef {
    /// Creates a field definition.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> FieldDef {
        FieldDef {
            name: name.into(),
            field_type,
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field type.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }
}

/// Immutable, ordered field registry shared by every feature of a layer.
#[derive(Debug)]
pub struct Schema {
    name: String,
    fields: Vec<FieldDef>,
    // lowercased name -> first declared index
    index: FxHashMap<String, usize>,
}

impl Schema {
    /// Starts building a schema with the given layer name.
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name)
    }

    /// Returns the layer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of field slots.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns the field definition at `index`.
    ///
    /// Panics when `index` is out of range; passing a foreign index is a
    /// caller defect, not a recoverable condition.
    pub fn field(&self, index: usize) -> &FieldDef {
        &self.fields[index]
    }

    /// Returns all field definitions in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Looks up a field index by name, ASCII case-insensitive.
    ///
    /// The first declared field wins when names collide.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.index.get(&name.to_ascii_lowercase()).copied()
    }

    /// Returns whether two handles refer to the same schema snapshot.
    ///
    /// Feature equality compares schemas by identity, never structurally:
    /// two separately built schemas with identical fields are distinct.
    pub fn same_schema(a: &SchemaRef, b: &SchemaRef) -> bool {
        Rc::ptr_eq(a, b)
    }
}

/// Fluent builder for [`Schema`].
///
/// # Example
///
/// ```rust
/// use vector_feature::{FieldType, Schema};
///
/// let schema = Schema::builder("wells")
///     .field("name", FieldType::String)
///     .field("depth_m", FieldType::Real)
///     .build();
/// assert_eq!(schema.field_count(), 2);
/// assert_eq!(schema.field_index("DEPTH_M"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldDef>,
}

impl SchemaBuilder {
    /// Creates a builder for a schema with the given layer name.
    pub fn new(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field slot.
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(FieldDef::new(name, field_type));
        self
    }

    /// Freezes the schema and returns the shared handle.
    pub fn build(self) -> SchemaRef {
        let mut index = FxHashMap::default();
        for (i, def) in self.fields.iter().enumerate() {
            index.entry(def.name().to_ascii_lowercase()).or_insert(i);
        }
        Rc::new(Schema {
            name: self.name,
            fields: self.fields,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SchemaRef {
        Schema::builder("roads")
            .field("name", FieldType::String)
            .field("lanes", FieldType::Integer)
            .field("length_km", FieldType::Real)
            .build()
    }

    #[test]
    fn test_field_order_and_count() {
        let schema = sample();
        assert_eq!(schema.field_count(), 3);
        assert_eq!(schema.field(0).name(), "name");
        assert_eq!(schema.field(1).field_type(), FieldType::Integer);
        assert_eq!(schema.field(2).name(), "length_km");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let schema = sample();
        assert_eq!(schema.field_index("lanes"), Some(1));
        assert_eq!(schema.field_index("LANES"), Some(1));
        assert_eq!(schema.field_index("Length_Km"), Some(2));
        assert_eq!(schema.field_index("surface"), None);
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let schema = Schema::builder("dup")
            .field("value", FieldType::Integer)
            .field("value", FieldType::Real)
            .build();
        assert_eq!(schema.field_index("value"), Some(0));
    }

    #[test]
    fn test_identity_not_structure() {
        let a = sample();
        let b = sample();
        assert!(Schema::same_schema(&a, &a.clone()));
        assert!(!Schema::same_schema(&a, &b));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_field_panics() {
        sample().field(3);
    }
}
