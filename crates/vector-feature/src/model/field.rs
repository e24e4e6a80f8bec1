//! Field types and tagged slot values.
//!
//! A feature's attribute array holds one [`FieldValue`] per schema slot,
//! and the value's tag always matches the schema's [`FieldType`] at the
//! same index. The typed setters on `Feature` maintain that invariant.

/// Data types a schema can declare for an attribute field.
///
/// The list and wide-string types are declared for forward compatibility
/// but carry no accessor support yet: getters read them as zero values and
/// setters leave the slot untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldType {
    Integer = 0,
    Real = 1,
    String = 2,
    IntegerList = 3,
    RealList = 4,
    StringList = 5,
    WideString = 6,
}

impl FieldType {
    /// Returns the display name used by diagnostic dumps.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Integer => "Integer",
            FieldType::Real => "Real",
            FieldType::String => "String",
            FieldType::IntegerList => "IntegerList",
            FieldType::RealList => "RealList",
            FieldType::StringList => "StringList",
            FieldType::WideString => "WideString",
        }
    }

    /// Returns whether the typed accessors support this type.
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            FieldType::Integer | FieldType::Real | FieldType::String
        )
    }
}

/// One attribute slot: a value tagged with its field type.
///
/// `Str(None)` is the unset state of a string slot; numeric coercions read
/// it as zero and its string form is empty. String buffers are exclusively
/// owned, never shared between slots or records.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    Str(Option<String>),
    IntegerList(Vec<i64>),
    RealList(Vec<f64>),
    StringList(Vec<String>),
    WideString(Vec<u16>),
}

impl FieldValue {
    /// Returns the zero-initialized slot for a field type.
    pub fn zeroed(field_type: FieldType) -> FieldValue {
        match field_type {
            FieldType::Integer => FieldValue::Integer(0),
            FieldType::Real => FieldValue::Real(0.0),
            FieldType::String => FieldValue::Str(None),
            FieldType::IntegerList => FieldValue::IntegerList(Vec::new()),
            FieldType::RealList => FieldValue::RealList(Vec::new()),
            FieldType::StringList => FieldValue::StringList(Vec::new()),
            FieldType::WideString => FieldValue::WideString(Vec::new()),
        }
    }

    /// Returns the field type tag of this value.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Integer(_) => FieldType::Integer,
            FieldValue::Real(_) => FieldType::Real,
            FieldValue::Str(_) => FieldType::String,
            FieldValue::IntegerList(_) => FieldType::IntegerList,
            FieldValue::RealList(_) => FieldType::RealList,
            FieldValue::StringList(_) => FieldType::StringList,
            FieldValue::WideString(_) => FieldType::WideString,
        }
    }
}
