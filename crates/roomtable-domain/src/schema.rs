//! The record field schema
//!
//! A single static table describes every required field of a
//! [`RoomRecord`](crate::record::RoomRecord). The table is used two ways:
//! to build the JSON schema handed to schema-constrained backends, and to
//! check that a backend response populates the full field set before it is
//! deserialized into typed records.

use serde_json::{json, Map, Value};
use thiserror::Error;

/// Primitive kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Whole number
    Integer,
    /// Decimal number
    Number,
    /// Boolean flag
    Flag,
}

impl FieldKind {
    /// The JSON-schema type name for this kind.
    pub fn json_type(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Integer => "integer",
            FieldKind::Number => "number",
            FieldKind::Flag => "boolean",
        }
    }
}

/// Every required field of a room record, in declaration (and CSV column)
/// order.
pub const ROOM_FIELDS: &[(&str, FieldKind)] = &[
    ("sample_group", FieldKind::Text),
    ("supplier", FieldKind::Text),
    ("property", FieldKind::Text),
    ("item", FieldKind::Text),
    ("room_config", FieldKind::Text),
    ("season_start_date", FieldKind::Text),
    ("season_end_date", FieldKind::Text),
    ("item_max_pax", FieldKind::Integer),
    ("price_rrp_adult_cost", FieldKind::Number),
    ("item_id", FieldKind::Integer),
    ("item_per_person", FieldKind::Flag),
    ("is_item_live", FieldKind::Flag),
    ("is_room_config_active", FieldKind::Flag),
    ("property_id", FieldKind::Integer),
    ("property_address", FieldKind::Text),
    ("is_property_active", FieldKind::Flag),
    ("supplier_id", FieldKind::Integer),
    ("supplier_address", FieldKind::Text),
    ("is_supplier_active", FieldKind::Flag),
    ("season_type", FieldKind::Text),
    ("season", FieldKind::Text),
    ("is_season_monday", FieldKind::Flag),
    ("is_season_tuesday", FieldKind::Flag),
    ("is_season_wednesday", FieldKind::Flag),
    ("is_season_thursday", FieldKind::Flag),
    ("is_season_friday", FieldKind::Flag),
    ("is_season_saturday", FieldKind::Flag),
    ("is_season_sunday", FieldKind::Flag),
    ("is_season_deleted", FieldKind::Flag),
    ("min_days", FieldKind::Integer),
    ("max_days", FieldKind::Integer),
    ("price_adj_adult_cost", FieldKind::Number),
    ("is_price_live", FieldKind::Flag),
    ("is_price_deleted", FieldKind::Flag),
];

/// A structured response that does not satisfy the record schema.
///
/// Raised only for well-formed JSON that fails to populate the field set;
/// syntactically malformed responses are a backend-call failure instead.
#[derive(Error, Debug, Clone)]
pub enum SchemaViolation {
    /// The response has no `rooms` array at the top level
    #[error("response has no `rooms` array")]
    MissingRooms,

    /// A room entry is not a JSON object
    #[error("room record {index} is not an object")]
    NotAnObject {
        /// Position of the entry in the `rooms` array
        index: usize,
    },

    /// A room entry is missing (or nulls out) a required field
    #[error("room record {index} is missing required field `{field}`")]
    MissingField {
        /// Position of the entry in the `rooms` array
        index: usize,
        /// Name of the absent field
        field: &'static str,
    },
}

/// Build the JSON schema for a full room table.
///
/// Every field is required and additional properties are rejected, so a
/// conforming backend cannot return partially populated records.
pub fn room_table_schema() -> Value {
    let mut properties = Map::new();
    for (name, kind) in ROOM_FIELDS {
        properties.insert((*name).to_string(), json!({ "type": kind.json_type() }));
    }
    let required: Vec<Value> = ROOM_FIELDS
        .iter()
        .map(|(name, _)| Value::String((*name).to_string()))
        .collect();

    json!({
        "type": "object",
        "properties": {
            "rooms": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": Value::Object(properties),
                    "required": required,
                    "additionalProperties": false
                }
            }
        },
        "required": ["rooms"],
        "additionalProperties": false
    })
}

/// Check that a parsed response populates every required field of every
/// record.
///
/// Null counts as absent. Field *types* are not checked here; the typed
/// deserialization that follows rejects mismatches.
pub fn validate_table(value: &Value) -> Result<(), SchemaViolation> {
    let rooms = value
        .get("rooms")
        .and_then(Value::as_array)
        .ok_or(SchemaViolation::MissingRooms)?;

    for (index, room) in rooms.iter().enumerate() {
        let fields = room
            .as_object()
            .ok_or(SchemaViolation::NotAnObject { index })?;
        for &(field, _) in ROOM_FIELDS {
            match fields.get(field) {
                Some(value) if !value.is_null() => {}
                _ => return Err(SchemaViolation::MissingField { index, field }),
            }
        }
    }

    Ok(())
}
