use crate::error::HydrateError;
use graphmap_core::config::RowConfig;
use graphmap_core::{Endpoints, PropertyMap, PropertyValue};
use serde_json::{Map, Value};

/// One entity's worth of raw result data, validated for shape but not yet an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub id: i64,
    pub rel_type: Option<String>,
    pub endpoints: Option<Endpoints>,
    pub properties: PropertyMap,
}

impl RawRow {
    pub fn from_json(row: &Value, fields: &RowConfig) -> Result<Self, HydrateError> {
        let object = row.as_object().ok_or_else(|| HydrateError::InvalidField {
            field: "<row>".to_string(),
            expected: "object",
            actual: json_kind(row).to_string(),
        })?;

        let id = required_i64(object, &fields.id_field)?;

        let rel_type = match object.get(&fields.type_field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(HydrateError::InvalidField {
                    field: fields.type_field.clone(),
                    expected: "string",
                    actual: json_kind(other).to_string(),
                })
            }
        };

        let endpoints = match (
            optional_i64(object, &fields.start_field)?,
            optional_i64(object, &fields.end_field)?,
        ) {
            (Some(start), Some(end)) => Some(Endpoints::new(start, end)),
            (None, None) => None,
            (Some(_), None) => {
                return Err(HydrateError::MissingField {
                    field: fields.end_field.clone(),
                })
            }
            (None, Some(_)) => {
                return Err(HydrateError::MissingField {
                    field: fields.start_field.clone(),
                })
            }
        };

        let properties = match object.get(&fields.properties_field) {
            None | Some(Value::Null) => PropertyMap::new(),
            Some(Value::Object(props)) => props
                .iter()
                .map(|(k, v)| (k.clone(), PropertyValue::from(v.clone())))
                .collect(),
            Some(other) => {
                return Err(HydrateError::InvalidField {
                    field: fields.properties_field.clone(),
                    expected: "object",
                    actual: json_kind(other).to_string(),
                })
            }
        };

        Ok(Self {
            id,
            rel_type,
            endpoints,
            properties,
        })
    }
}

fn required_i64(object: &Map<String, Value>, field: &str) -> Result<i64, HydrateError> {
    optional_i64(object, field)?.ok_or_else(|| HydrateError::MissingField {
        field: field.to_string(),
    })
}

fn optional_i64(object: &Map<String, Value>, field: &str) -> Result<Option<i64>, HydrateError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or_else(|| HydrateError::InvalidField {
            field: field.to_string(),
            expected: "64-bit integer",
            actual: json_kind(value).to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
