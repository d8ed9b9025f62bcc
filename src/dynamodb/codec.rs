use std::{collections::HashMap, fmt, str::FromStr};

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Number, Value};

pub type Item = HashMap<String, AttributeValue>;

#[derive(Debug, PartialEq, Eq)]
pub enum CodecError {
    InvalidNumber { value: String },
    InvalidStructure { message: String },
    UnsupportedType { attribute_type: String },
    Serialization(String),
    Deserialization(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidNumber { value } => {
                write!(f, "invalid DynamoDB number: {value}")
            }
            CodecError::InvalidStructure { message } => {
                write!(f, "invalid record structure: {message}")
            }
            CodecError::UnsupportedType { attribute_type } => {
                write!(f, "unsupported DynamoDB attribute type: {attribute_type}")
            }
            CodecError::Serialization(inner) => {
                write!(f, "failed to serialize value: {inner}")
            }
            CodecError::Deserialization(inner) => {
                write!(f, "failed to deserialize value: {inner}")
            }
        }
    }
}

impl std::error::Error for CodecError {}

pub type Result<T> = std::result::Result<T, CodecError>;

/// Marshals a record into a DynamoDB item. The record must serialize to an object.
pub fn to_item<T: Serialize + ?Sized>(record: &T) -> Result<Item> {
    let value = serde_json::to_value(record)
        .map_err(|err| CodecError::Serialization(err.to_string()))?;
    from_json(&value)
}

pub fn to_attribute_value<T: Serialize + ?Sized>(value: &T) -> Result<AttributeValue> {
    let value =
        serde_json::to_value(value).map_err(|err| CodecError::Serialization(err.to_string()))?;
    Ok(from_json_value(&value))
}

pub fn from_item<T: DeserializeOwned>(item: &Item) -> Result<T> {
    let value = to_json(item)?;
    serde_json::from_value(value).map_err(|err| CodecError::Deserialization(err.to_string()))
}

pub fn from_items<T: DeserializeOwned>(items: &[Item]) -> Result<Vec<T>> {
    items.iter().map(from_item).collect()
}

pub fn to_json(item: &Item) -> Result<Value> {
    let mut json_map = Map::with_capacity(item.len());

    for (key, attr_value) in item {
        json_map.insert(key.clone(), to_json_value(attr_value)?);
    }

    Ok(Value::Object(json_map))
}

pub fn to_json_string(item: &Item) -> Result<String> {
    let json_value = to_json(item)?;
    serde_json::to_string_pretty(&json_value)
        .map_err(|err| CodecError::Serialization(err.to_string()))
}

pub fn from_json_string(input: &str) -> Result<Item> {
    let value: Value = serde_json::from_str(input)
        .map_err(|err| CodecError::Deserialization(err.to_string()))?;
    from_json(&value)
}

pub fn from_json(value: &Value) -> Result<Item> {
    let Value::Object(map) = value else {
        return Err(CodecError::InvalidStructure {
            message: "expected an object at the top level".to_string(),
        });
    };

    Ok(map
        .iter()
        .map(|(key, value)| (key.clone(), from_json_value(value)))
        .collect())
}

fn from_json_value(value: &Value) -> AttributeValue {
    match value {
        Value::String(text) => AttributeValue::S(text.clone()),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::Bool(value) => AttributeValue::Bool(*value),
        Value::Null => AttributeValue::Null(true),
        Value::Array(values) => AttributeValue::L(values.iter().map(from_json_value).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(key, value)| (key.clone(), from_json_value(value)))
                .collect(),
        ),
    }
}

fn to_json_value(value: &AttributeValue) -> Result<Value> {
    match value {
        AttributeValue::Bool(bool_value) => Ok(Value::Bool(*bool_value)),
        AttributeValue::S(string_value) => Ok(Value::String(string_value.clone())),
        AttributeValue::N(number_value) => {
            let number =
                Number::from_str(number_value).map_err(|_| CodecError::InvalidNumber {
                    value: number_value.clone(),
                })?;
            Ok(Value::Number(number))
        }
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(list) => {
            let mut array = Vec::with_capacity(list.len());
            for element in list {
                array.push(to_json_value(element)?);
            }
            Ok(Value::Array(array))
        }
        AttributeValue::M(map) => {
            let mut object = Map::with_capacity(map.len());
            for (key, attribute_value) in map {
                object.insert(key.clone(), to_json_value(attribute_value)?);
            }
            Ok(Value::Object(object))
        }
        AttributeValue::B(_) => Err(CodecError::UnsupportedType {
            attribute_type: "B".to_string(),
        }),
        AttributeValue::Bs(_) => Err(CodecError::UnsupportedType {
            attribute_type: "BS".to_string(),
        }),
        AttributeValue::Ns(_) => Err(CodecError::UnsupportedType {
            attribute_type: "NS".to_string(),
        }),
        AttributeValue::Ss(_) => Err(CodecError::UnsupportedType {
            attribute_type: "SS".to_string(),
        }),
        _ => Err(CodecError::UnsupportedType {
            attribute_type: "Unknown".to_string(),
        }),
    }
}
