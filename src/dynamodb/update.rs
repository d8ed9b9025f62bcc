use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;
use serde::Serialize;

use super::codec::to_attribute_value;
use crate::error::{Error, Result};

/// `UpdateExpression` and `ExpressionAttributeValues` of an UpdateItem request.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    expression: String,
    values: HashMap<String, AttributeValue>,
}

impl UpdateExpression {
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn values(&self) -> &HashMap<String, AttributeValue> {
        &self.values
    }

    pub fn into_parts(self) -> (String, HashMap<String, AttributeValue>) {
        (self.expression, self.values)
    }
}

/// Renders `SET a = :a, b = :b` for the given field updates.
///
/// Fields are rendered in lexicographic order so the same updates always
/// produce the same expression, whatever order they were supplied in. Each
/// field name doubles as its value placeholder.
pub fn build_update_expression<I, K, V>(updates: I) -> Result<UpdateExpression>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Serialize,
{
    let updates: BTreeMap<String, V> = updates
        .into_iter()
        .map(|(field, value)| (field.into(), value))
        .collect();
    if updates.is_empty() {
        return Err(Error::EmptyUpdate);
    }

    let mut clauses = Vec::with_capacity(updates.len());
    let mut values = HashMap::with_capacity(updates.len());

    for (field, value) in updates {
        let placeholder = format!(":{field}");
        let attribute_value = to_attribute_value(&value)
            .map_err(|err| Error::marshal(format!("update value for {field}"), err))?;
        clauses.push(format!("{field} = {placeholder}"));
        values.insert(placeholder, attribute_value);
    }

    Ok(UpdateExpression {
        expression: format!("SET {}", clauses.join(", ")),
        values,
    })
}
