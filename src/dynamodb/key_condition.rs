use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use crate::expr::{Arg, Condition, ParseError, parse_conditions};

/// Key map for a GetItem request: attribute name to value, no placeholders.
pub fn key_attributes(
    conditions: &[Condition],
) -> Result<HashMap<String, AttributeValue>, ParseError> {
    let [condition] = conditions else {
        return Err(ParseError::ExactlyOneKeyCondition {
            count: conditions.len(),
        });
    };

    Ok(HashMap::from([(
        condition.attribute_name.clone(),
        condition.value.to_attribute_value(),
    )]))
}

/// `KeyConditionExpression` and `ExpressionAttributeValues` of a Query request.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyConditionExpression {
    expression: String,
    values: HashMap<String, AttributeValue>,
}

impl KeyConditionExpression {
    pub fn from_conditions(conditions: &[Condition]) -> Self {
        let mut clauses = Vec::with_capacity(conditions.len());
        let mut values = HashMap::with_capacity(conditions.len());

        for condition in conditions {
            let placeholder = condition.placeholder();
            clauses.push(format!("{} = {}", condition.attribute_name, placeholder));
            values.insert(placeholder, condition.value.to_attribute_value());
        }

        Self {
            expression: clauses.join(" AND "),
            values,
        }
    }

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

/// Every artifact a condition string translates into.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCondition {
    /// One entry per clause; a repeated attribute keeps its last value.
    pub key_attributes: HashMap<String, AttributeValue>,
    pub key_condition_expression: String,
    pub expression_values: HashMap<String, AttributeValue>,
}

pub fn parse_condition(query: &str, args: &[Arg]) -> Result<ParsedCondition, ParseError> {
    let conditions = parse_conditions(query, args)?;

    let key_attributes = conditions
        .iter()
        .map(|condition| {
            (
                condition.attribute_name.clone(),
                condition.value.to_attribute_value(),
            )
        })
        .collect();
    let (key_condition_expression, expression_values) =
        KeyConditionExpression::from_conditions(&conditions).into_parts();

    Ok(ParsedCondition {
        key_attributes,
        key_condition_expression,
        expression_values,
    })
}
