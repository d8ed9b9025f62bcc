use color_eyre::Result;
use serde_json::json;

use onetable::dynamodb::{parse_condition, to_json};

use super::parse_args;

pub struct Options {
    pub query: String,
    pub args: Vec<String>,
}

pub fn command(options: Options) -> Result<()> {
    let args = parse_args(&options.args)?;
    let parsed = parse_condition(&options.query, &args)?;

    let output = json!({
        "key_attributes": to_json(&parsed.key_attributes)?,
        "key_condition_expression": parsed.key_condition_expression,
        "expression_values": to_json(&parsed.expression_values)?,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
