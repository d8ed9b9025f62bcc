use color_eyre::eyre::{Result, eyre};
use serde_json::Value;

use onetable::Arg;

pub mod read;
pub mod translate;
pub mod write;

/// Positional values from the command line, read as JSON literals: `1234` is
/// a number and `'"1234"'` a string. Text that is not valid JSON (`abc`,
/// `007`, `+5`) is taken verbatim as a string.
pub fn parse_args(raw: &[String]) -> Result<Vec<Arg>> {
    raw.iter()
        .enumerate()
        .map(|(index, text)| match serde_json::from_str::<Value>(text) {
            Ok(value) => json_arg(value)
                .ok_or_else(|| eyre!("argument ${} ({text}) cannot be a JSON object", index + 1)),
            Err(_) => Ok(Arg::from(text)),
        })
        .collect()
}

fn json_arg(value: Value) -> Option<Arg> {
    match value {
        Value::String(text) => Some(Arg::String(text)),
        Value::Number(number) => Some(match number.to_string().parse::<i128>() {
            Ok(int) => int_arg(int),
            Err(_) => Arg::from(number.as_f64().unwrap_or(f64::NAN)),
        }),
        Value::Bool(flag) => Some(Arg::Bool(flag)),
        Value::Null => Some(Arg::Null),
        Value::Array(values) => values
            .into_iter()
            .map(json_arg)
            .collect::<Option<Vec<_>>>()
            .map(Arg::List),
        Value::Object(_) => None,
    }
}

fn int_arg(int: i128) -> Arg {
    i64::try_from(int).map_or_else(|_| Arg::from(int), Arg::from)
}
