use color_eyre::Result;
use serde_json::Value;

use onetable::Table;

use super::parse_args;

pub struct Options {
    pub query: String,
    pub args: Vec<String>,
}

pub async fn get_one(table: &Table, options: Options) -> Result<()> {
    let args = parse_args(&options.args)?;
    let item: Option<Value> = table.get_one(&options.query, &args).await?;
    println!("{}", serde_json::to_string_pretty(&item)?);
    Ok(())
}

pub async fn get_many(table: &Table, options: Options) -> Result<()> {
    let args = parse_args(&options.args)?;
    let items: Vec<Value> = table.get_many(&options.query, &args).await?;
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}
