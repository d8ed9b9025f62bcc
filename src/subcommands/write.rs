use color_eyre::eyre::{Result, WrapErr, eyre};
use serde_json::{Map, Value};

use onetable::Table;

fn parse_object(raw: &str, what: &str) -> Result<Map<String, Value>> {
    let value: Value =
        serde_json::from_str(raw).wrap_err_with(|| format!("Invalid {what} JSON"))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(eyre!("{what} must be a JSON object, got {other}")),
    }
}

pub async fn put(table: &Table, item: &str) -> Result<()> {
    let item = parse_object(item, "item")?;
    table.create_item(&item).await?;
    tracing::info!(table = %table.table_name(), "Item stored");
    Ok(())
}

pub async fn update(table: &Table, key: &str, updates: &str) -> Result<()> {
    let key = parse_object(key, "key")?;
    let updates = parse_object(updates, "updates")?;
    table.update_item(&key, &updates).await?;
    tracing::info!(table = %table.table_name(), fields = updates.len(), "Item updated");
    Ok(())
}

pub async fn delete(table: &Table, key: &str) -> Result<()> {
    let key = parse_object(key, "key")?;
    table.delete_item(&key).await?;
    tracing::info!(table = %table.table_name(), "Item deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objects_are_accepted() {
        let map = parse_object(r#"{"userId": "1"}"#, "key").unwrap();
        assert_eq!(map.get("userId"), Some(&Value::String("1".to_string())));
    }

    #[test]
    fn non_objects_are_rejected() {
        let err = parse_object("[1, 2]", "key").unwrap_err();
        assert!(err.to_string().contains("key must be a JSON object"));

        let err = parse_object("{", "item").unwrap_err();
        assert!(err.to_string().contains("Invalid item JSON"));
    }
}
