use std::sync::Arc;

use aws_sdk_dynamodb::operation::{
    delete_item::DeleteItemInput, get_item::GetItemInput, put_item::PutItemInput,
    put_item::PutItemOutput, query::QueryInput, update_item::UpdateItemInput,
};
use serde::{Serialize, de::DeserializeOwned};

use super::{
    DynamoDb, KeyConditionExpression, build_update_expression, from_item, from_items,
    key_attributes, to_item,
};
use crate::error::{Error, Result, Stage};
use crate::expr::{Arg, parse_conditions};

/// A single DynamoDB table addressed with condition strings.
///
/// ```no_run
/// # async fn example(client: aws_sdk_dynamodb::Client) -> onetable::Result<()> {
/// use std::sync::Arc;
///
/// let table = onetable::Table::new(Arc::new(client), "onetable");
/// let user: Option<serde_json::Value> = table.get_one("userId = $1", &onetable::args!["1234"]).await?;
/// # Ok(())
/// # }
/// ```
pub struct Table<D = aws_sdk_dynamodb::Client> {
    db: Arc<D>,
    table_name: String,
}

impl<D> Clone for Table<D> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            table_name: self.table_name.clone(),
        }
    }
}

impl<D: DynamoDb> Table<D> {
    pub fn new(db: Arc<D>, table_name: impl Into<String>) -> Self {
        Self {
            db,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub async fn create_item<T: Serialize + ?Sized>(&self, record: &T) -> Result<PutItemOutput> {
        let item = to_item(record).map_err(|err| Error::marshal("input", err))?;

        let input = PutItemInput::builder()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .build()
            .map_err(|err| Error::invalid_request(Stage::PutItem, err))?;

        self.db
            .put_item(input)
            .await
            .map_err(|err| Error::engine(Stage::PutItem, err))
    }

    /// Point lookup. The query must hold exactly one `attribute = $1` clause
    /// naming the table's key; `None` means no such item exists.
    pub async fn get_one<T: DeserializeOwned>(
        &self,
        query: &str,
        args: &[Arg],
    ) -> Result<Option<T>> {
        let conditions = parse_conditions(query, args)?;
        let key = key_attributes(&conditions)?;

        tracing::trace!(table = %self.table_name, key = ?key, "GetItem");
        let input = GetItemInput::builder()
            .table_name(&self.table_name)
            .set_key(Some(key))
            .build()
            .map_err(|err| Error::invalid_request(Stage::GetItem, err))?;

        let output = self
            .db
            .get_item(input)
            .await
            .map_err(|err| Error::engine(Stage::GetItem, err))?;

        output
            .item()
            .map(from_item)
            .transpose()
            .map_err(|source| Error::Unmarshal {
                stage: Stage::GetItem,
                source,
            })
    }

    /// Range query joining every clause of `query` with `AND`. Only the first
    /// page of results is returned.
    pub async fn get_many<T: DeserializeOwned>(&self, query: &str, args: &[Arg]) -> Result<Vec<T>> {
        let conditions = parse_conditions(query, args)?;
        let (expression, values) = KeyConditionExpression::from_conditions(&conditions).into_parts();

        tracing::trace!(
            table = %self.table_name,
            key_condition_expression = %expression,
            attribute_values = ?values,
            "Query"
        );
        let input = QueryInput::builder()
            .table_name(&self.table_name)
            .key_condition_expression(expression)
            .set_expression_attribute_values(Some(values))
            .build()
            .map_err(|err| Error::invalid_request(Stage::Query, err))?;

        let output = self
            .db
            .query(input)
            .await
            .map_err(|err| Error::engine(Stage::Query, err))?;

        from_items(output.items()).map_err(|source| Error::Unmarshal {
            stage: Stage::Query,
            source,
        })
    }

    pub async fn update_item<K, I, F, V>(&self, key: &K, updates: I) -> Result<()>
    where
        K: Serialize + ?Sized,
        I: IntoIterator<Item = (F, V)>,
        F: Into<String>,
        V: Serialize,
    {
        let key = to_item(key).map_err(|err| Error::marshal("key", err))?;
        let (expression, values) = build_update_expression(updates)?.into_parts();

        tracing::trace!(
            table = %self.table_name,
            key = ?key,
            update_expression = %expression,
            attribute_values = ?values,
            "UpdateItem"
        );
        let input = UpdateItemInput::builder()
            .table_name(&self.table_name)
            .set_key(Some(key))
            .update_expression(expression)
            .set_expression_attribute_values(Some(values))
            .build()
            .map_err(|err| Error::invalid_request(Stage::UpdateItem, err))?;

        self.db
            .update_item(input)
            .await
            .map(|_| ())
            .map_err(|err| Error::engine(Stage::UpdateItem, err))
    }

    pub async fn delete_item<K: Serialize + ?Sized>(&self, key: &K) -> Result<()> {
        let key = to_item(key).map_err(|err| Error::marshal("key", err))?;

        tracing::trace!(table = %self.table_name, key = ?key, "DeleteItem");
        let input = DeleteItemInput::builder()
            .table_name(&self.table_name)
            .set_key(Some(key))
            .build()
            .map_err(|err| Error::invalid_request(Stage::DeleteItem, err))?;

        self.db
            .delete_item(input)
            .await
            .map(|_| ())
            .map_err(|err| Error::engine(Stage::DeleteItem, err))
    }
}
