use async_trait::async_trait;
use aws_sdk_dynamodb::operation::{
    delete_item::{DeleteItemInput, DeleteItemOutput},
    get_item::{GetItemInput, GetItemOutput},
    put_item::{PutItemInput, PutItemOutput},
    query::{QueryInput, QueryOutput},
    update_item::{UpdateItemInput, UpdateItemOutput},
};

use super::send_dynamo_request;

pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The DynamoDB operations [`Table`](super::Table) forwards its requests to.
#[async_trait]
pub trait DynamoDb: Send + Sync {
    async fn get_item(&self, input: GetItemInput) -> Result<GetItemOutput, EngineError>;
    async fn query(&self, input: QueryInput) -> Result<QueryOutput, EngineError>;
    async fn put_item(&self, input: PutItemInput) -> Result<PutItemOutput, EngineError>;
    async fn update_item(&self, input: UpdateItemInput) -> Result<UpdateItemOutput, EngineError>;
    async fn delete_item(&self, input: DeleteItemInput) -> Result<DeleteItemOutput, EngineError>;
}

#[async_trait]
impl DynamoDb for aws_sdk_dynamodb::Client {
    async fn get_item(&self, input: GetItemInput) -> Result<GetItemOutput, EngineError> {
        let span = tracing::trace_span!("GetItem", table = ?input.table_name);
        let request = aws_sdk_dynamodb::Client::get_item(self)
            .set_table_name(input.table_name)
            .set_key(input.key)
            .set_consistent_read(input.consistent_read);
        send_dynamo_request(span, || request.send(), |err| format!("{err:?}"))
            .await
            .map_err(|err| aws_sdk_dynamodb::Error::from(err).into())
    }

    async fn query(&self, input: QueryInput) -> Result<QueryOutput, EngineError> {
        let span = tracing::trace_span!(
            "Query",
            table = ?input.table_name,
            key_condition_expression = ?input.key_condition_expression
        );
        let request = aws_sdk_dynamodb::Client::query(self)
            .set_table_name(input.table_name)
            .set_index_name(input.index_name)
            .set_key_condition_expression(input.key_condition_expression)
            .set_expression_attribute_values(input.expression_attribute_values);
        send_dynamo_request(span, || request.send(), |err| format!("{err:?}"))
            .await
            .map_err(|err| aws_sdk_dynamodb::Error::from(err).into())
    }

    async fn put_item(&self, input: PutItemInput) -> Result<PutItemOutput, EngineError> {
        let span = tracing::trace_span!("PutItem", table = ?input.table_name);
        let request = aws_sdk_dynamodb::Client::put_item(self)
            .set_table_name(input.table_name)
            .set_item(input.item);
        send_dynamo_request(span, || request.send(), |err| format!("{err:?}"))
            .await
            .map_err(|err| aws_sdk_dynamodb::Error::from(err).into())
    }

    async fn update_item(&self, input: UpdateItemInput) -> Result<UpdateItemOutput, EngineError> {
        let span = tracing::trace_span!(
            "UpdateItem",
            table = ?input.table_name,
            update_expression = ?input.update_expression
        );
        let request = aws_sdk_dynamodb::Client::update_item(self)
            .set_table_name(input.table_name)
            .set_key(input.key)
            .set_update_expression(input.update_expression)
            .set_expression_attribute_values(input.expression_attribute_values);
        send_dynamo_request(span, || request.send(), |err| format!("{err:?}"))
            .await
            .map_err(|err| aws_sdk_dynamodb::Error::from(err).into())
    }

    async fn delete_item(&self, input: DeleteItemInput) -> Result<DeleteItemOutput, EngineError> {
        let span = tracing::trace_span!("DeleteItem", table = ?input.table_name);
        let request = aws_sdk_dynamodb::Client::delete_item(self)
            .set_table_name(input.table_name)
            .set_key(input.key);
        send_dynamo_request(span, || request.send(), |err| format!("{err:?}"))
            .await
            .map_err(|err| aws_sdk_dynamodb::Error::from(err).into())
    }
}
