//! Translates SQL-like condition strings (`"userId = $1, age = $2"`) into the
//! key maps, key-condition expressions and update expressions DynamoDB expects.
//!
//! The [`expr`] module holds the mini-language itself; [`dynamodb`] renders the
//! parsed conditions into request artifacts and forwards them to the service
//! through [`dynamodb::Table`].

pub mod aws;
pub mod dynamodb;
pub mod error;
pub mod expr;

pub use dynamodb::Table;
pub use error::{Error, ErrorKind, Result, Stage};
pub use expr::Arg;
