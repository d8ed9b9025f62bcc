pub mod client;
pub mod codec;
pub mod debug;
pub mod engine;
pub mod key_condition;
pub mod update;

pub use client::Table;
pub use codec::*;
pub use debug::send_dynamo_request;
pub use engine::*;
pub use key_condition::*;
pub use update::*;
