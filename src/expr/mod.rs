pub mod ast;
pub mod error;
pub mod parser;
pub mod value;
mod tests;

pub use ast::*;
pub use error::*;
pub use parser::parse_conditions;
pub use value::*;
