//! Dispatcher schema, handler dependencies and error types

pub mod schema;
pub mod types;

pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
