//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod message;
pub mod validation;

pub use message::{AuthorName, MessageContent, NewMessage};
pub use validation::ValidationError;
