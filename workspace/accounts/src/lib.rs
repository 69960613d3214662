//! Account management and survey record helpers.
//!
//! [`UserManager`] is the entry point for creating accounts; the
//! [`survey`] functions write the records a user owns.

pub mod email;
pub mod error;
pub mod manager;
pub mod password;
pub mod permissions;
pub mod survey;

#[cfg(test)]
mod testing;

pub use error::{AccountError, Result};
pub use manager::{NewUser, UserManager};
pub use password::PasswordExt;
pub use permissions::Capabilities;
