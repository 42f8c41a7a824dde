//! Domain Services
//!
//! Pure decision logic over domain values. Anything touching the host goes
//! through ports.

mod validator;

pub use validator::{check, validate, ConfigRejection};
