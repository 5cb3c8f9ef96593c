pub mod error;
#[cfg(any(test, feature = "fake"))]
pub mod fake;
pub mod oracle;
pub mod outcome;
pub mod position;

pub use crate::error::*;
pub use crate::oracle::*;
pub use crate::outcome::*;
pub use crate::position::*;
