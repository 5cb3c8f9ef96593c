mod producer;
mod product;
mod trace;

pub use crate::producer::*;
pub use crate::product::*;
pub use crate::trace::*;
