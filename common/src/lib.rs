pub mod config;
pub mod env;
pub mod fs;
pub mod index;

pub use config::*;
pub use env::*;
pub use fs::*;
pub use index::*;
