pub mod client;
pub mod dto;
pub mod movement;
pub mod status;

pub use client::*;
pub use movement::*;
pub use status::*;
