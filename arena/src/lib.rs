mod game;
mod measurement;
mod options;
mod players;
mod score;
mod statistics;
mod trajectory;

pub use game::*;
pub use measurement::*;
pub use options::*;
pub use players::*;
pub use score::*;
pub use statistics::*;
pub use trajectory::*;
