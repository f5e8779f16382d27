//! Game logic: tile pool, dictionary, board and rack state, word validation,
//! and game progression

pub mod board;
pub mod controller;
pub mod dictionary;
pub mod error;
pub mod rack;
pub mod tiles;
pub mod validation;

pub use board::Coordinate;
pub use controller::{GameController, GameEvent, SpinPolicy, TileSource};
pub use dictionary::{Dictionary, DictionaryStatus};
pub use error::GameError;
pub use validation::Orientation;
