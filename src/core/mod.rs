pub mod burst;
pub mod constants;
pub mod gesture;
pub mod input;
pub mod interaction;
pub mod state;
pub mod tracker;
pub mod tween;

pub use burst::*;
pub use gesture::*;
pub use input::*;
pub use interaction::*;
pub use state::*;
pub use tracker::*;
pub use tween::*;
