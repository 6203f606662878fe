pub mod actions;
mod cards;
pub mod clipboard;
pub mod events;
mod history;
mod scroll;
mod session;

pub use cards::*;
pub use history::*;
pub use scroll::*;
pub use session::*;
