mod action;
mod event;
mod generator;
mod history;
mod request;
mod specification;
mod view;

pub use action::*;
pub use event::*;
pub use generator::*;
pub use history::*;
pub use request::*;
pub use specification::*;
pub use view::*;
