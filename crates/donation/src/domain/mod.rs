pub mod error;
pub mod session;
pub mod state;
pub mod view;

pub use self::{error::Error, session::Session, state::State, view::View};
