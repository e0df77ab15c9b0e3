//! Terminal front end - the rendering collaborator for interactive use.

mod input;
mod presenter;
mod session;

pub use input::{parse, Input, InputError, HELP};
pub use presenter::TerminalPresenter;
pub use session::run_session;
