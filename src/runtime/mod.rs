//! Connection machinery shared by the protocol handlers.
//!
//! - `listener`: bound, listening socket construction with an explicit
//!   backlog
//! - `io`: full-buffer write discipline over partial writes
//! - `session`: per-connection state machine and response counter

pub mod io;
pub mod listener;
pub mod session;

pub use io::send_all;
pub use listener::bind_listener;
pub use session::{Session, SessionEnd};
