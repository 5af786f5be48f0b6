//! Command protocol implementation.
//!
//! A line-oriented request/response protocol on top of the shared
//! per-connection counter:
//! - Client sends: `GET\n` -- server responds `Data Count: <N>\n`
//! - Client sends: `QUIT\n` -- server closes the connection, no reply
//! - Anything else -- server responds `ERR\n` and keeps the session open
//!
//! ## Use Cases
//!
//! 1. **Pull-based counting**: The client decides when the counter
//!    advances, unlike the push-only feed protocol.
//!
//! 2. **Polling clients**: Pairs with the bundled CLI, which issues `GET`
//!    on a fixed interval and prints each response.
//!
//! ## Protocol Format
//!
//! ```text
//! Request:  GET\n
//! Response: Data Count: 1\n
//!
//! Request:  BOGUS\n
//! Response: ERR\n
//!
//! Request:  QUIT\n
//! Response: (connection closes)
//! ```
//!
//! Commands are matched case-sensitively by prefix; `N` starts at 1 and
//! is independent per connection.

pub mod handler;
pub mod parser;

pub use handler::handle_connection;
