//! Raw echo protocol implementation.
//!
//! No framing at all: whatever bytes arrive are written straight back
//! before the next read is issued.
//!
//! ## Use Cases
//!
//! 1. **Connectivity checks**: `nc 127.0.0.1 4000` and type; every line
//!    comes back verbatim.
//!
//! 2. **Data integrity validation**: Compare echoed bytes against sent
//!    bytes, including binary payloads.
//!
//! 3. **Partial-write handling**: Each received chunk is echoed in full
//!    before the next read, even when the socket accepts it piecemeal.
//!
//! ## Protocol Format
//!
//! ```text
//! Request:  <any bytes>
//! Response: <the same bytes>
//! ```
//!
//! Reads pull at most 1 KiB per call; larger client payloads simply echo
//! back as a series of chunks.

pub mod handler;

pub use handler::handle_connection;
