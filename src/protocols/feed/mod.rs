//! Counting feed protocol implementation.
//!
//! A push-only protocol: the server sends numbered lines as fast as the
//! connection accepts them, never reading from the client.
//!
//! ## Use Cases
//!
//! 1. **Liveness feeds**: Clients that just want a heartbeat stream can
//!    connect and watch the counter climb.
//!
//! 2. **Backpressure observation**: Because the server writes without
//!    pacing, a slow reader fills the socket buffers and the feed stalls
//!    in `send_all`. Useful for watching flow control in action.
//!
//! 3. **Disconnect detection**: A push-only session has no read to fail,
//!    so a failed write is the only signal that the peer went away.
//!
//! ## Protocol Format
//!
//! ```text
//! Data Count: 1
//! Data Count: 2
//! Data Count: 3
//! ...
//! ```
//!
//! The counter is per-connection and starts at 1 on every new session.

pub mod handler;

pub use handler::handle_connection;

use bytes::BytesMut;

/// Format one `Data Count` line.
///
/// Also used by the command protocol, whose `GET` response is exactly one
/// feed line.
pub fn data_count_line(n: u64) -> BytesMut {
    let count = n.to_string();
    let mut line = BytesMut::with_capacity(12 + count.len() + 1);
    line.extend_from_slice(b"Data Count: ");
    line.extend_from_slice(count.as_bytes());
    line.extend_from_slice(b"\n");
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_count_line_format() {
        assert_eq!(&data_count_line(1)[..], b"Data Count: 1\n");
        assert_eq!(&data_count_line(42)[..], b"Data Count: 42\n");
        assert_eq!(&data_count_line(1_000_000)[..], b"Data Count: 1000000\n");
    }

    #[test]
    fn test_data_count_line_ends_with_newline_only() {
        let line = data_count_line(7);
        assert!(line.ends_with(b"\n"));
        assert!(!line.ends_with(b"\r\n"));
    }
}
