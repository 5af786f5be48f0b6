//! Raw echo handler for the Tokio runtime.

use bytes::BytesMut;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::runtime::{send_all, SessionEnd};

/// Bytes pulled per read call. Larger payloads echo back chunk by chunk.
const READ_CHUNK: usize = 1024;

/// Handle a raw echo connection.
///
/// Reads up to [`READ_CHUNK`] bytes at a time and writes exactly those
/// bytes back, completing the whole chunk before the next read. No
/// framing, no interpretation of the bytes.
pub async fn handle_connection<S>(mut stream: S) -> io::Result<SessionEnd>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut chunk = BytesMut::zeroed(READ_CHUNK);

    loop {
        let n = stream.read(&mut chunk[..]).await?;
        if n == 0 {
            // EOF
            return Ok(SessionEnd::Disconnected);
        }

        send_all(&mut stream, &chunk[..n]).await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_returns_exact_bytes() {
        let mock = tokio_test::io::Builder::new()
            .read(b"hello")
            .write(b"hello")
            .build();

        let end = handle_connection(mock).await.unwrap();
        assert_eq!(end, SessionEnd::Disconnected);
    }

    #[tokio::test]
    async fn test_echo_handles_successive_chunks() {
        let mock = tokio_test::io::Builder::new()
            .read(b"first")
            .write(b"first")
            .read(b"second chunk")
            .write(b"second chunk")
            .build();

        let end = handle_connection(mock).await.unwrap();
        assert_eq!(end, SessionEnd::Disconnected);
    }

    #[tokio::test]
    async fn test_echo_passes_binary_bytes_through() {
        let payload = [0x00, 0xff, 0x7f, 0x01, 0xfe];
        let mock = tokio_test::io::Builder::new()
            .read(&payload)
            .write(&payload)
            .build();

        let end = handle_connection(mock).await.unwrap();
        assert_eq!(end, SessionEnd::Disconnected);
    }

    #[tokio::test]
    async fn test_echo_completes_chunk_across_partial_writes() {
        let mock = tokio_test::io::Builder::new()
            .read(b"abcdef")
            .write(b"ab")
            .write(b"cd")
            .write(b"ef")
            .build();

        let end = handle_connection(mock).await.unwrap();
        assert_eq!(end, SessionEnd::Disconnected);
    }

    #[tokio::test]
    async fn test_echo_read_error_ends_session() {
        let mock = tokio_test::io::Builder::new()
            .read_error(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
            .build();

        let err = handle_connection(mock).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
    }

    #[tokio::test]
    async fn test_echo_write_error_ends_session() {
        let mock = tokio_test::io::Builder::new()
            .read(b"payload")
            .write_error(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
            .build();

        assert!(handle_connection(mock).await.is_err());
    }
}
