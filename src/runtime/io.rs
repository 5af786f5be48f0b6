//! Socket write discipline.
//!
//! A single write call may transfer fewer bytes than requested. `send_all`
//! keeps writing the remaining tail until the whole buffer is on the wire
//! or a write fails. Every response path in the server goes through it.

use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Write all of `buf`, looping on partial writes.
///
/// A zero-byte write means the peer can no longer accept data and is
/// reported as `WriteZero`.
pub async fn send_all<W>(stream: &mut W, buf: &[u8]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    while written < buf.len() {
        match stream.write(&buf[written..]).await? {
            0 => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "write returned 0",
                ));
            }
            n => written += n,
        }
    }
    Ok(())
}
