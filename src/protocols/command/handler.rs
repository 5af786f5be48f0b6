//! Command protocol handler for the Tokio runtime.

use bytes::BytesMut;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tracing::debug;

use crate::protocols::feed::data_count_line;
use crate::runtime::{send_all, Session, SessionEnd};

use super::parser::{classify, response_err, Request};

/// Bytes pulled per read call; plenty for GET/QUIT lines.
const READ_CHUNK: usize = 256;

/// Handle a command protocol connection.
///
/// Each received chunk is classified by prefix and drives the session:
/// - `GET` sends the next `Data Count` line
/// - `QUIT` closes the connection without a reply
/// - anything else earns `ERR` and the session continues
///
/// EOF from the client is a clean disconnect. Read and send failures end
/// the session with an error.
pub async fn handle_connection<S>(mut stream: S) -> io::Result<SessionEnd>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut session = Session::new();
    let mut chunk = BytesMut::zeroed(READ_CHUNK);
    let mut end = SessionEnd::Disconnected;

    while !session.is_closed() {
        let n = match stream.read(&mut chunk[..]).await {
            Ok(0) => {
                // EOF
                session.peer_closed();
                continue;
            }
            Ok(n) => n,
            Err(e) => {
                session.read_failed();
                return Err(e);
            }
        };

        match classify(&chunk[..n]) {
            Request::Get => {
                let line = data_count_line(session.next_count());
                session.begin_response();
                match send_all(&mut stream, &line).await {
                    Ok(()) => session.response_sent(),
                    Err(e) => {
                        session.send_failed();
                        return Err(e);
                    }
                }
            }
            Request::Quit => {
                session.quit();
                end = SessionEnd::Quit;
            }
            Request::Unknown => {
                debug!(len = n, "Unrecognized request");
                if let Err(e) = send_all(&mut stream, response_err()).await {
                    session.send_failed();
                    return Err(e);
                }
            }
        }
    }

    Ok(end)
}
