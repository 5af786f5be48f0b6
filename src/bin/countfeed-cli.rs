//! countfeed-cli: polling client for the countfeed server.
//!
//! Connects to the fixed endpoint and either polls the command protocol
//! (send `GET` on an interval, print each `Data Count` reply) or, with
//! `--listen`, just prints whatever the server pushes (feed mode).

use clap::Parser;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::{interval, timeout};

/// The server's fixed endpoint.
const SERVER_ADDR: &str = "127.0.0.1:4000";

/// How long to wait for one response line before moving on.
const READ_TIMEOUT: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(
    name = "countfeed-cli",
    about = "Polling client for the countfeed server",
    version
)]
struct CliArgs {
    /// Number of responses to collect before exiting
    #[arg(short = 'n', long, default_value_t = 5)]
    count: u32,

    /// Milliseconds between requests
    #[arg(short, long, default_value_t = 20)]
    interval_ms: u64,

    /// Send QUIT before exiting instead of just closing
    #[arg(long)]
    quit: bool,

    /// Read pushed lines without sending requests (feed mode)
    #[arg(long)]
    listen: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let stream = TcpStream::connect(SERVER_ADDR).await?;
    println!("Connected to {SERVER_ADDR}");

    if args.listen {
        listen(stream, args.count).await
    } else {
        poll(stream, &args).await
    }
}

/// Print pushed lines as they arrive (feed mode).
async fn listen(stream: TcpStream, count: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();

    for _ in 0..count {
        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            println!("Server closed the connection");
            return Ok(());
        }
        println!("{}", line.trim_end());
    }

    Ok(())
}

/// Send `GET` on an interval and print each response (command mode).
async fn poll(stream: TcpStream, args: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    let mut ticker = interval(Duration::from_millis(args.interval_ms));
    let mut received = 0u32;

    while received < args.count {
        ticker.tick().await;

        writer.write_all(b"GET\n").await?;
        writer.flush().await?;

        line.clear();
        match timeout(READ_TIMEOUT, reader.read_line(&mut line)).await {
            Ok(Ok(0)) => {
                println!("Server closed the connection");
                return Ok(());
            }
            Ok(Ok(_)) => {
                println!("{}", line.trim_end());
                received += 1;
            }
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => {
                // Timed out; try again on the next tick.
                println!("<no response>");
            }
        }
    }

    if args.quit {
        writer.write_all(b"QUIT\n").await?;
        writer.flush().await?;
    }

    Ok(())
}
