use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

/// HTTP todo service backed by a JSON file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Server host
    #[arg(short = 'H', long, default_value = "localhost")]
    host: String,

    /// Server port
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Todo JSON file
    #[arg(short, long, default_value = "todoServer.json")]
    file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        todo_file = %args.file.display(),
        "listening on {addr}"
    );
    todo_server::run(listener, args.file).await
}
