use clap::Parser;
use tetraship::{init_logging, serve, PORT_PLAYER_ONE, PORT_PLAYER_TWO};

#[derive(Parser)]
#[command(author, version, about = "Two-player tetromino battleship server", long_about = None)]
struct Cli {
    /// Listen port for player one (moves first).
    #[arg(long, default_value_t = PORT_PLAYER_ONE)]
    port1: u16,
    /// Listen port for player two.
    #[arg(long, default_value_t = PORT_PLAYER_TWO)]
    port2: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    serve(cli.port1, cli.port2).await
}
