use clap::Parser;
use tokio::io::{stdin, stdout, BufReader};
use tracing_subscriber::EnvFilter;

use todo_core::{ItemsClient, TodoController, DEFAULT_BASE_URL};
use todo_view::{run, ReqwestTransport, Session, Transport};

#[derive(Debug, Parser)]
#[command(name = "todo-view", about = "List and add todo items")]
struct Args {
    /// Backend to talk to. Point this at a local mock server during development.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Probe the backend's health route and exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = ItemsClient::new(&args.base_url);
    let transport = ReqwestTransport::new()?;

    if args.check {
        let response = transport.execute(client.build_health()).await?;
        let health = client.parse_health(response)?;
        println!("{} ({} items)", health.status, health.db_count);
        return Ok(());
    }

    let session = Session::new(TodoController::new(client), transport);
    run(session, BufReader::new(stdin()), stdout()).await?;
    Ok(())
}
