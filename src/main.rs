use clap::Parser;
use kanbanpro::cli::Cli;
use kanbanpro::logging::LoggingConfig;
use kanbanpro::web::server::KanbanServer;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_config = LoggingConfig::from_args(cli.quiet, cli.verbose > 0, cli.json);
    if let Err(e) = kanbanpro::logging::init_logging(log_config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!("Server exited with error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    KanbanServer::new(cli.port, cli.data.clone()).run().await
}
