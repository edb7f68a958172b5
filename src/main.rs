use clap::Parser;

use cinegraph::cli::App;
use cinegraph::config::Config;
use cinegraph::logging;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    let config = Config::load()?;

    logging::init(&config.log, app.verbose);
    tracing::debug!(neo4j_server_uri = %config.neo4j.uri(), "Loaded configuration");

    app.run(config).await
}
