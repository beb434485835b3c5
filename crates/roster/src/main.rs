use std::sync::Arc;

use clap::Parser;

use roster::config::{Cli, Command};
use roster::source::JsonFileSource;
use roster::{commands, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_format)?;

    let source = JsonFileSource::new(cli.data);
    tracing::debug!(path = %source.path().display(), "using data source");

    let output = match cli.command {
        Command::Serve(args) => return server::serve(args.bind, Arc::new(source)).await,
        Command::List(args) => commands::list(&source, &args)?,
        Command::Sources(args) => commands::sources(&source, args)?,
        Command::ApplicationTypes(args) => commands::application_types(&source, args)?,
    };
    println!("{output}");
    Ok(())
}
