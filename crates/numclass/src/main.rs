#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod classify;
mod error;
mod fact;
mod prelude;
mod serve;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify integers (prime, perfect, Armstrong, parity, digit sum) over HTTP or from the command line"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "NUMCLASS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Run the HTTP classification server
    Serve(crate::serve::App),

    /// Classify a single number and print the result
    Classify(crate::classify::App),
}

fn init_logger(global: &Global) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if global.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    init_logger(&app.global);

    match app.command {
        SubCommands::Serve(sub_app) => crate::serve::run(sub_app, app.global).await,
        SubCommands::Classify(sub_app) => crate::classify::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
