use clap::Parser;

mod cli;
mod config;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = cli::Args::parse();
    log::debug!("{args:?}");
    cli::run(args)
}
