mod cli;

use bmp_gray_rs::logger;
use clap::Parser;

use tracing::info;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.log_directive());

    info!("Starting bmp_gray...");

    cli.run()
}
