mod commands;
mod terminal;

use commands::{CommandLine, audit};
use macsweep_common::config::Config;
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg: Config = commands.to_config();
    print::banner(cfg.no_banner, cfg.quiet);

    audit::audit(commands.address, commands.username, &cfg).await
}
