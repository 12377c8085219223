use clap::Parser;
use track_time::cli::Cli;
use track_time::cli_handlers::from_cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    from_cli(cli.command).execute()
}
