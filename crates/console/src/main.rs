use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use stockroom_console::{Cli, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();
    stockroom_observability::init(&cli.log_config());

    tracing::debug!(?cli, "starting console session");

    let mut session = Session::new(
        io::stdin().lock(),
        io::stdout().lock(),
        cli.session_options(),
    );
    session.run().context("console session failed")?;

    tracing::info!(
        total_money = session.inventory().total_money().amount(),
        "session finished"
    );
    Ok(())
}
