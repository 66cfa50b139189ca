use std::io::Write;

use anyhow::Result;
use clap::Parser;
use petstore_cli::{run, Cli, Console, UreqTransport};
use petstore_core::PetStore;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut console = if cli.log_file {
        Console::log_file()?
    } else {
        Console::stdout()
    };

    tracing::debug!(base_url = %cli.base_url, "using pet store");
    let store = PetStore::new(&cli.base_url, UreqTransport::new());
    run(&cli, &store, console.out.as_mut())?;
    console.out.flush()?;
    Ok(())
}
