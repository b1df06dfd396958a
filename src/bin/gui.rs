use anyhow::Context as _;
use clap::Parser;
use escape_explorer::ExplorerArgs;

fn main() -> anyhow::Result<()> {
    let args = ExplorerArgs::parse();
    args.init_tracing()
        .map_err(|error| anyhow::anyhow!(error))
        .context("install log subscriber")?;

    let renderer = args.renderer().context("build renderer")?;
    escape_explorer::run_gui(renderer).context("run explorer window")?;

    Ok(())
}
