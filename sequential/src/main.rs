use anyhow::Context;
use clap::Parser;
use common::{as_text, init_logger, runner};
use futures::future::try_join_all;
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use tracing::info;

mod apps;

#[derive(Parser, Debug)]
struct Cli {
    /// One of: ext, grep, names, parity, square, sum
    #[arg(short, long)]
    app_name: String,
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
    #[arg(required = true)]
    input_files: Vec<PathBuf>,
}

async fn read_input(path: &Path) -> anyhow::Result<(String, String)> {
    let name = path.to_string_lossy().into_owned();
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {name}"))?;
    let contents = as_text(&name, &bytes)?.to_owned();
    Ok((name, contents))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    let app = apps::load(&cli.app_name)?;

    let inputs = try_join_all(cli.input_files.iter().map(|path| read_input(path))).await?;
    let results = runner::run(
        &app,
        inputs
            .iter()
            .map(|(name, contents)| (name.as_str(), contents.as_str())),
    );

    let path = cli.output_dir.join(format!("mr-{}-seq", app.app_name));
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    runner::write_output(BufWriter::new(file), &results)?;
    info!("{} keys written to {}", results.len(), path.display());

    Ok(())
}
