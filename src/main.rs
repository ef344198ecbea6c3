use std::path::PathBuf;

use clap::Parser;

use audiobooks::runtime;

/// Merge a directory of .m4a chapter files into one .m4b audiobook with
/// chapter marks.
#[derive(Parser)]
#[command(name = "audiobooks", version, about, max_term_width = 80)]
struct Cli {
    /// Directory to index
    dir_name: PathBuf,
    /// Output filename (default: <DIR_NAME>/<album>.m4b)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Cover filename (default: <DIR_NAME>/cover.jpg)
    #[arg(short, long)]
    cover: Option<PathBuf>,
}

fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    let settings = runtime::load_settings();
    let path = runtime::run_merge(
        &cli.dir_name,
        cli.output.as_deref(),
        cli.cover.as_deref(),
        &settings,
    )?;
    Ok(path)
}

fn main() {
    // Usage errors exit with 1 like every other failure; help and version still exit 0.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        if e.use_stderr() {
            let _ = e.print();
            std::process::exit(1);
        }
        e.exit()
    });

    runtime::init_logging();

    match run(&cli) {
        Ok(path) => tracing::info!(path = %path.display(), "audiobook written"),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("audiobooks: {e:#}");
            std::process::exit(1);
        }
    }
}
