use std::path::PathBuf;

use clap::Parser;

use audiobooks::runtime;

/// Write the sorted track list of a directory of .m4a chapter files to CSV:
/// disc, track, path, title, duration in seconds.
#[derive(Parser)]
#[command(name = "audiobooks-index", version, about, max_term_width = 80)]
struct Cli {
    /// Directory to index
    dir_name: PathBuf,
    /// Output filename (default: <DIR_NAME>/tracklist.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    let settings = runtime::load_settings();
    let path = runtime::run_index(&cli.dir_name, cli.output.as_deref(), &settings)?;
    Ok(path)
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        if e.use_stderr() {
            let _ = e.print();
            std::process::exit(1);
        }
        e.exit()
    });

    runtime::init_logging();

    match run(&cli) {
        Ok(path) => tracing::info!(path = %path.display(), "track index written"),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("audiobooks-index: {e:#}");
            std::process::exit(1);
        }
    }
}
