use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use shredder::config::{APP_NAME, DEFAULT_PASSES, MAX_PASSES};
use shredder::file::RealFile;
use shredder::{ShredError, ShredOptions, Shredder, Summary};
use tracing::Level;

use crate::ui::progress::{Bar, Tracked};

#[derive(Parser)]
#[command(name = APP_NAME, version, about = "Overwrite a file with random data several times, then delete it.")]
pub struct App {
    /// File to destroy.
    path: PathBuf,

    /// Number of overwrite passes.
    #[arg(short = 'n', long, default_value_t = DEFAULT_PASSES, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PASSES)))]
    passes: u32,

    /// Hide the progress bar and summary.
    #[arg(short, long)]
    quiet: bool,

    /// Log every step.
    #[arg(short, long)]
    verbose: bool,
}

impl App {
    pub fn init() -> Result<Self> {
        let app = Self::parse();
        let level = if app.verbose { Level::DEBUG } else { Level::INFO };
        let subscriber = tracing_subscriber::fmt().with_max_level(level).with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(app)
    }

    pub async fn execute(self) -> Result<()> {
        let options = ShredOptions::with_passes(self.passes).context("pass count must be positive")?;
        let path = self.path;
        let quiet = self.quiet;

        tracing::debug!(path = %path.display(), passes = self.passes, "shredding");

        let task_path = path.clone();
        let result = tokio::task::spawn_blocking(move || Self::run(&task_path, options, quiet)).await.context("shred task did not complete")?;

        match result {
            Ok(summary) => {
                tracing::info!(path = %path.display(), bytes = summary.bytes, passes = summary.passes, "File successfully shredded");
                if !quiet {
                    crate::ui::display::show_success(&path, summary);
                }
                Ok(())
            }
            Err(err) => {
                tracing::error!(path = %path.display(), stage = %err.stage(), pass = ?err.pass(), "shred aborted");
                Err(err).with_context(|| format!("failed to shred: {}", path.display()))
            }
        }
    }

    fn run(path: &Path, options: ShredOptions, quiet: bool) -> Result<Summary, ShredError> {
        let passes = options.passes().get();

        Shredder::new(options).shred(path, |target| {
            let file = RealFile::open(target)?;
            let bar = (!quiet).then(|| Bar::new(0, &format!("Pass 1/{passes}")));
            Ok(Tracked::new(file, bar, passes))
        })
    }
}
