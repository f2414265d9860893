use std::{
    fs::{self, OpenOptions},
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use educator_core::{Educated, EducateFailure, Options, educate_bytes};

/// Curls straight quotes in Markdown with embedded HTML
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to read; standard input when absent
    file: Option<PathBuf>,

    /// Rewrite FILE in place instead of printing to standard output
    #[arg(short, long, requires = "file")]
    write: bool,

    /// Word ending that keeps a single-quoted span open after an apostrophe (repeatable)
    #[arg(long = "contraction-stem", value_name = "STEM")]
    contraction_stems: Vec<String>,

    /// Treat a leading `---` as ordinary text instead of YAML front matter
    #[arg(long)]
    no_front_matter: bool,

    /// Print the output of a document with an unclosed quote or code span instead of failing
    #[arg(long)]
    allow_unterminated: bool,
}

impl Args {
    fn options(&self) -> Options {
        Options::default()
            .with_contraction_stems(self.contraction_stems.iter().cloned())
            .with_front_matter(!self.no_front_matter)
    }

    fn source_name(&self) -> String {
        self.file
            .as_ref()
            .map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string())
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let output = transform(&input, &args.options(), args.allow_unterminated)
        .with_context(|| format!("failed to educate {}", args.source_name()))?;

    match &args.file {
        Some(path) if args.write => write_in_place(path, &output),
        _ => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write to stdout")
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn transform(
    input: &[u8],
    options: &Options,
    allow_unterminated: bool,
) -> Result<String, EducateFailure> {
    match educate_bytes(input, options) {
        Ok(Educated {
            output,
            diagnostics,
        }) => {
            log::debug!("{} warning(s)", diagnostics.count());
            Ok(output)
        }
        Err(EducateFailure { partial, error, .. }) if allow_unterminated && error.is_unterminated() => {
            log::warn!("{error}; writing output anyway");
            Ok(partial)
        }
        Err(failure) => Err(failure),
    }
}

/// Replaces the file's contents only once the whole transform has succeeded.
fn write_in_place(path: &Path, output: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to open {} for writing", path.display()))?;
    file.write_all(output.as_bytes())
        .and_then(|()| file.sync_all())
        .with_context(|| format!("failed to write {}", path.display()))
}
