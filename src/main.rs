use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mdstyle::{Config, StyledText};

#[derive(Parser)]
#[command(name = "mdstyle")]
#[command(about = "Render Markdown files as styled text runs")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Style config file (TOML); the bundled defaults are used otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = Format::Runs)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One line per run: byte range, text and attributes
    Runs,
    /// Text only
    Plain,
    /// Runs as JSON
    Json,
    /// Indented dump of the document model
    Tree,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    // Read input file
    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::compiled_default(),
    };
    log::debug!("rendering {} with {:?}", cli.input.display(), config);

    match cli.format {
        Format::Tree => print!("{}", mdstyle::parse(&markdown)),
        Format::Runs => print_runs(&mdstyle::markdown_to_styled_with_config(&markdown, config)),
        Format::Plain => print!("{}", mdstyle::markdown_to_styled_with_config(&markdown, config)),
        Format::Json => {
            let styled = mdstyle::markdown_to_styled_with_config(&markdown, config);
            match serde_json::to_string_pretty(&styled) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn print_runs(styled: &StyledText) {
    let mut offset = 0;
    for run in styled.runs() {
        let end = offset + run.text.len();
        println!("{:>6}..{:<6} {:?} {}", offset, end, run.text, run.attributes);
        offset = end;
    }
}
