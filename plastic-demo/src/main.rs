mod error;
mod model;
mod page;

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use error::DemoError;
use model::{load_rows, sample_rows};
use page::{Format, Page, SortColumn};

/// Render the material stock table after filtering and clicking sort buttons.
#[derive(Debug, Parser)]
#[command(name = "plastic-demo", version)]
struct Args {
    /// JSON array of stock rows; built-in sample rows when omitted
    #[arg(long)]
    rows: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Sort button to click, in order (repeatable)
    #[arg(long = "click", value_enum)]
    clicks: Vec<SortColumn>,

    /// Production method to select in the filter (repeatable)
    #[arg(long = "method")]
    methods: Vec<String>,

    /// Material type to select in the filter (repeatable)
    #[arg(long = "type")]
    types: Vec<String>,

    /// Also show consumed stock
    #[arg(long)]
    include_consumed: bool,

    /// Log file path
    #[arg(long, default_value = "plastic-demo.log")]
    log_file: PathBuf,
}

fn run(args: &Args) -> Result<String, DemoError> {
    let log_file = File::create(&args.log_file)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let rows = match &args.rows {
        Some(path) => load_rows(path)?,
        None => sample_rows(),
    };
    info!("Loaded {} stock rows", rows.len());

    let mut page = Page::build(rows)?;
    let (methods, types) = (page.methods, page.types);
    page.select_values(methods, &args.methods)?;
    page.select_values(types, &args.types)?;
    page.apply_filters(args.include_consumed)?;

    for &column in &args.clicks {
        page.click(column)?;
    }

    page.render(args.format)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
