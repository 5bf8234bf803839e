use std::path::PathBuf;

use analyzer::{
    analyze_files,
    errors::errors::{Error, ErrorImpl, ErrorTip},
    load_template,
    report::{
        counts::Counts,
        report::{render, ReportFormat},
        template::Locale,
    },
    STDIN_PATH,
};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Counts the tokens of a source text by category", long_about = None)]
struct Cli {
    /// Source files to analyze; reads stdin when none are given
    files: Vec<PathBuf>,

    /// Report format: text or json
    #[arg(short, long, default_value = "text")]
    format: ReportFormat,

    /// Built-in report labels: en or es
    #[arg(short, long, default_value = "en")]
    locale: Locale,

    /// JSON file overriding report labels, e.g. {"keyword": "Reserved words"}
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let template = load_template(cli.locale, cli.template.as_deref())?;

    let files = if cli.files.is_empty() {
        vec![PathBuf::from(STDIN_PATH)]
    } else {
        cli.files.clone()
    };

    debug!("Analyzing {} source(s)", files.len());

    let (results, total) = analyze_files(&files)?;

    let emit = |path: &PathBuf, counts: &Counts| -> Result<(), Error> {
        let report = render(counts, &template, cli.format).map_err(|e| {
            Error::new(
                ErrorImpl::RenderReport {
                    message: e.to_string(),
                },
                path.clone(),
            )
        })?;
        if report.ends_with('\n') {
            print!("{}", report);
        } else {
            println!("{}", report);
        }
        Ok(())
    };

    if let [(path, counts)] = results.as_slice() {
        return emit(path, counts);
    }

    for (path, counts) in &results {
        println!("-> {}", path.to_string_lossy());
        emit(path, counts)?;
        println!();
    }

    println!("-> Total");
    emit(&PathBuf::from("Total"), &total)?;

    info!("{} lexemes across {} sources", total.total(), results.len());

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run(&cli) {
        display_error(&error);
        std::process::exit(1);
    }
}

fn display_error(error: &Error) {
    /*
        Error: ReadSource (Check that the file exists and is valid UTF-8)
        -> missing.txt
           failed to read source: No such file or directory (os error 2)
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error.get_path().to_string_lossy());
    eprintln!("   {}", error.get_internal_error());
}
