//! vg-lite-testgen CLI
//!
//! Usage:
//!   vg-lite-testgen [OPTIONS] [TEST_NAME]
//!
//! With a test name, generates `vg_lite_test_case_<TEST_NAME>.c` from the
//! template. The `vg_lite_test_case.inc` index is rebuilt on every run.
//!
//! Options:
//!   -c, --config <FILE>  Naming conventions override (TOML format)
//!   -v, --verbose        Log each scanned file to stderr
//!   -h, --help           Print usage and exit with a non-zero status

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

use vg_lite_testgen::{logging, run, CaseOutcome, LinePrompt, Naming};

#[derive(Parser)]
#[command(name = "vg-lite-testgen")]
#[command(about = "Generate a vg_lite test case from the template and refresh the test case index")]
#[command(disable_help_flag = true)]
struct Cli {
    /// Test case name; when omitted only the index is rebuilt
    test_name: Option<String>,

    /// Naming conventions override (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log each scanned file to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print usage
    #[arg(short, long)]
    help: bool,
}

fn main() {
    // Extra positionals are rejected by clap with a usage error (status 2)
    let cli = Cli::parse();

    if cli.help {
        // Help counts as a usage error for this tool
        let _ = Cli::command().print_help();
        std::process::exit(1);
    }

    logging::init(cli.verbose);

    let naming = match &cli.config {
        Some(path) => match Naming::from_file(path) {
            Ok(n) => n,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Naming::default(),
    };

    let mut prompt = LinePrompt::stdio();
    let report = match run(Path::new("."), &naming, cli.test_name.as_deref(), &mut prompt) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &report.case {
        Some(CaseOutcome::Created { path, .. }) => {
            println!("Test file generated: {}", display_name(path));
        }
        Some(CaseOutcome::Declined { .. }) => println!("Operation canceled."),
        Some(CaseOutcome::MissingTemplate { path }) => {
            println!("Template file '{}' does not exist.", display_name(path));
        }
        None => {}
    }

    println!(
        "Updated {} with {} entries.",
        display_name(&report.index.path),
        naming.item_macro
    );
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
