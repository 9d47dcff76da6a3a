//! Cellfold CLI - collapses empty documentation table cells into column spans

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
use cellfold::{collapse_html_with_report, format_report, FoldOptions, FoldReport};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "cfold")]
#[command(version)]
#[command(about = "Cellfold - collapses empty documentation table cells into column spans", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Rewrite the input file in place
    #[arg(short = 'i', long)]
    in_place: bool,

    /// Content marker class scoping the pass (repeatable; defaults to the
    /// docutils/Sphinx/RTD content markers)
    #[arg(short, long)]
    scope: Vec<String>,

    /// Process every table, ignoring content markers
    #[arg(long)]
    all: bool,

    /// Report what would change without writing output; exit 1 if anything would
    #[arg(long)]
    check: bool,

    /// Use colored output (for reports)
    #[arg(long, default_value_t = true)]
    color: bool,

    /// Quiet mode: suppress the fold report on stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Report rows that would fold, without writing output
    Check {
        /// Input file to check
        input: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Content marker class (repeatable)
        #[arg(short, long)]
        scope: Vec<String>,

        /// Check every table, ignoring content markers
        #[arg(long)]
        all: bool,
    },

    /// Fold a single document (default action)
    Fold {
        /// Input file path
        input: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// Content marker class (repeatable)
        #[arg(short, long)]
        scope: Vec<String>,

        /// Fold every table, ignoring content markers
        #[arg(long)]
        all: bool,
    },

    /// Batch fold a directory of rendered pages
    Batch {
        /// Input directory
        input: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// Content marker class (repeatable)
        #[arg(short, long)]
        scope: Vec<String>,

        /// Fold every table, ignoring content markers
        #[arg(long)]
        all: bool,

        /// File extension filter for input files (default: html and htm)
        #[arg(short, long)]
        extension: Option<String>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    // Read input
    let (input, filename) = read_input(cli.input_file.as_deref())?;

    let options = build_options(cli.scope, cli.all);

    // If check mode, analyze and report without writing
    if cli.check {
        let (_, report) = run_fold(&input, &options);
        println!("{}", format_report(&report, cli.color));
        if !report.is_noop() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let (result, report) = run_fold(&input, &options);

    // Print the pass report to stderr (unless quiet mode)
    if !cli.quiet {
        eprintln!("{}", format_report(&report, cli.color));
    }

    // Output
    if cli.in_place {
        match filename {
            Some(path) => {
                fs::write(&path, &result)?;
                eprintln!("✓ Rewritten in place: {}", path);
            }
            None => {
                eprintln!("✗ --in-place requires an input file");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::Check {
            input,
            no_color,
            scope,
            all,
        } => {
            let (content, _) = read_input(input.as_deref())?;
            let options = build_options(scope, all);

            let (_, report) = run_fold(&content, &options);
            println!("{}", format_report(&report, !no_color));

            if !report.is_noop() {
                std::process::exit(1);
            }
        }

        Commands::Fold {
            input,
            output,
            scope,
            all,
        } => {
            let (content, _) = read_input(input.as_deref())?;
            let options = build_options(scope, all);

            let (result, report) = run_fold(&content, &options);
            eprintln!("{}", format_report(&report, true));

            match output {
                Some(path) => {
                    let mut file = fs::File::create(&path)?;
                    writeln!(file, "{}", result)?;
                    eprintln!("✓ Output written to: {}", path);
                }
                None => {
                    println!("{}", result);
                }
            }
        }

        Commands::Batch {
            input,
            output_dir,
            scope,
            all,
            extension,
        } => {
            // Create output directory if it doesn't exist
            fs::create_dir_all(&output_dir)?;

            let options = build_options(scope, all);

            // Find input files
            let input_path = Path::new(&input);
            let files: Vec<_> = if input_path.is_dir() {
                fs::read_dir(input_path)?
                    .filter_map(|e| e.ok())
                    .filter(|e| {
                        let path = e.path();
                        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
                        match extension {
                            Some(ref wanted) => ext == wanted.as_str(),
                            None => ext == "html" || ext == "htm",
                        }
                    })
                    .map(|e| e.path())
                    .collect()
            } else {
                // Single file
                vec![input_path.to_path_buf()]
            };

            let mut totals = FoldReport::new();
            let mut success_count = 0;
            let mut error_count = 0;

            for file_path in files {
                let filename = file_path
                    .file_name()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output.html");
                let output_path = Path::new(&output_dir).join(filename);

                match fs::read_to_string(&file_path) {
                    Ok(content) => match collapse_html_with_report(&content, &options) {
                        Ok((result, report)) => match fs::write(&output_path, &result) {
                            Ok(_) => {
                                eprintln!("✓ {} ({})", output_path.display(), report);
                                totals.absorb(&report);
                                success_count += 1;
                            }
                            Err(e) => {
                                eprintln!("✗ {} - write error: {}", output_path.display(), e);
                                error_count += 1;
                            }
                        },
                        Err(e) => {
                            eprintln!("✗ {} - {}", file_path.display(), e);
                            error_count += 1;
                        }
                    },
                    Err(e) => {
                        eprintln!("✗ {} - read error: {}", file_path.display(), e);
                        error_count += 1;
                    }
                }
            }

            eprintln!(
                "\nBatch fold complete: {} succeeded, {} failed ({})",
                success_count, error_count, totals
            );

            if error_count > 0 {
                std::process::exit(1);
            }
        }

        Commands::Info => {
            println!("Cellfold - collapses empty documentation table cells into column spans");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Folds empty-cell runs into the preceding cell's colspan");
            println!("  ✓ Scoped to documentation content markers (docutils, Sphinx, RTD)");
            println!("  ✓ Check mode for CI (exit 1 when a page would change)");
            println!("  ✓ Batch directory processing");
            println!("  ✓ stdin/stdout pipelines and in-place rewrites");
            println!();
            println!("Default content markers:");
            for class in cellfold::DEFAULT_SCOPE_CLASSES.iter() {
                println!("  - .{}", class);
            }
            println!();
            println!("Repository: https://github.com/cellfold/cellfold");
            println!();
        }
    }

    Ok(())
}

/// Read from a file when a path is given, stdin otherwise
#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<(String, Option<String>)> {
    match path {
        Some(path) => Ok((fs::read_to_string(path)?, Some(path.to_string()))),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok((buffer, None))
        }
    }
}

#[cfg(feature = "cli")]
fn build_options(scope: Vec<String>, all: bool) -> FoldOptions {
    let mut options = FoldOptions::default();
    if !scope.is_empty() {
        options.scope_classes = scope;
    }
    options.all_tables = all;
    options
}

/// Run the pass, treating configuration errors as fatal
#[cfg(feature = "cli")]
fn run_fold(input: &str, options: &FoldOptions) -> (String, FoldReport) {
    match collapse_html_with_report(input, options) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install cellfold --features cli");
    eprintln!("  cfold [OPTIONS] [INPUT_FILE]");
}
