mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use lintdoc::generator::PageGenerator;
use lintdoc::{batch, check, config, output};
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            records,
            output_dir,
            examples_dir,
            explanations_dir,
            front_matter,
            pygments,
            fail_fast,
            format,
            output: output_path,
            config: config_path,
        } => {
            if !records.exists() {
                eprintln!("Error: records file does not exist: {}", records.display());
                std::process::exit(2);
            }

            let config = load_config(
                config_path.as_deref(),
                output_dir,
                examples_dir,
                explanations_dir,
                front_matter,
                pygments,
            );

            std::fs::create_dir_all(&config.dirs.output).unwrap_or_else(|e| {
                eprintln!(
                    "Error: cannot create output directory {}: {e}",
                    config.dirs.output.display()
                );
                std::process::exit(2);
            });

            let generator = PageGenerator::from_config(&config);
            let report = batch::run_batch(&records, &generator, fail_fast).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {e}", records.display());
                std::process::exit(2);
            });

            let formatted = output::format_generation(&report, &format);
            emit(&formatted, output_path.as_deref());

            std::process::exit(if report.passed { 0 } else { 1 });
        }

        Commands::Check {
            records,
            examples_dir,
            explanations_dir,
            strict,
            format,
            output: output_path,
            config: config_path,
        } => {
            if !records.exists() {
                eprintln!("Error: records file does not exist: {}", records.display());
                std::process::exit(2);
            }

            let config = load_config(
                config_path.as_deref(),
                None,
                examples_dir,
                explanations_dir,
                false,
                false,
            );

            let report = check::run_check(
                &records,
                &config.dirs.examples,
                &config.dirs.explanations,
                strict,
            )
            .unwrap_or_else(|e| {
                eprintln!("Error reading {}: {e}", records.display());
                std::process::exit(2);
            });

            let formatted = output::format_check(&report, &format);
            emit(&formatted, output_path.as_deref());

            std::process::exit(if report.passed { 0 } else { 1 });
        }

        Commands::Preview {
            records,
            short_name,
            examples_dir,
            explanations_dir,
            front_matter,
            pygments,
            config: config_path,
        } => {
            let content = std::fs::read_to_string(&records).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {e}", records.display());
                std::process::exit(2);
            });

            // Match on the short-name field rather than parsing: preview of a
            // malformed record should report the render error, not "not found".
            let line = content
                .lines()
                .find(|l| l.split('\t').nth(1).map(str::trim) == Some(short_name.as_str()));

            let Some(line) = line else {
                eprintln!("Unknown short name: {short_name}");
                eprintln!("No record in {} has that short-name field.", records.display());
                std::process::exit(2);
            };

            let config = load_config(
                config_path.as_deref(),
                None,
                examples_dir,
                explanations_dir,
                front_matter,
                pygments,
            );

            let generator = PageGenerator::from_config(&config);
            match generator.render_to_string(line) {
                Ok(page) => print!("{page}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Loads the config file and applies CLI overrides. Directory flags replace
/// the configured paths; the two render flags are one-way switches.
fn load_config(
    config_path: Option<&Path>,
    output_dir: Option<PathBuf>,
    examples_dir: Option<PathBuf>,
    explanations_dir: Option<PathBuf>,
    front_matter: bool,
    pygments: bool,
) -> config::Config {
    let mut config = config::Config::load(config_path).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    if let Some(dir) = output_dir {
        config.dirs.output = dir;
    }
    if let Some(dir) = examples_dir {
        config.dirs.examples = dir;
    }
    if let Some(dir) = explanations_dir {
        config.dirs.explanations = dir;
    }
    if front_matter {
        config.render.front_matter = true;
    }
    if pygments {
        config.render.pygments = true;
    }

    config
}

/// Prints the report to stdout or writes it to `path`.
fn emit(formatted: &str, path: Option<&Path>) {
    match path {
        Some(out_path) => {
            std::fs::write(out_path, formatted).unwrap_or_else(|e| {
                eprintln!("Error writing output: {e}");
                std::process::exit(2);
            });
            eprintln!("Output written to {}", out_path.display());
        }
        None => print!("{formatted}"),
    }
}
