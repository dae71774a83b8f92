use clap::Parser;
use colored::Colorize;
use endzeit_common::TestCase;
use glob::glob;
use std::path::PathBuf;

mod test_runner;
use test_runner::{TestResult, TestRunner};

/// Runs the markdown compatibility tests against an endzeit binary

#[derive(Parser, Debug)]
struct Args {
    /// Path to the endzeit binary
    runtime: PathBuf,

    /// Glob selecting the compatibility tests
    #[arg(default_value = "compatibility-tests/*.md")]
    compatibility_tests: String,
}

fn main() {
    let args = Args::parse();

    let paths = match get_compatibility_tests(&args.compatibility_tests) {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("Invalid pattern `{}`: {}", args.compatibility_tests, err);
            std::process::exit(1);
        }
    };

    let runner = TestRunner::from_path(args.runtime);
    let mut passed = 0;
    let mut failed = 0;
    let mut skipped = 0;

    for path in paths {
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                println!("{} {}: {}", "ERROR".red(), path.display(), err);
                failed += 1;
                continue;
            }
        };
        let test_case = match TestCase::from_string(&content, &path) {
            Ok(test_case) => test_case,
            Err(err) => {
                println!("{} {}: {}", "ERROR".red(), path.display(), err);
                failed += 1;
                continue;
            }
        };

        if test_case.disabled {
            println!("{} {}", "SKIP".yellow(), test_case.name);
            skipped += 1;
            continue;
        }

        let name = test_case.name.clone();
        match runner.run(test_case) {
            TestResult::Pass => {
                println!("{} {}", "PASS".green(), name);
                passed += 1;
            }
            TestResult::Fail { expected, actual } => {
                println!("{} {}", "FAIL".red().bold(), name);
                if let Some(expected) = expected {
                    println!("  expected:\n{}", indent(&expected));
                }
                println!("  actual:\n{}", indent(&actual));
                failed += 1;
            }
        }
    }

    println!("\n{} passed, {} failed, {} skipped", passed, failed, skipped);
    if failed > 0 {
        std::process::exit(1);
    }
}

fn get_compatibility_tests(pattern: &str) -> Result<Vec<PathBuf>, glob::PatternError> {
    let mut paths: Vec<PathBuf> = glob(pattern)?.filter_map(Result::ok).collect();
    paths.sort();
    Ok(paths)
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
