use clap::{Parser, Subcommand};
use endzeit_common::{Config, TextSpeed};
use endzeit_parser::{LoadError, Parsed, Parser as StoryParser};
use endzeit_runtime::{Runtime, View};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod console;
use console::Console;

/// Endzeit - a text adventure through a branching story file

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct StoryArgs {
    /// Path to the story file
    story_path: PathBuf,
    /// Config file (defaults to endzeit.toml next to the story)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Reject malformed lines and choices leading to unknown sections
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a story interactively
    Play {
        #[command(flatten)]
        story: StoryArgs,
        /// Text speed: slow, normal or fast
        #[arg(long)]
        speed: Option<TextSpeed>,
        /// Show text at once instead of typing it out
        #[arg(long)]
        instant: bool,
    },
    /// Run a story with scripted input
    Run {
        #[command(flatten)]
        story: StoryArgs,
        /// Comma-separated list of inputs (e.g., "1,2,r,q")
        #[arg(default_value = "")]
        input_string: String,
    },
    /// List the sections of a story and report problems
    Check {
        #[command(flatten)]
        story: StoryArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Args::parse();

    match cli.command {
        Commands::Play {
            story,
            speed,
            instant,
        } => {
            let mut config = load_config(&story);
            if let Some(speed) = speed {
                config.text_speed = speed;
            }
            let (graph, warnings) = load_story(&story.story_path, &config);
            for warning in warnings {
                eprintln!("{}", warning);
            }

            let runtime = Runtime::with_config(graph, &config);
            if let Err(err) = Console::start(runtime, config.text_speed, !instant) {
                eprintln!("ERROR: {}", err);
                std::process::exit(1);
            }
        }
        Commands::Run {
            story,
            input_string,
        } => {
            let config = load_config(&story);
            let (graph, warnings) = load_story(&story.story_path, &config);

            // Print warnings before running
            for warning in warnings {
                println!("{}", warning);
            }

            let mut runtime = Runtime::with_config(graph, &config);
            render_view(&runtime.current_view());

            for input in input_string.split(',') {
                if !process_input(input.trim(), &mut runtime) {
                    break;
                }
            }
        }
        Commands::Check { story } => {
            let config = load_config(&story);
            let (graph, warnings) = load_story(&story.story_path, &config);
            let runtime = Runtime::with_config(graph, &config);

            for warning in &warnings {
                println!("{}", warning);
            }
            if !runtime.graph.contains(&config.entry_section) {
                println!("WARNING: entry section `{}` is missing", config.entry_section);
            }

            for section in runtime.graph.sections() {
                let is_ending =
                    endzeit_runtime::is_terminal_in(&section.name, &config.terminal_sections);
                let ending = if is_ending {
                    " [ending]"
                } else if !section.has_choices() {
                    " [dead end]"
                } else {
                    ""
                };
                println!(
                    "#{} ({} choices){}",
                    section.name,
                    section.choices.len(),
                    ending
                );
            }
            println!(
                "{} sections, {} warnings",
                runtime.graph.len(),
                warnings.len()
            );
        }
    }
}

fn load_config(story: &StoryArgs) -> Config {
    let result = match &story.config {
        Some(path) => Config::load_file(path),
        None => Config::load(
            story
                .story_path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new(".")),
        ),
    };

    match result {
        Ok(mut config) => {
            config.strict |= story.strict;
            config
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

fn load_story(path: &Path, config: &Config) -> Parsed {
    match StoryParser::new().strict(config.strict).load(path) {
        Ok(parsed) => {
            tracing::debug!(
                path = %path.display(),
                sections = parsed.0.len(),
                warnings = parsed.1.len(),
                "story loaded"
            );
            parsed
        }
        Err(LoadError::Parse(errors)) => {
            println!("{}", errors);
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

fn process_input(input: &str, runtime: &mut Runtime) -> bool {
    match input {
        "" => true, // Ignore empty input
        "q" => {
            println!("QUIT");
            false
        }
        "r" => {
            runtime.reset();
            println!("RESTART");
            render_view(&runtime.current_view());
            true
        }
        _ => {
            match input.parse::<usize>() {
                Ok(choice) => match runtime.choose_option(choice) {
                    Ok(picked) => {
                        println!("Selected: {}", picked.label);
                        render_view(&runtime.current_view());
                    }
                    Err(_) => println!("Invalid option: {}", input),
                },
                Err(_) => println!("Unknown command: {}", input),
            }
            true
        }
    }
}

fn render_view(view: &View) {
    println!("-> {}", view.name);
    for line in view.lines() {
        println!("{}", line);
    }
    for (num, choice) in view.choices.iter().enumerate() {
        println!("  {}. {}", num + 1, choice.label);
    }
    if view.is_terminal {
        println!("END");
    }
}
