//! Command-line interface for nest
//!
//! Prints a prompt, reads exactly one line from stdin, and prints the normalized expression.
//!
//! Usage:
//!   nest                                  - Legacy mode, text output
//!   nest --strict                         - Report malformed input instead of recovering
//!   nest --format `<format>`              - Output format (text, json, yaml, treeviz)
//!   nest --config `<path>`                - Layer a TOML config file over the defaults
//!   nest --list-formats                   - List available output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use nest::nest::config::{Loader, NestConfig};
use nest::nest::formats::FormatRegistry;
use nest::nest::processor::Processor;

fn main() {
    let matches = Command::new("nest")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize a parenthesized expression read from stdin")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'text', 'json', 'yaml', 'treeviz')"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on malformed input instead of recovering silently")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-prompt")
                .long("no-prompt")
                .help("Do not print the input prompt")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    handle_process_command(config);
}

/// Layer the config file and CLI flags over the embedded defaults
fn load_config(matches: &ArgMatches) -> Result<NestConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("strict") {
        loader = loader.set_override("parsing.mode", "strict")?;
    }
    if matches.get_flag("no-prompt") {
        loader = loader.set_override("output.show_prompt", false)?;
    }
    loader.build()
}

/// Prompt, read one line, print one result
fn handle_process_command(config: NestConfig) {
    let show_prompt = config.output.show_prompt;
    let prompt = config.output.prompt.clone();

    let processor = Processor::new(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        let formats = FormatRegistry::with_defaults().list_formats();
        eprintln!("Available formats: {}", formats.join(", "));
        std::process::exit(1);
    });

    if show_prompt {
        println!("{}", prompt);
    }

    let stdin = std::io::stdin();
    let output = processor
        .process_line_from(&mut stdin.lock())
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
        }
    }
}
