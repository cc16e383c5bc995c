//! Command-line interface for bitsy
//! Converts bitsy game data between formats and checks that documents survive a round trip.
//!
//! Usage:
//!   bitsy convert `<path>` [--from `<format>`] [--to `<format>`]  - Convert a document
//!   bitsy check `<path>`                                        - Parse, re-serialize and compare
//!   bitsy list-formats                                        - List available formats
//!
//! Settings come from the embedded defaults, then `bitsy.toml` in the working
//! directory, then the file given with `--config`.

use bitsy::bitsy::config::{BitsyConfig, Loader, LOCAL_CONFIG_FILE};
use bitsy::bitsy::formats::{FormatRegistry, TreevizFormat};
use bitsy::bitsy::{parse, serialize_to_string, Game};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::Path;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("bitsy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and checking bitsy game data")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document between formats")
                .arg(
                    Arg::new("path")
                        .help("Path to the input document")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .short('f')
                        .help("Input format (defaults to the file extension, then the config)"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .help("Output format (e.g., 'bitsy', 'json', 'yaml', 'treeviz')"),
                )
                .arg(
                    Arg::new("show-frames")
                        .long("show-frames")
                        .action(ArgAction::SetTrue)
                        .help("Include frame pixels in treeviz output"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Check that a bitsy document round-trips")
                .arg(
                    Arg::new("path")
                        .help("Path to the bitsy document")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available formats"))
        .get_matches();

    let config = load_config(&matches);

    match matches.subcommand() {
        Some(("convert", convert_matches)) => handle_convert_command(convert_matches, &config),
        Some(("check", check_matches)) => {
            let path = required(check_matches, "path");
            handle_check_command(path);
        }
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| {
            eprintln!("Error: missing <{}>", name);
            process::exit(2);
        })
}

/// Defaults, then `bitsy.toml`, then `--config`, then the convert flags.
fn load_config(matches: &ArgMatches) -> BitsyConfig {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(("convert", convert_matches)) = matches.subcommand() {
        if let Some(to) = convert_matches.get_one::<String>("to") {
            loader = loader.with_output_format(to);
        }
        if convert_matches.get_flag("show-frames") {
            loader = loader.with_show_frames(true);
        }
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        process::exit(1);
    })
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: &BitsyConfig) {
    let path = required(matches, "path");

    let mut registry = FormatRegistry::with_defaults();
    registry.register(TreevizFormat {
        show_frames: config.inspect.show_frames,
    });
    if let Err(e) = config.validate(&registry) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let from = matches
        .get_one::<String>("from")
        .cloned()
        .or_else(|| {
            registry
                .for_path(Path::new(path))
                .map(|f| f.name().to_string())
        })
        .unwrap_or_else(|| config.convert.input_format.clone());
    let to = &config.convert.default_format;
    log::info!("converting {} from {} to {}", path, from, to);

    let source = read_source(path);
    let output = registry.convert(&source, &from, to).unwrap_or_else(|e| {
        eprintln!("Error converting {}: {}", path, e);
        process::exit(1);
    });

    print!("{}", output);
}

fn summary(game: &Game) -> String {
    format!(
        "{} palettes, {} rooms, {} tiles, {} sprites, {} items, {} dialogs, {} variables",
        game.palettes.len(),
        game.rooms.len(),
        game.tiles.len(),
        game.sprites.len(),
        game.items.len(),
        game.dialogs.len(),
        game.variables.len()
    )
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let source = read_source(path);
    let game = parse(&source).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        process::exit(1);
    });

    let reparsed = parse(&serialize_to_string(&game)).unwrap_or_else(|e| {
        eprintln!("{}: serialized output does not parse: {}", path, e);
        process::exit(1);
    });
    if reparsed != game {
        eprintln!("{}: round trip changed the game", path);
        process::exit(1);
    }

    println!("{}: ok ({})", path, summary(&game));
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for format in registry.iter() {
        let mut modes = Vec::new();
        if format.supports_parsing() {
            modes.push("read");
        }
        if format.supports_serialization() {
            modes.push("write");
        }
        let extensions: Vec<String> = format.extensions().iter().map(|e| format!(".{}", e)).collect();
        if extensions.is_empty() {
            println!("  {:<8} {} [{}]", format.name(), format.description(), modes.join("/"));
        } else {
            println!(
                "  {:<8} {} [{}] ({})",
                format.name(),
                format.description(),
                modes.join("/"),
                extensions.join(", ")
            );
        }
    }
}
