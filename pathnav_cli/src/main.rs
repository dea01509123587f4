//! pathnav CLI
//!
//! Entry point for the pathnav command-line tool. Parses one path and prints
//! the result of a single operation on it.

mod args;

use clap::Parser;
use indexmap::IndexMap;
use itertools::Itertools;
use pathnav_core::{Lookup, PathError, PathValue};
use tracing::info;

use args::{Args, Command};

/// Runs one operation and prints its result.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let path = args.path_value();
    info!("Parsed {:?} into {} segments", args.path, path.len());

    println!("{}", render(&path, &args.command)?);
    Ok(())
}

/// Produces the printed output of `command` applied to `path`.
fn render(path: &PathValue, command: &Command) -> Result<String, PathError> {
    let output = match command {
        Command::Show => path.to_string(),
        Command::Count => path.len().to_string(),
        Command::Get { key } => {
            let lookup = match key.parse::<isize>() {
                Ok(index) => path.get(index),
                Err(_) => path.get(key.as_str()),
            };
            match lookup {
                Lookup::Found(segment) => segment.to_string(),
                Lookup::Missing => "<missing>".to_string(),
                Lookup::NotFound => "<not found>".to_string(),
            }
        }
        Command::Slice { offset, length } => path.slice(*offset, *length).to_string(),
        Command::After { pattern } => path.after(pattern)?.to_string(),
        Command::Before { pattern } => path.before(pattern)?.to_string(),
        Command::Between { start, end } => path.between(start, end)?.to_string(),
        Command::RelativeTo { base } => path.relative_to(base.as_str()).to_string(),
        Command::Cd { relative } => path.cd(relative.as_str()).to_string(),
        Command::Map { template } => render_map(&path.map(template)),
        Command::Pairs { offset } => render_map(&path.pairs(*offset)),
        Command::Segments { offset } => path
            .iter_from(*offset)
            .map(|(i, segment)| format!("{i}: {segment}"))
            .join("\n"),
    };
    Ok(output)
}

fn render_map(vars: &IndexMap<String, Option<String>>) -> String {
    vars.iter()
        .map(|(key, value)| format!("{key:?} => {}", value.as_deref().unwrap_or("<missing>")))
        .join("\n")
}
