use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use dotjson::{JsonObject, KeyPath};
use serde_json::Value;
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

/// Run `cli` against its input document, printing results to `out`.
///
/// Path arguments are parsed strictly: empty paths and empty segments are
/// rejected with `DotJsonError::InvalidPath`.
pub fn execute(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let config = cli.path_config();
    let mut doc = load_document(cli.file.as_deref())?;
    match &cli.command {
        Command::Get(args) => {
            let path = KeyPath::parse_strict(&args.path, config.separator)?;
            cmd_get(&doc, &path, &cli.format, out)
        }
        Command::Contains(args) => {
            let path = KeyPath::parse_strict(&args.path, config.separator)?;
            cmd_contains(&doc, &path, &cli.format, out)
        }
        Command::Put(args) => {
            let path = KeyPath::parse_strict(&args.path, config.separator)?;
            doc.put_at(&path, parse_value(&args.value), &config);
            write_document(&doc, &args.write, cli.file.as_deref(), out)
        }
        Command::Remove(args) => {
            let path = KeyPath::parse_strict(&args.path, config.separator)?;
            if doc.put_at(&path, Value::Null, &config).is_none() {
                debug!(%path, "nothing to remove");
            }
            write_document(&doc, &args.write, cli.file.as_deref(), out)
        }
        Command::Keys(args) => {
            let path = match &args.path {
                Some(raw) => Some(KeyPath::parse_strict(raw, config.separator)?),
                None => None,
            };
            cmd_keys(&doc, path.as_ref(), &cli.format, out)
        }
    }
}

fn load_document(file: Option<&Path>) -> anyhow::Result<JsonObject> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };
    let doc = JsonObject::from_json_str(&text).context("input is not a JSON object")?;
    debug!(keys = doc.len(), "loaded document");
    Ok(doc)
}

/// Parse a command-line value as JSON, falling back to a plain string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn render(value: &Value, format: &OutputFormat) -> String {
    match (format, value) {
        (OutputFormat::Text, Value::String(s)) => s.clone(),
        _ => value.to_string(),
    }
}

fn cmd_get(
    doc: &JsonObject,
    path: &KeyPath<'_>,
    format: &OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match doc.get_at(path) {
        Some(value) => {
            writeln!(out, "{}", render(value, format))?;
            Ok(())
        }
        None => bail!("{path}: not found"),
    }
}

fn cmd_contains(
    doc: &JsonObject,
    path: &KeyPath<'_>,
    format: &OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let found = doc.contains_at(path);
    match format {
        OutputFormat::Json => writeln!(out, "{found}")?,
        OutputFormat::Text if found => writeln!(out, "{}", "true".green())?,
        OutputFormat::Text => writeln!(out, "{}", "false".red())?,
    }
    Ok(())
}

fn cmd_keys(
    doc: &JsonObject,
    path: Option<&KeyPath<'_>>,
    format: &OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let keys: Vec<&String> = match path {
        None => doc.keys().collect(),
        Some(path) => match doc.get_at(path) {
            Some(Value::Object(map)) => map.keys().collect(),
            Some(_) => bail!("{path}: not an object"),
            None => bail!("{path}: not found"),
        },
    };
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&keys)?)?,
        OutputFormat::Text => {
            for key in keys {
                writeln!(out, "{}", key.bold())?;
            }
        }
    }
    Ok(())
}

fn write_document(
    doc: &JsonObject,
    args: &WriteArgs,
    input: Option<&Path>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let text = if args.pretty {
        doc.to_pretty_string()?
    } else {
        doc.to_string()
    };
    let target = match (&args.output, args.in_place) {
        (Some(path), _) => Some(path.as_path()),
        (None, true) => match input {
            Some(path) => Some(path),
            None => bail!("--in-place requires --file"),
        },
        (None, false) => None,
    };
    match target {
        Some(path) => {
            fs::write(path, format!("{text}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("{} Wrote {}", "✓".green().bold(), path.display().to_string().bold());
        }
        None => writeln!(out, "{text}")?,
    }
    Ok(())
}
