use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use tracing::warn;
use visuals_rs::interaction::{UserEvent, WidgetInput};
use visuals_rs::render::{JsonRenderer, Renderer, TextRenderer};
use visuals_rs::telemetry::init_tracing_with_default;
use visuals_rs::{DashboardApp, DashboardConfig, DashboardError, DashboardResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Render the data visualizations page from a CSV table and a JSON document.
#[derive(Parser, Debug)]
#[command(name = "visuals", version)]
struct Cli {
    /// Tabular input with `Category` and `Value` columns
    #[arg(long, default_value = "data.csv", value_hint = ValueHint::FilePath)]
    csv: PathBuf,

    /// Document input holding `data[*].value`
    #[arg(long, default_value = "data.json", value_hint = ValueHint::FilePath)]
    json: PathBuf,

    /// Category to select in the second graph
    #[arg(long)]
    select: Option<String>,

    /// Number of document points to show in the third graph
    #[arg(long)]
    points: Option<usize>,

    /// Output format for each render pass
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Rows shown in the table preview
    #[arg(long, default_value_t = 5)]
    preview_rows: usize,

    /// Keep the session open and read `select <category>`, `points <n>`,
    /// `refresh` or `quit` commands from stdin
    #[arg(long, action = ArgAction::SetTrue)]
    interactive: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Event(UserEvent),
    Quit,
}

fn main() {
    let _ = init_tracing_with_default("warn");
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> DashboardResult<()> {
    let config = DashboardConfig::new(cli.csv, cli.json).with_preview_rows(cli.preview_rows);
    let renderer: Box<dyn Renderer> = match cli.format {
        OutputFormat::Text => Box::new(TextRenderer::new(io::stdout())),
        OutputFormat::Json => Box::new(JsonRenderer::new(io::stdout())),
    };
    let mut app = DashboardApp::new(renderer, config)?;

    let initial = WidgetInput {
        category: cli.select,
        num_points: cli.points,
    };
    app.run_pass(&initial)?;

    if !cli.interactive {
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|source| DashboardError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
        match parse_command(&line) {
            Ok(Some(Command::Event(event))) => {
                app.handle(event)?;
            }
            Ok(Some(Command::Quit)) => break,
            Ok(None) => {}
            Err(message) => warn!(input = %line.trim(), "{message}"),
        }
    }
    Ok(())
}

fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, argument) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));
    match verb {
        "select" if !argument.is_empty() => Ok(Some(Command::Event(UserEvent::SelectCategory(
            argument.to_owned(),
        )))),
        "points" => argument
            .parse::<usize>()
            .map(|count| Some(Command::Event(UserEvent::SetNumPoints(count))))
            .map_err(|err| format!("invalid point count: {err}")),
        "refresh" => Ok(Some(Command::Event(UserEvent::Refresh))),
        "quit" | "exit" => Ok(Some(Command::Quit)),
        _ => Err("usage: select <category> | points <n> | refresh | quit".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_session_commands() {
        assert_eq!(
            parse_command("select  North America "),
            Ok(Some(Command::Event(UserEvent::SelectCategory(
                "North America".to_owned()
            ))))
        );
        assert_eq!(
            parse_command("points 7"),
            Ok(Some(Command::Event(UserEvent::SetNumPoints(7))))
        );
        assert_eq!(
            parse_command("refresh"),
            Ok(Some(Command::Event(UserEvent::Refresh)))
        );
        assert_eq!(parse_command("quit"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("exit\n"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   \t"), Ok(None));
    }

    #[test]
    fn rejects_malformed_commands() {
        let count = parse_command("points abc").expect_err("non-numeric count");
        assert!(count.starts_with("invalid point count"));
        assert!(parse_command("points").is_err());
        assert!(parse_command("points -1").is_err());

        let usage = parse_command("select").expect_err("missing category");
        assert!(usage.starts_with("usage:"));
        assert!(parse_command("zoom 2").expect_err("unknown verb").starts_with("usage:"));
    }

    #[test]
    fn cli_defaults_match_page_inputs() {
        let cli = Cli::try_parse_from(["visuals"]).expect("defaults");
        assert_eq!(cli.csv, PathBuf::from("data.csv"));
        assert_eq!(cli.json, PathBuf::from("data.json"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.preview_rows, 5);
        assert!(!cli.interactive);

        let cli = Cli::try_parse_from(["visuals", "--format", "json", "--points", "4"])
            .expect("flags");
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.points, Some(4));
    }
}
