//! `attrs-check`: validate a form definition file

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod definition;
mod report;

use definition::FormDefinition;

const EXIT_INVALID: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn cli() -> Command {
    Command::new("attrs-check")
        .version(attrs_bag::VERSION)
        .about("Validate form data against declared fields and patterns")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Tracing filter, e.g. `debug` or `attrs_bag=trace` (defaults to RUST_LOG, then `warn`)"),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a TOML or JSON form definition")
                .arg(
                    Arg::new("definition")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to the form definition"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}

fn init_tracing(level: Option<&str>) {
    let filter = level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns `true` when every field is valid
fn run_check(path: &Path, json: bool, out: &mut impl Write) -> anyhow::Result<bool> {
    let definition = FormDefinition::load(path)?;
    let form = definition.build()?;
    let result = form.validate();

    if json {
        writeln!(out, "{}", report::render_json(&result)?)?;
    } else {
        write!(out, "{}", report::render_text(&result, form.len()))?;
    }

    tracing::info!(
        path = %path.display(),
        failed = result.len(),
        "checked form definition"
    );
    Ok(!result.has_errors())
}

fn dispatch(matches: &ArgMatches) -> i32 {
    match matches.subcommand() {
        Some(("check", args)) => {
            let Some(path) = args.get_one::<PathBuf>("definition") else {
                return EXIT_ERROR;
            };
            let json = args.get_flag("json");

            match run_check(path, json, &mut std::io::stdout().lock()) {
                Ok(true) => 0,
                Ok(false) => EXIT_INVALID,
                Err(e) => {
                    tracing::error!("check failed: {e:#}");
                    eprintln!("error: {e:#}");
                    EXIT_ERROR
                }
            }
        }
        _ => EXIT_ERROR,
    }
}

fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_one::<String>("log-level").map(String::as_str));
    std::process::exit(dispatch(&matches));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition_file(suffix: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn parses_check_arguments() {
        let matches = cli()
            .try_get_matches_from(["attrs-check", "--log-level", "debug", "check", "form.toml", "--json"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("log-level").map(String::as_str),
            Some("debug")
        );
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "check");
        assert!(args.get_flag("json"));
    }

    #[test]
    fn valid_definition_passes() {
        let file = definition_file(".toml", "fields = [\"a\"]\n[values]\na = \"A\"\n");
        let mut out = Vec::new();
        assert!(run_check(file.path(), false, &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "ok: 1 field(s) valid\n");
    }

    #[test]
    fn invalid_definition_reports_failures() {
        let file = definition_file(
            ".toml",
            "fields = [\"code\"]\n[values]\ncode = \"xABC\"\n\n[[validators]]\nfield = \"code\"\npattern = \"^A\"\nmessage = \"must start with A\"\n",
        );
        let mut out = Vec::new();
        assert!(!run_check(file.path(), true, &mut out).unwrap());
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["errors"]["code"]["error"], "must start with A");
    }

    #[test]
    fn unknown_field_is_an_error() {
        let file = definition_file(".json", r#"{"fields": ["a"], "values": {"c": "C"}}"#);
        let err = run_check(file.path(), false, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("key 'c' is not present"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = run_check(Path::new("/nonexistent/form.toml"), false, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
