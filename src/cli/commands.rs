//! CLI command implementations
//!
//! Every command follows the same sequence:
//! 1. Configuration load (or defaults)
//! 2. Dataset load (fatal if missing or malformed)
//! 3. Session start
//! 4. Request handling over stdin/stdout
//! 5. Session end

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::dataset::{CsvDataSource, DataSource};
use crate::observability::{log_event_with_fields, Event, Logger};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request, read_requests, write_json, write_raw};
use super::session::Session;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Query { config, base_dir } => query(config.as_deref(), &base_dir),
        Command::Serve { config, base_dir } => serve(config.as_deref(), &base_dir),
        Command::Export { config, base_dir } => export(config.as_deref(), &base_dir),
    }
}

/// Answer a single request and exit
pub fn query(config_path: Option<&Path>, base_dir: &Path) -> CliResult<()> {
    let session = open_session(config_path, base_dir, "query")?;
    let result = query_once(&session, &mut io::stdin().lock(), &mut io::stdout().lock());
    session.close();
    result
}

/// Serve line-delimited requests until EOF
pub fn serve(config_path: Option<&Path>, base_dir: &Path) -> CliResult<()> {
    let session = open_session(config_path, base_dir, "serve")?;
    let result = serve_lines(&session, io::stdin().lock(), &mut io::stdout().lock());
    session.close();
    result.map(|_| ())
}

/// Answer one export request with raw CSV
pub fn export(config_path: Option<&Path>, base_dir: &Path) -> CliResult<()> {
    let session = open_session(config_path, base_dir, "export")?;
    let result = export_once(&session, &mut io::stdin().lock(), &mut io::stdout().lock());
    session.close();
    result
}

fn open_session(
    config_path: Option<&Path>,
    base_dir: &Path,
    command: &'static str,
) -> CliResult<Session<CsvDataSource>> {
    let config = Config::load_or_default(config_path)?;
    Logger::set_min_severity(config.log_severity()?);

    let source_name = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let base = base_dir.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("base_dir", base.as_str()), ("source", source_name.as_str())],
    );

    let source = CsvDataSource::new(config.loader(base_dir));
    Session::open(source, config.handler_settings(), command)
}

/// Reads one request and writes one response line
pub fn query_once<S, R, W>(session: &Session<S>, input: &mut R, output: &mut W) -> CliResult<()>
where
    S: DataSource,
    R: BufRead,
    W: Write,
{
    let request = read_request(input)?;
    let response = session.handler().handle(&request);
    write_json(output, &response.to_json())
}

/// Answers every request line until EOF; returns the number handled
pub fn serve_lines<S, R, W>(session: &Session<S>, input: R, output: &mut W) -> CliResult<usize>
where
    S: DataSource,
    R: BufRead,
    W: Write,
{
    let mut handled = 0;
    for line in read_requests(input) {
        let request = line?;
        let response = session.handler().handle(&request);
        write_json(output, &response.to_json())?;
        handled += 1;
    }
    Ok(handled)
}

/// Reads one export request and writes the CSV body
pub fn export_once<S, R, W>(session: &Session<S>, input: &mut R, output: &mut W) -> CliResult<()>
where
    S: DataSource,
    R: BufRead,
    W: Write,
{
    let request = read_request(input)?;
    let csv = session
        .handler()
        .handle_export(&request)
        .map_err(|e| CliError::request_failed(&e))?;
    write_raw(output, &csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HandlerSettings;
    use crate::dataset::testing::record;
    use crate::dataset::{StaticDataSource, Table};
    use serde_json::Value;
    use std::io::Cursor;

    fn session() -> Session<StaticDataSource> {
        let table = Table::new(vec![
            record("A", "Ludhiana", 20000.0, 70.0),
            record("B", "Patiala", 30000.0, 85.0),
        ]);
        Session::open(StaticDataSource::new(table), HandlerSettings::default(), "test").unwrap()
    }

    fn lines(out: Vec<u8>) -> Vec<Value> {
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_query_once() {
        let s = session();
        let mut input = Cursor::new(
            "{\"op\":\"filter\",\"constraints\":[{\"field\":\"monthly_rent\",\"lte\":25000}]}\n",
        );
        let mut out = Vec::new();
        query_once(&s, &mut input, &mut out).unwrap();

        let responses = lines(out);
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["status"], "ok");
        assert_eq!(responses[0]["data"]["rows"][0]["area_id"], "A");
    }

    #[test]
    fn test_serve_lines_keeps_going_after_errors() {
        let s = session();
        let input = Cursor::new("{\"op\":\"cities\"}\nnot json\n\n{\"op\":\"bogus\"}\n{\"op\":\"filter\"}\n");
        let mut out = Vec::new();

        let handled = serve_lines(&s, input, &mut out).unwrap();
        assert_eq!(handled, 4);

        let responses = lines(out);
        assert_eq!(responses[0]["status"], "ok");
        assert_eq!(responses[1]["code"], "HYPERLOCAL_INVALID_REQUEST");
        assert_eq!(responses[2]["code"], "HYPERLOCAL_UNKNOWN_OPERATION");
        assert_eq!(responses[3]["data"]["count"], 2);

        let snapshot = s.close();
        assert_eq!(snapshot.queries_executed, 2);
        assert_eq!(snapshot.queries_rejected, 2);
    }

    #[test]
    fn test_export_once_writes_raw_csv() {
        let s = session();
        let mut input = Cursor::new(
            "{\"op\":\"export\",\"columns\":[\"area_id\",\"city\"],\"sort\":\"monthly_rent\",\"direction\":\"desc\"}\n",
        );
        let mut out = Vec::new();
        export_once(&s, &mut input, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "area_id,city\nB,Patiala\nA,Ludhiana\n");
    }

    #[test]
    fn test_export_once_rejects_bad_request() {
        let s = session();
        let mut input = Cursor::new("{\"op\":\"export\",\"columns\":[]}\n");
        let mut out = Vec::new();
        let err = export_once(&s, &mut input, &mut out).unwrap_err();
        assert_eq!(err.code_str(), "HYPERLOCAL_EMPTY_SELECTION");
        assert!(out.is_empty());
    }

    #[test]
    fn test_query_missing_dataset_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = query(None, dir.path()).unwrap_err();
        assert_eq!(err.code_str(), "HYPERLOCAL_DATA_NOT_FOUND");
    }
}
