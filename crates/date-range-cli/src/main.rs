mod cli;
mod database;
mod logging;
mod menu;

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use date_range::{Clock, FixedClock, RangeSelector, Report, SystemClock};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::database::{ConsoleDatabase, Database};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&cli, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W) -> Result<()> {
    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let today = clock.today();
    debug!(%today, "reference date");

    let selector = match cli.range {
        Some(range) => range,
        None => {
            menu::write_choices(out)?;
            let index = menu::read_choice(input)?;
            RangeSelector::try_from(index)?
        }
    };
    debug!(range = selector.name(), "range selected");

    let report = Report::generate(selector, today, &cli.query_options())?;
    info!(query = %report.query, "generated query");

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &report).context("failed to write report")?;
        writeln!(out)?;
        return Ok(());
    }

    ConsoleDatabase::new(out).execute(&report.query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["daterange"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn run_with(args: &[&str], stdin: &str) -> Result<String> {
        let mut out = Vec::new();
        run(&cli(args), &mut Cursor::new(stdin.to_string()), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_menu_then_query() {
        let out = run_with(&["--today", "2024-08-20"], "2\n").unwrap();
        assert!(out.starts_with(menu::PROMPT));
        assert!(out.ends_with(
            "sending to database: select * from interesting_data where last_updated between '2024-04-01' and '2024-07-01'\n"
        ));
    }

    #[test]
    fn test_range_flag_skips_menu() {
        let out = run_with(&["--today", "2024-03-10", "--range", "0"], "").unwrap();
        assert_eq!(
            out,
            "sending to database: select * from interesting_data where last_updated > '2024-03-03'\n"
        );
    }

    #[test]
    fn test_unsupported_menu_index() {
        let err = run_with(&["--today", "2024-03-10"], "6\n").unwrap_err();
        assert!(err.to_string().contains("Unsupported range: 6"), "got: {err}");
    }

    #[test]
    fn test_json_report() {
        let out = run_with(
            &["--today", "2024-06-15", "--range", "last-year", "--json"],
            "",
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["label"], "Last Year");
        assert_eq!(json["boundary"]["start"], "2023-01-01");
        assert_eq!(json["boundary"]["end"], "2024-01-01");
    }
}
