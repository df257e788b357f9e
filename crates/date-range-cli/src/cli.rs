use chrono::NaiveDate;
use clap::Parser;
use date_range::{QueryOptions, RangeSelector};

/// Report on a date range: pick a range, compute its boundaries, send the query.
#[derive(Parser, Debug)]
#[command(name = "daterange", version, about = "Pick a reporting date range and run its query")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use this date (YYYY-MM-DD) as today instead of the system clock.
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Range to report on, by menu index or name (e.g. 2, last-quarter).
    /// Skips the interactive menu.
    #[arg(short, long, value_name = "RANGE")]
    pub range: Option<RangeSelector>,

    /// Table the query selects from.
    #[arg(long, default_value_t = QueryOptions::default().table)]
    pub table: String,

    /// Date column the query filters on.
    #[arg(long, default_value_t = QueryOptions::default().column)]
    pub column: String,

    /// Print the report as JSON instead of sending the query to the database.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            table: self.table.clone(),
            column: self.column.clone(),
        }
    }
}
