//! These structs provide the CLI interface for the expenses CLI.

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// expenses: a command-line expense tracker.
///
/// Records dated expense entries in a local CSV file, optionally mirrors
/// them to a remote document collection over HTTP, and produces category
/// reports and two-sheet spreadsheet exports.
///
/// Start with 'expenses init', then record entries with 'expenses add'.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the data directory, the configuration file and the CSV
    /// store with its header row.
    ///
    /// This is the first command you should run. Pass --remote-url if
    /// you want 'sync' and mirrored adds; without it the tracker is
    /// local-only.
    Init(InitArgs),

    /// Record one expense in the local store (and the remote collection
    /// when one is configured).
    Add(AddArgs),

    /// Print every recorded expense, oldest first.
    List,

    /// Aggregate expenses by category and draw charts.
    Report(ReportArgs),

    /// Export all expenses to a two-sheet XLSX workbook.
    Export(ExportArgs),

    /// Push local records to the remote collection, or pull the remote
    /// collection down over the local store.
    Sync(SyncArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where expense data and configuration are held.
    /// Defaults to ~/expenses
    #[arg(long, env = "EXPENSES_HOME", default_value_t = default_expenses_home())]
    expenses_home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, expenses_home: PathBuf) -> Self {
        Self {
            log_level,
            expenses_home: expenses_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn expenses_home(&self) -> &DisplayPath {
        &self.expenses_home
    }
}

/// Args for the `expenses init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// The URL of the remote document collection used for sync, e.g.
    /// https://example.com/api/collections/expenses
    #[arg(long)]
    remote_url: Option<String>,

    /// Bearer token sent with every remote request.
    #[arg(long)]
    remote_token: Option<String>,
}

impl InitArgs {
    pub fn new(remote_url: Option<String>, remote_token: Option<String>) -> Self {
        Self {
            remote_url,
            remote_token,
        }
    }

    pub fn remote_url(&self) -> Option<&str> {
        self.remote_url.as_deref()
    }

    pub fn remote_token(&self) -> Option<&str> {
        self.remote_token.as_deref()
    }
}

/// Args for the `expenses add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// Expense category, e.g. Groceries. Categories are grouped by
    /// exact match; case and whitespace variants are distinct.
    category: String,

    /// Expense amount. Must parse as a number; a leading '$' is
    /// accepted.
    amount: String,

    /// Free-text description.
    description: String,

    /// Date of the expense as YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// Do not mirror this record to the remote collection even when one
    /// is configured.
    #[arg(long)]
    local_only: bool,
}

impl AddArgs {
    pub fn new(
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
        date: Option<String>,
        local_only: bool,
    ) -> Self {
        Self {
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
            date,
            local_only,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn local_only(&self) -> bool {
        self.local_only
    }
}

/// Args for the `expenses report` command.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    /// Which chart to draw: "bar", "pie" or "both"
    #[arg(long, default_value_t = ChartKind::Both)]
    chart: ChartKind,
}

impl ReportArgs {
    pub fn new(chart: ChartKind) -> Self {
        Self { chart }
    }

    pub fn chart(&self) -> ChartKind {
        self.chart
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Pie,
    #[default]
    Both,
}

serde_plain::derive_display_from_serialize!(ChartKind);
serde_plain::derive_fromstr_from_deserialize!(ChartKind);

/// Args for the `expenses export` command.
#[derive(Debug, Parser, Clone)]
pub struct ExportArgs {
    /// Destination path for the workbook, e.g. report.xlsx. When
    /// omitted the command does nothing.
    path: Option<PathBuf>,
}

impl ExportArgs {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Args for the `expenses sync` command.
#[derive(Debug, Parser, Clone)]
pub struct SyncArgs {
    /// The direction to sync: "up" pushes every local record to the
    /// remote collection (records carry no identifier, so repeating it
    /// duplicates them all); "down" overwrites the local store with the
    /// remote contents.
    direction: UpDown,
}

impl SyncArgs {
    pub fn new(direction: UpDown) -> Self {
        Self { direction }
    }

    pub fn direction(&self) -> UpDown {
        self.direction
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpDown {
    Up,
    #[default]
    Down,
}

serde_plain::derive_display_from_serialize!(UpDown);
serde_plain::derive_fromstr_from_deserialize!(UpDown);

fn default_expenses_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("expenses"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --expenses-home or EXPENSES_HOME instead of relying on the \
                default expenses home directory. If you continue using the program right now, you \
                may have problems!",
            );
            PathBuf::from("expenses")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_kind_round_trip() {
        assert_eq!(ChartKind::from_str("bar").unwrap(), ChartKind::Bar);
        assert_eq!(ChartKind::Pie.to_string(), "pie");
    }

    #[test]
    fn test_up_down_round_trip() {
        assert_eq!(UpDown::from_str("up").unwrap(), UpDown::Up);
        assert_eq!(UpDown::Down.to_string(), "down");
    }

    #[test]
    fn test_parse_add() {
        let args =
            Args::try_parse_from(["expenses", "add", "Food", "12.50", "lunch", "--date", "2025-01-02"])
                .unwrap();
        match args.command() {
            Command::Add(add) => {
                assert_eq!(add.category(), "Food");
                assert_eq!(add.amount(), "12.50");
                assert_eq!(add.description(), "lunch");
                assert_eq!(add.date(), Some("2025-01-02"));
                assert!(!add.local_only());
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_sync_direction() {
        let args = Args::try_parse_from(["expenses", "sync", "up"]).unwrap();
        match args.command() {
            Command::Sync(sync) => assert_eq!(sync.direction(), UpDown::Up),
            other => panic!("expected sync, got {other:?}"),
        }
    }
}
