//! Command-line front end over the exported collections.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};

use rentbook_config::{Config, ConfigManager};
use rentbook_core::{
    snapshot_warnings, CoreError, DatePolicy, FiscalYearResolver, PortfolioService,
    ProfitService, TransactionFilter,
};
use rentbook_domain::{ContractStats, Displayable, PortfolioStats, Snapshot, TransactionKind};
use rentbook_storage_json::JsonSnapshotStore;

use crate::{
    report::{self, AmountFormat},
    utils::build_info::BuildInfo,
    RentbookError,
};

#[derive(Parser, Debug)]
#[command(name = "rentbook_cli", version)]
#[command(about = "Profit and portfolio reports for a property back office")]
pub struct Cli {
    /// Directory with properties.json, transactions.json and contracts.json
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Configuration file (default: the per-user rentbook config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Leave records with unreadable dates out of every year
    #[arg(long, global = true)]
    pub strict_dates: bool,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Portfolio-wide profit for a fiscal year
    Profit {
        #[arg(long)]
        year: Option<i32>,
    },

    /// Profit of a single property
    Property {
        /// Property id
        id: String,

        #[arg(long)]
        year: Option<i32>,
    },

    /// Profit of every property, one row each
    Breakdown {
        #[arg(long)]
        year: Option<i32>,
    },

    /// Income and expenses per month
    Monthly {
        #[arg(long)]
        year: Option<i32>,
    },

    /// Fiscal years with at least one transaction
    Years,

    /// Occupancy, collections and contract figures
    Stats,

    /// Contracts with their elapsed term
    Contracts,

    /// Tenants with payment status and current contract
    Tenants,

    /// Search the transaction ledger
    Transactions {
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        /// Case-insensitive text matched against description and category
        #[arg(long)]
        search: Option<String>,
    },

    /// Report duplicate ids, dangling references and unreadable fields
    Check,

    /// Show build metadata
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

#[derive(Serialize)]
struct YearReport<T: Serialize> {
    year: i32,
    #[serde(flatten)]
    report: T,
}

#[derive(Serialize)]
struct StatsReport {
    portfolio: PortfolioStats,
    contracts: ContractStats,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport<'a> {
    skipped_records: usize,
    warnings: &'a [String],
}

/// Resolved settings and data for one invocation.
struct Session {
    config: Config,
    service: ProfitService,
    snapshot: Snapshot,
    skipped_records: usize,
    json: bool,
}

impl Session {
    fn open(cli: &Cli) -> Result<Self, RentbookError> {
        let manager = match &cli.config {
            Some(path) => ConfigManager::new(path.clone()),
            None => ConfigManager::user_default(),
        };
        let config = manager.load()?;
        debug!(path = %manager.config_path().display(), "loaded configuration");

        let policy = if cli.strict_dates {
            DatePolicy::Strict
        } else {
            config.date_policy
        };
        let data_dir = cli
            .data
            .clone()
            .unwrap_or_else(|| config.resolve_data_dir());
        let store = JsonSnapshotStore::open(&data_dir)?;
        let skipped_records = store.skipped_records();
        let snapshot = store.into_snapshot();
        info!(
            data_dir = %data_dir.display(),
            %policy,
            properties = snapshot.properties.len(),
            transactions = snapshot.transactions.len(),
            "opened data directory"
        );

        Ok(Self {
            service: ProfitService::new(FiscalYearResolver::system().with_policy(policy)),
            config,
            snapshot,
            skipped_records,
            json: cli.json,
        })
    }

    fn run(&self, command: &Command) -> Result<String, RentbookError> {
        let snapshot = &self.snapshot;
        let service = &self.service;
        let format = self.format();

        match command {
            Command::Profit { year } => {
                let year = self.year(*year);
                let profit =
                    service.annual_profit(&snapshot.properties, &snapshot.transactions, Some(year));
                self.emit(&YearReport { year, report: profit }, || {
                    report::annual_profit(&format, year, &profit)
                })
            }
            Command::Property { id, year } => {
                let year = self.year(*year);
                let property = snapshot
                    .property(id)
                    .ok_or_else(|| CoreError::PropertyNotFound(id.clone()))?;
                let profit = service.property_profit(property, &snapshot.transactions, Some(year));
                self.emit(&YearReport { year, report: profit }, || {
                    report::property_profit(&format, year, &property.display_label(), &profit)
                })
            }
            Command::Breakdown { year } => {
                let year = self.year(*year);
                let rows = service.property_breakdown(
                    &snapshot.properties,
                    &snapshot.transactions,
                    Some(year),
                );
                self.emit(&rows, || report::breakdown(&format, year, &rows))
            }
            Command::Monthly { year } => {
                let year = self.year(*year);
                let months = service.monthly_series(&snapshot.transactions, year);
                self.emit(&months, || report::monthly(&format, year, &months))
            }
            Command::Years => {
                let years = service.fiscal_years(&snapshot.transactions);
                self.emit(&years, || {
                    years.iter().map(|year| format!("{}\n", year)).collect()
                })
            }
            Command::Stats => {
                let portfolio = PortfolioService::stats(snapshot);
                let contracts = PortfolioService::contract_stats(&snapshot.contracts);
                self.emit(
                    &StatsReport {
                        portfolio,
                        contracts,
                    },
                    || report::stats(&format, &portfolio, &contracts),
                )
            }
            Command::Contracts => {
                let today = service.resolver().today();
                self.emit(&snapshot.contracts, || {
                    report::contracts(&format, &snapshot.contracts, today)
                })
            }
            Command::Tenants => {
                let tenants = PortfolioService::tenant_overview(snapshot);
                self.emit(&tenants, || report::tenants(&tenants))
            }
            Command::Transactions { kind, search } => {
                let filter = TransactionFilter {
                    kind: kind.map(TransactionKind::from),
                    search: search.clone(),
                };
                let matches = PortfolioService::filter_transactions(&snapshot.transactions, &filter);
                self.emit(&matches, || report::transactions(&format, &matches))
            }
            Command::Check => {
                let warnings = snapshot_warnings(snapshot);
                self.emit(
                    &CheckReport {
                        skipped_records: self.skipped_records,
                        warnings: &warnings,
                    },
                    || report::warnings(&warnings, self.skipped_records),
                )
            }
            Command::Version => version(self.json),
        }
    }

    fn year(&self, requested: Option<i32>) -> i32 {
        requested
            .or(self.config.fiscal_year)
            .unwrap_or_else(|| self.service.resolver().current_year())
    }

    fn format(&self) -> AmountFormat {
        AmountFormat::from_config(&self.config)
    }

    fn emit<T: Serialize>(
        &self,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> Result<String, RentbookError> {
        if self.json {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            Ok(json)
        } else {
            Ok(text())
        }
    }
}

/// Runs one parsed command and returns what should be printed on stdout.
pub fn execute(cli: &Cli) -> Result<String, RentbookError> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    match &cli.command {
        Command::Version => version(cli.json),
        command => Session::open(cli)?.run(command),
    }
}

fn version(json: bool) -> Result<String, RentbookError> {
    let info = BuildInfo::current();
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&info)?))
    } else {
        Ok(format!("{}\n", info))
    }
}
