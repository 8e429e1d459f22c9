//! Divvy command-line interface.
//!
//! Drives a JSON-file ledger store: manage a group's roster and shared
//! expenses, then print who owes whom.

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use divvy_core::group::{ExpenseEntry, NewEntry, Participant};
use divvy_core::reconcile::{ReconcileError, ReconcileReport, ReconcileService};
use divvy_core::store::LedgerStore;
use divvy_core::summary::SummaryService;
use divvy_shared::AppConfig;
use divvy_shared::types::{CurrencyCode, GroupId, parse_amount};
use divvy_store::JsonFileStore;

#[derive(Parser)]
#[command(name = "divvy", version, about = "Split shared expenses and settle up")]
struct Cli {
    /// Ledger store file; overrides the configured path.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mint a fresh group ID.
    NewGroup,
    /// Add a participant to a group's roster.
    AddFriend {
        /// The group to add them to.
        group: GroupId,
        /// The participant's name.
        name: String,
    },
    /// Record a shared expense fronted by one participant.
    AddExpense {
        /// The group the expense belongs to.
        group: GroupId,
        /// Who fronted the money.
        payer: String,
        /// Amount paid, e.g. 12.50.
        amount: String,
        /// Spending category; defaults from configuration.
        #[arg(long)]
        category: Option<String>,
        /// Currency tag; defaults from configuration.
        #[arg(long)]
        currency: Option<String>,
        /// Expense date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show a group's roster and recorded expenses.
    List {
        /// The group to list.
        group: GroupId,
    },
    /// Print balances, the settle-up plan, and spending summaries.
    Report {
        /// The group to reconcile.
        group: GroupId,
    },
    /// Remove a group's roster and ledger entirely.
    Clear {
        /// The group to clear.
        group: GroupId,
    },
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "divvy=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    let path = cli
        .store
        .unwrap_or_else(|| PathBuf::from(&config.store.path));
    let store = JsonFileStore::open(&path)
        .with_context(|| format!("Failed to open ledger store at {}", path.display()))?;

    match cli.command {
        Command::NewGroup => {
            println!("{}", GroupId::new());
        }
        Command::AddFriend { group, name } => {
            let participant = Participant::new(name)?;
            store.add_participant(group, participant.clone())?;
            info!(%group, %participant, "participant added");
            println!("Added {participant} to group {group}");
        }
        Command::AddExpense {
            group,
            payer,
            amount,
            category,
            currency,
            date,
        } => {
            let entry = NewEntry {
                payer: Participant::new(payer)?,
                amount: parse_amount(&amount)?,
                currency: currency
                    .as_deref()
                    .unwrap_or(&config.group.default_currency)
                    .parse::<CurrencyCode>()?,
                category: category.unwrap_or_else(|| config.group.default_category.clone()),
                date: date.unwrap_or_else(|| chrono::Local::now().date_naive()),
            };
            let id = store.add_entry(group, entry)?;
            info!(%group, %id, "expense recorded");
            println!("Recorded expense {id}");
        }
        Command::List { group } => {
            let snapshot = store.snapshot(group)?;
            if snapshot.roster().is_empty() {
                println!("No participants yet - add friends first");
                return Ok(());
            }
            println!("Participants:");
            for participant in snapshot.roster() {
                println!("  {participant}");
            }
            if snapshot.entries().is_empty() {
                println!("No expenses recorded");
            } else {
                println!("Expenses:");
                for entry in snapshot.entries() {
                    println!(
                        "  {}  {:<12} {:>10.2} {}  {}",
                        entry.date,
                        entry.payer.as_str(),
                        entry.amount,
                        entry.currency,
                        entry.category
                    );
                }
            }
        }
        Command::Report { group } => {
            let snapshot = store.snapshot(group)?;
            let service = ReconcileService::new(store);
            match service.reconcile(group) {
                Ok(report) => {
                    print_report(&report);
                    print_summaries(snapshot.entries());
                }
                Err(ReconcileError::EmptyRoster) => {
                    println!("No participants yet - add friends first");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Clear { group } => {
            store.clear_group(group)?;
            info!(%group, "group cleared");
            println!("Cleared group {group}");
        }
    }

    Ok(())
}

fn print_report(report: &ReconcileReport) {
    println!(
        "Total spent {:.2}, fair share {:.2}",
        report.balances.grand_total, report.balances.fair_share
    );
    println!("Balances:");
    for balance in &report.balances.balances {
        println!(
            "  {:<12} paid {:>10.2}   balance {:>10}",
            balance.participant.as_str(),
            balance.paid,
            signed(balance.balance)
        );
    }
    if report.transfers.is_empty() {
        println!("All settled - nothing to transfer");
    } else {
        println!("Settle up:");
        for transfer in &report.transfers {
            println!(
                "  {} pays {:.2} to {}",
                transfer.from, transfer.amount, transfer.to
            );
        }
    }
}

fn print_summaries(entries: &[ExpenseEntry]) {
    let months = SummaryService::monthly_totals(entries);
    if !months.is_empty() {
        println!("Monthly spending:");
        for month in months {
            println!("  {:04}-{:02}  {:.2}", month.year, month.month, month.total);
        }
    }
    let categories = SummaryService::category_totals(entries);
    if !categories.is_empty() {
        println!("By category:");
        for category in categories {
            println!("  {:<12} {:.2}", category.category, category.total);
        }
    }
}

/// Formats a balance with an explicit sign for the overpaid side.
fn signed(balance: Decimal) -> String {
    if balance.is_sign_positive() && !balance.is_zero() {
        format!("+{balance:.2}")
    } else {
        format!("{balance:.2}")
    }
}
