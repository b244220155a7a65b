use clap::{ArgAction, Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};

use breakdown::breakdown::{parse_date, BreakdownSummary};
use breakdown::config::{config_dir, config_file, init_config_dir, load_config};
use breakdown::error::{BreakdownError, Result};
use breakdown::format::{format_money, format_months};
use breakdown::{line_breakdowns, load_lines, logging, month_span, summarize, Config, Context, MonthPolicy};

#[derive(Parser)]
#[command(name = "breakdown")]
#[command(version, about = "Cost breakdown calculator for ad space bookings and proposals", long_about = None)]
struct Cli {
    /// Path to config directory (default: ~/.breakdown or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with a template config.toml
    Init,

    /// Summarize the cost breakdown of a line item document
    Summary {
        /// JSON file with line items ('-' reads stdin)
        file: PathBuf,

        /// Rows to show (default: from config)
        #[arg(long, value_enum)]
        context: Option<Context>,

        /// Partial month counting (default: from config)
        #[arg(long, value_enum)]
        policy: Option<MonthPolicy>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show each line's contribution
    Lines {
        /// JSON file with line items ('-' reads stdin)
        file: PathBuf,

        /// Partial month counting (default: from config)
        #[arg(long, value_enum)]
        policy: Option<MonthPolicy>,
    },

    /// Count the months spanned by a date range (end date inclusive)
    Months {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: String,

        /// Partial month counting (default: from config)
        #[arg(long, value_enum)]
        policy: Option<MonthPolicy>,
    },

    /// Show configuration in effect
    Status,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Summary {
            file,
            context,
            policy,
            json,
        } => cmd_summary(&cfg_dir, &file, context, policy, json),
        Commands::Lines { file, policy } => cmd_lines(&cfg_dir, &file, policy),
        Commands::Months { start, end, policy } => cmd_months(&cfg_dir, &start, &end, policy),
        Commands::Status => cmd_status(&cfg_dir),
    }
}

/// Initialize config directory with the template config.toml
fn cmd_init(cfg_dir: &Path) -> Result<()> {
    let path = init_config_dir(cfg_dir)?;

    println!("Initialized breakdown config at: {}", cfg_dir.display());
    println!();
    println!("Edit currency, default context and month policy:");
    println!("  $EDITOR {}", path.display());
    println!();
    println!("Then summarize a booking:");
    println!("  breakdown summary booking.json");

    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "ITEM")]
    item: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
}

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "SPACE")]
    label: String,
    #[tabled(rename = "MONTHS")]
    months: String,
    #[tabled(rename = "DISPLAY")]
    display: String,
    #[tabled(rename = "DISCOUNT")]
    discount: String,
    #[tabled(rename = "GST")]
    gst: String,
    #[tabled(rename = "PRINTING")]
    printing: String,
    #[tabled(rename = "MOUNTING")]
    mounting: String,
    #[tabled(rename = "ADDITIONAL")]
    additional: String,
    #[tabled(rename = "PRICE")]
    price: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryOutput<'a> {
    context: Context,
    month_policy: MonthPolicy,
    lines: usize,
    summary: &'a BreakdownSummary,
    grand_total: Decimal,
}

/// Summarize a line item document
fn cmd_summary(
    cfg_dir: &Path,
    file: &Path,
    context: Option<Context>,
    policy: Option<MonthPolicy>,
    json: bool,
) -> Result<()> {
    let config = load_config(cfg_dir)?;
    let context = context.unwrap_or(config.display.context);
    let policy = policy.unwrap_or(config.proration.partial_month);

    let lines = load_lines(file)?;
    let summary = summarize(&lines, policy);

    if json {
        let output = SummaryOutput {
            context,
            month_policy: policy,
            lines: lines.len(),
            summary: &summary,
            grand_total: summary.grand_total(context),
        };
        let encoded = serde_json::to_string_pretty(&output)
            .map_err(BreakdownError::Output)?;
        println!("{encoded}");
        return Ok(());
    }

    let symbol = &config.display.currency_symbol;
    let rows: Vec<SummaryRow> = summary
        .rows(context)
        .into_iter()
        .map(|row| SummaryRow {
            item: row.label.to_string(),
            amount: format_money(row.amount, symbol),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!();
    println!("Lines:       {}", lines.len());
    println!("Context:     {}", context);
    println!("Total price: {}", format_money(summary.total_price, symbol));
    if summary.discounted_display_cost != summary.total_display_cost {
        println!(
            "Display at monthly rates: {}",
            format_money(summary.discounted_display_cost, symbol)
        );
    }

    Ok(())
}

/// Show each line's contribution
fn cmd_lines(cfg_dir: &Path, file: &Path, policy: Option<MonthPolicy>) -> Result<()> {
    let config = load_config(cfg_dir)?;
    let policy = policy.unwrap_or(config.proration.partial_month);

    let lines = load_lines(file)?;
    if lines.is_empty() {
        println!("No line items in {}.", file.display());
        return Ok(());
    }

    let symbol = &config.display.currency_symbol;
    let rows: Vec<LineRow> = line_breakdowns(&lines, policy)
        .into_iter()
        .enumerate()
        .map(|(idx, line)| LineRow {
            index: idx + 1,
            label: line.label,
            months: format_months(line.months),
            display: format_money(line.amounts.total_display_cost, symbol),
            discount: format_money(line.amounts.discount, symbol),
            gst: format_money(line.amounts.total_gst(), symbol),
            printing: format_money(line.amounts.total_printing_cost, symbol),
            mounting: format_money(line.amounts.total_mounting_cost, symbol),
            additional: format_money(line.amounts.monthly_additional_cost, symbol),
            price: format_money(line.amounts.total_price, symbol),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}

/// Count the months spanned by a date range
fn cmd_months(cfg_dir: &Path, start: &str, end: &str, policy: Option<MonthPolicy>) -> Result<()> {
    let config = load_config(cfg_dir)?;
    let policy = policy.unwrap_or(config.proration.partial_month);

    let start_date = parse_date(start).ok_or_else(|| BreakdownError::InvalidDate(start.to_string()))?;
    let end_date = parse_date(end).ok_or_else(|| BreakdownError::InvalidDate(end.to_string()))?;

    let months = month_span(start_date, end_date, policy);
    println!(
        "{} months ({} to {}, {})",
        format_months(Some(months)),
        start_date,
        end_date,
        policy
    );

    Ok(())
}

/// Show configuration in effect
fn cmd_status(cfg_dir: &Path) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(BreakdownError::ConfigNotFound(cfg_dir.to_path_buf()));
    }

    let config: Config = load_config(cfg_dir)?;
    let file = config_file(cfg_dir);

    println!("Breakdown Status");
    println!("{}", "-".repeat(50));
    println!("Config directory: {}", cfg_dir.display());
    if file.exists() {
        println!("Config file:      {}", file.display());
    } else {
        println!("Config file:      {} (not found, using defaults)", file.display());
    }
    println!("Currency:         {}", config.display.currency_symbol);
    println!("Context:          {}", config.display.context);
    println!("Partial months:   {}", config.proration.partial_month);

    Ok(())
}
