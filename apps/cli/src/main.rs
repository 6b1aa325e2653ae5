#![deny(warnings)]

//! Headless CLI that loads an inventory and prints it for each simulated day.

use anyhow::{bail, Context, Result};
use chrono::{Days, NaiveDate};
use shop_core::{validate_inventory, Item, AGED_BRIE, BACKSTAGE_PASSES, CONJURED};
use shop_runtime::Inventory;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Default, PartialEq)]
struct Args {
    inventory: Option<PathBuf>,
    days: Option<u32>,
    start: Option<NaiveDate>,
    strict: bool,
    json_logs: bool,
    version: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut out = Args::default();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--inventory" => {
                let path = it.next().context("--inventory needs a file path")?;
                out.inventory = Some(PathBuf::from(path));
            }
            "--days" => {
                let raw = it.next().context("--days needs a number")?;
                let days = raw
                    .parse()
                    .with_context(|| format!("invalid --days value: {raw}"))?;
                out.days = Some(days);
            }
            "--start" => {
                let raw = it.next().context("--start needs a date")?;
                let date = raw
                    .parse::<NaiveDate>()
                    .with_context(|| format!("invalid --start date (want YYYY-MM-DD): {raw}"))?;
                out.start = Some(date);
            }
            "--strict" => out.strict = true,
            "--json-logs" => out.json_logs = true,
            "--version" | "-V" => out.version = true,
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(out)
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    // Logs go to stderr so the day listing on stdout stays clean.
    if json {
        builder.json().with_target(false).init();
    } else {
        builder.init();
    }
}

/// Built-in shop inventory used when no file is given.
fn sample_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::legendary(0),
        Item::legendary(-1),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new(CONJURED, 3, 6),
    ]
}

fn load_inventory(path: &Path) -> Result<Inventory> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading inventory {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let inventory: Inventory = match ext {
        "json" => serde_json::from_str(&text)
            .with_context(|| format!("parsing JSON inventory {}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&text)
            .with_context(|| format!("parsing YAML inventory {}", path.display()))?,
        other => bail!("unsupported inventory format '{other}' (use .json, .yaml or .yml)"),
    };
    Ok(inventory)
}

fn render_day(day: u32, date: Option<NaiveDate>, items: &[Item]) -> String {
    let header = match date {
        Some(d) => format!("-------- day {day} ({d}) --------"),
        None => format!("-------- day {day} --------"),
    };
    let body: String = items.iter().map(|item| format!("{item}\n")).collect();
    format!("{header}\nname, sellIn, quality\n{body}")
}

/// Validate the inventory, then simulate it day by day and return the listing.
///
/// Invalid items are logged and still simulated unless `args.strict` is set.
fn run(args: &Args, mut inventory: Inventory) -> Result<String> {
    let days = args.days.unwrap_or(DEFAULT_DAYS);
    let failures = validate_inventory(inventory.items());
    for (idx, err) in &failures {
        warn!(idx, name = %inventory.items()[*idx].name, "invalid item: {err}");
    }
    if args.strict && !failures.is_empty() {
        bail!("{} invalid item(s) in inventory", failures.len());
    }

    let mut listing = Vec::with_capacity(days as usize + 1);
    for day in 0..=days {
        if day > 0 {
            inventory.update_quality();
        }
        let date = args
            .start
            .and_then(|s| s.checked_add_days(Days::new(u64::from(day))));
        listing.push(render_day(day, date, inventory.items()));
    }
    Ok(listing.join("\n"))
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.version {
        println!(
            "{} {} ({} {})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("GIT_SHA"),
            env!("BUILD_DATE")
        );
        return Ok(());
    }
    init_logging(args.json_logs);

    let inventory = match &args.inventory {
        Some(path) => load_inventory(path)?,
        None => Inventory::from(sample_inventory()),
    };
    info!(
        inventory = ?args.inventory,
        items = inventory.len(),
        days = args.days.unwrap_or(DEFAULT_DAYS),
        "starting CLI"
    );

    let listing = run(&args, inventory)?;
    println!("{listing}");
    Ok(())
}
