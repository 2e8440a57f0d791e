mod tui;

use anyhow::Result;
use clap::Parser;
use daygraph_core::{format_key, parse_key, ActivityStore, SelectionController};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Demo dataset baked into the binary; the store is built from it once
/// at startup and never mutated.
const ACTIVITY_DATA: &str = include_str!("../data/activity.json");

#[derive(Parser)]
#[command(name = "daygraph")]
#[command(about = "A calendar dashboard for recorded activity", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive calendar
    Tui,
    /// List every date that has recorded activity
    Dates,
    /// Print the activity recorded on one date (DD-MM-YYYY)
    Show {
        /// Date key, e.g. 01-12-2025
        key: String,
    },
}

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "User")]
    label: String,
    #[tabled(rename = "Activity")]
    value: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let store = ActivityStore::from_json(ACTIVITY_DATA)?;
    log::debug!("loaded activity store with {} dates", store.len());

    match cli.command {
        Some(Commands::Dates) => {
            if store.is_empty() {
                println!("No activity recorded.");
                return Ok(());
            }
            for event in store.highlight_events()? {
                let count = store.entries_for(&event.key).map(|e| e.len()).unwrap_or(0);
                println!("{}  {} ({} entries)", event.key, event.title, count);
            }
        }
        Some(Commands::Show { key }) => {
            // Re-format through the codec so "1-12-2025" and the
            // canonical "01-12-2025" hit the same store key.
            let date = parse_key(&key)?;
            let key = format_key(date);

            match store.entries_for(&key) {
                Some(entries) => {
                    println!("Date: {key}");
                    let rows: Vec<ActivityRow> = entries
                        .iter()
                        .map(|e| ActivityRow {
                            label: e.label.clone(),
                            value: e.value,
                        })
                        .collect();
                    let mut table = Table::new(rows);
                    table.with(Style::rounded());
                    println!("{table}");
                }
                None => {
                    println!("No data found for the selected date.");
                    println!("Date: {key}");
                }
            }
        }
        Some(Commands::Tui) | None => {
            let controller = SelectionController::new(store);
            tui::run(controller)?;
        }
    }
    Ok(())
}
