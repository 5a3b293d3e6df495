use std::path::PathBuf;

use airport_stats::engine::aggregate::Ranking;
use airport_stats::engine::query::AirportStats;
use airport_stats::engine::source::{JsonFileSource, RecordSource};
use airport_stats::logging;
use airport_stats::shared::config::CONFIG;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "airport_stats")]
#[command(about = "Aggregate statistics over an airport's flight records", long_about = None)]
struct Args {
    /// Flight records as a JSON array or JSON lines
    #[arg(short, long)]
    input: PathBuf,

    /// Maximum number of ranked rows to print (0 = unlimited)
    #[arg(short, long, default_value = "0")]
    limit: usize,

    /// Print ranked rows as a JSON array of {"key", "count"} objects
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Most common destination airports
    Destinations,
    /// Gates used by flights to Berlin
    BerlinGates,
    /// Flights per aircraft model on a date
    Aircraft {
        /// Origin date, YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
    /// Days with the most cancellations of an airline
    Strike {
        /// Airline IATA code (defaults to the configured strike airline)
        #[arg(long)]
        airline: Option<String>,
        /// Print the full cancellation ranking instead of the tied days
        #[arg(long)]
        ranking: bool,
    },
    /// Flights of an airline with any of the given status codes
    Status {
        #[arg(long)]
        airline: String,
        #[arg(long = "status", required = true, num_args = 1..)]
        statuses: Vec<String>,
    },
    /// Average flights per hour between two times of day
    Rate {
        /// Lower limit, hh:mm:ss (included)
        #[arg(long)]
        from: String,
        /// Upper limit, hh:mm:ss (included)
        #[arg(long)]
        to: String,
    },
    /// Flights per operating airline
    Airlines,
    /// Aircraft ICAO codes flown by an airline
    AircraftCodes {
        #[arg(long)]
        airline: String,
    },
}

fn print_ranking(ranking: &Ranking, args: &Args) -> anyhow::Result<()> {
    let rows = if args.limit == 0 {
        ranking.entries()
    } else {
        ranking.top(args.limit)
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }
    for entry in rows {
        println!("{:<24} {}", entry.key, entry.count);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init()?;

    let flights = JsonFileSource::new(&args.input).load()?;
    let stats = AirportStats::from_config(&CONFIG.engine);
    info!(
        "Running over {} flights with {} partitions",
        flights.len(),
        stats.context().partitions()
    );

    match &args.command {
        Command::Destinations => print_ranking(&stats.most_common_destinations(&flights), &args)?,
        Command::BerlinGates => {
            print_ranking(&stats.gates_with_flights_to_berlin(&flights), &args)?
        }
        Command::Aircraft { date } => {
            let counts = stats
                .aircraft_count_on_date(&flights, date)
                .inspect_err(|e| e.log_error())?;
            let mut rows: Vec<_> = counts.into_iter().collect();
            rows.sort();
            for (model, count) in rows {
                println!("{:<24} {}", model, count);
            }
        }
        Command::Strike { airline, ranking } => {
            let airline = airline
                .clone()
                .unwrap_or_else(|| CONFIG.engine.strike_airline.clone());
            if *ranking {
                print_ranking(&stats.strike_ranking_for(&flights, &airline), &args)?;
            } else {
                let days = stats.strike_days_for(&flights, &airline);
                if days.is_empty() {
                    println!("no cancelled flights for {}", airline);
                }
                for day in days {
                    println!("{}", day);
                }
            }
        }
        Command::Status { airline, statuses } => {
            let (first, more) = statuses
                .split_first()
                .ok_or_else(|| anyhow::anyhow!("at least one status code is required"))?;
            let more: Vec<&str> = more.iter().map(String::as_str).collect();
            let matched = stats.flights_of_airline_with_status(&flights, airline, first, &more);
            for flight in matched {
                println!("{}", serde_json::to_string(flight)?);
            }
        }
        Command::Rate { from, to } => {
            let rate = stats
                .avg_number_of_flights_in_window(&flights, from, to)
                .inspect_err(|e| e.log_error())?;
            println!("{:.3}", rate);
        }
        Command::Airlines => print_ranking(&stats.airline_counts(&flights), &args)?,
        Command::AircraftCodes { airline } => {
            print_ranking(&stats.aircraft_codes_for_airline(&flights, airline), &args)?
        }
    }

    Ok(())
}
