//! meetslot - Find the daily window where every location is inside its
//! local working day (08:00-18:00), reported in each location's own clock

mod index;
mod overlap;
mod providers;
mod types;
mod utils;

use clap::{Parser, Subcommand};
use colored::Colorize;
use futures::future::join_all;
use index::ZoneIndex;
use types::OutputFormat;
use utils::format::{
    format_csv, format_json, format_offset, format_overlap_table, local_now, print_banner,
    print_doctor_results,
};

/// Cities offered as quick picks, mirroring the hosted picker.
const RECOMMENDED_CITIES: &[&str] = &[
    "Madrid",
    "New York",
    "Buenos Aires",
    "São Paulo",
    "Tokyo",
    "London",
    "Sydney",
    "Paris",
];

#[derive(Parser)]
#[command(name = "meetslot")]
#[command(
    author,
    version,
    about = "Find the daily window where every location is inside its local working day (08:00-18:00)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Your home location (city or zone name, e.g. "Madrid" or "Europe/Madrid")
    #[arg(short, long)]
    base: Option<String>,

    /// A location to meet with (repeat for more than one)
    #[arg(short = 'w', long = "with", value_name = "LOCATION")]
    with: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List known time zones grouped by region
    Zones {
        /// Only show zones under this region
        #[arg(short, long)]
        region: Option<String>,
    },
    /// Show recommended cities and the zones they resolve to
    List,
    /// Check zone data providers and configuration
    Doctor,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Zones { ref region }) => run_zones(&cli, region.as_deref()).await,
        Some(Commands::List) => run_list(&cli).await,
        Some(Commands::Doctor) => run_doctor().await,
        None => run_overlap(&cli).await,
    }
}

async fn run_overlap(cli: &Cli) -> anyhow::Result<()> {
    // Only show banner for table format
    if matches!(cli.format, OutputFormat::Table) {
        print_banner();
    }

    let (zones, source) = providers::load_zones(cli.verbose).await?;
    let index = ZoneIndex::build(zones);

    let result = overlap::resolve_participants(&index, cli.base.as_deref(), &cli.with)
        .and_then(|(base, others)| {
            overlap::compute_overlap(&base, &others).map(|slots| (base, others, slots))
        });

    let (base, others, slots) = match result {
        Ok(ok) => ok,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            std::process::exit(2);
        }
    };

    let mut participants = vec![base];
    participants.extend(others);

    let output = match cli.format {
        OutputFormat::Table => format_overlap_table(&participants, &slots),
        OutputFormat::Json => format_json(&slots),
        OutputFormat::Csv => format_csv(&slots),
    };
    println!("{}", output);

    if cli.verbose && matches!(cli.format, OutputFormat::Table) {
        println!("{}", "Resolved zones:".bold());
        for p in &participants {
            println!(
                "  {} {} → {} ({})",
                "•".cyan(),
                p.display_name,
                p.zone_name,
                format_offset(p.offset_seconds).dimmed()
            );
        }
        println!("  {} {}", "Data source:".bold(), source.dimmed());
    }

    Ok(())
}

async fn run_zones(cli: &Cli, region: Option<&str>) -> anyhow::Result<()> {
    let (zones, source) = providers::load_zones(cli.verbose).await?;
    let index = ZoneIndex::build(zones);

    match region {
        Some(region) => match index.zones_in(region) {
            Some(zone_names) => {
                println!("{}\n", region.bold());
                for name in zone_names {
                    println!("  {}", name);
                }
            }
            None => {
                eprintln!("{}", format!("Unknown region '{region}'.").red());
                let known: Vec<&str> = index.regions().map(|(name, _)| name).collect();
                eprintln!("Known regions: {}", known.join(", "));
                std::process::exit(2);
            }
        },
        None => {
            println!("{}\n", "Regions:".bold());
            for (name, zone_names) in index.regions() {
                println!("  {} {} ({} zones)", "•".cyan(), name.bold(), zone_names.len());
            }
            println!(
                "\nUse {} to list a region's zones.",
                "meetslot zones --region <NAME>".cyan()
            );
        }
    }

    if cli.verbose {
        println!(
            "\n{} {} ({} zones)",
            "Data source:".bold(),
            source.dimmed(),
            index.len()
        );
    }

    Ok(())
}

async fn run_list(cli: &Cli) -> anyhow::Result<()> {
    print_banner();

    let (zones, source) = providers::load_zones(cli.verbose).await?;
    let index = ZoneIndex::build(zones);

    println!("{}\n", "Recommended cities:".bold());
    for city in RECOMMENDED_CITIES {
        match index.resolve(city) {
            Some(p) => println!(
                "  {} {} ({}, {}, now {})",
                "•".cyan(),
                p.display_name.bold(),
                p.zone_name.dimmed(),
                format_offset(p.offset_seconds),
                local_now(p.offset_seconds)
            ),
            None => println!("  {} {} ({})", "•".cyan(), city.bold(), "no match".dimmed()),
        }
    }

    println!("\n{}", "Usage:".bold());
    println!("  meetslot --base Madrid --with Tokyo                 # shared working hours");
    println!("  meetslot --base Madrid --with Tokyo --with \"New York\"");
    println!("  meetslot zones --region Europe                      # browse zone names");
    println!("  meetslot doctor                                     # check data sources");
    println!();

    if cli.verbose {
        println!("{} {}\n", "Data source:".bold(), source.dimmed());
    }

    Ok(())
}

async fn run_doctor() -> anyhow::Result<()> {
    print_banner();
    println!("{}\n", "Running diagnostics...".cyan());

    let providers = providers::get_all_providers();
    let availability = join_all(providers.iter().map(|p| p.is_available())).await;

    let mut checks: Vec<(String, String, bool)> = Vec::new();
    for (provider, available) in providers.iter().zip(availability) {
        for path in provider.paths_to_check() {
            if path.is_empty() {
                continue;
            }
            checks.push((provider.display_name().to_string(), path, available));
        }
    }

    print_doctor_results(&checks);

    let ready_count = checks.iter().filter(|(_, _, ready)| *ready).count();
    println!(
        "\n{}: {} of {} sources ready\n",
        "Summary".bold(),
        ready_count.to_string().green(),
        checks.len()
    );

    println!("{}", "Environment Variables:".bold());
    println!("  {} - TimeZoneDB API key", "TIMEZONEDB_API_KEY".cyan());
    println!("  {} - per-tool key override", "MEETSLOT_API_KEY".cyan());
    println!("  {} - snapshot cache location override", "MEETSLOT_CACHE_DIR".cyan());
    println!();

    Ok(())
}
