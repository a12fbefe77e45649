//! CLI frontend for the Arcanum environment engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::Session;

#[derive(Parser)]
#[command(
    name = "arcanum",
    about = "Arcanum — environment, weather, and events for the game master's table",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Session state directory
    #[arg(short, long, global = true, default_value = ".")]
    dir: PathBuf,

    /// RNG seed for deterministic weather and event generation
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the in-fiction time, region, weather, and recent events
    Status,

    /// Start the in-fiction clock
    Start,

    /// Pause the in-fiction clock
    Pause,

    /// Stop the clock and zero elapsed time
    Reset,

    /// Set how many real minutes make one in-fiction hour
    Ratio {
        /// Real minutes per game hour (clamped to at least 0.1)
        minutes: f64,
    },

    /// Fast-forward the clock by a number of game minutes
    Skip {
        /// Game minutes to add (negative input is clamped to zero)
        #[arg(allow_hyphen_values = true)]
        minutes: f64,
    },

    /// Show the current region, or switch to a new one
    Region {
        /// Region to switch to (forest, mountain, coast, desert, city,
        /// swamp, underground, custom)
        name: Option<String>,

        /// Display name for the custom region
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Discard the current weather and generate a new one
    Reroll,

    /// Show the region's weather probability table
    Forecast,

    /// Force-generate an event for the current region and weather
    Event,

    /// Log the pending suggested event
    Accept,

    /// Discard the pending suggested event
    Dismiss,

    /// Set the event mode (automatic, suggestion, manual)
    Mode {
        /// One of: automatic, suggestion, manual
        mode: String,
    },

    /// Enable or disable automatic weather regeneration on expiry
    AutoWeather {
        /// "on" or "off"
        state: String,
    },

    /// Show the environmental event log
    Log,
}

fn main() {
    let cli = Cli::parse();

    let result = Session::load(&cli.dir, cli.seed).and_then(|mut session| {
        match cli.command {
            Commands::Status => commands::status::run(&session),
            Commands::Start => commands::clock::start(&mut session),
            Commands::Pause => commands::clock::pause(&mut session),
            Commands::Reset => commands::clock::reset(&mut session),
            Commands::Ratio { minutes } => commands::clock::ratio(&mut session, minutes),
            Commands::Skip { minutes } => commands::clock::skip(&mut session, minutes),
            Commands::Region { name, label } => {
                commands::region::run(&mut session, name.as_deref(), label.as_deref())
            }
            Commands::Reroll => commands::weather::reroll(&mut session),
            Commands::Forecast => commands::weather::forecast(&session),
            Commands::Event => commands::events::force(&mut session),
            Commands::Accept => commands::events::accept(&mut session),
            Commands::Dismiss => commands::events::dismiss(&mut session),
            Commands::Mode { mode } => commands::events::mode(&mut session, &mode),
            Commands::AutoWeather { state } => commands::events::auto_weather(&mut session, &state),
            Commands::Log => commands::events::log(&session),
        }?;
        session.save()
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
