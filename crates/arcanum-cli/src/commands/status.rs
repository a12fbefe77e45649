//! The `status` command: time, region, weather, pending, recent events.

use colored::Colorize;

use arcanum_core::GameTime;

use super::Session;

/// How many of the newest events `status` shows.
const RECENT_EVENTS: usize = 5;

pub fn run(session: &Session) -> Result<(), String> {
    let time = session.clock.time();
    let clock_label = if session.clock.running() {
        "running".green()
    } else {
        "paused".yellow()
    };

    println!(
        "  {} {} ({})",
        time.time_of_day().to_string().bold(),
        time,
        clock_label
    );
    println!(
        "  {}",
        format!(
            "{} real min = 1 game hour",
            session.clock.ratio()
        )
        .dimmed()
    );
    println!();

    println!("  {} {}", "Region".bold().underline(), session.env.region_name());
    println!();

    println!("  {}", "Weather".bold().underline());
    super::print_weather(&session.env.state().weather);
    println!();

    println!(
        "  {} {} {}",
        "Events".bold().underline(),
        session.env.state().event_mode,
        if session.env.state().auto_weather {
            "(auto weather on)".dimmed()
        } else {
            "(auto weather off)".dimmed()
        }
    );

    if let Some(pending) = session.env.pending() {
        println!("  {}", "Suggested event — accept or dismiss:".yellow().bold());
        println!("    {}", pending.description);
        println!("    {}", pending.mechanical_effect.dimmed());
    }

    let events = session.env.state().events.entries();
    if events.is_empty() {
        println!("  {}", "(no events yet)".dimmed());
    } else {
        for event in events.iter().rev().take(RECENT_EVENTS) {
            println!(
                "  {} {}",
                format!("[{}]", GameTime(event.timestamp)).dimmed(),
                event.description
            );
        }
    }

    Ok(())
}
