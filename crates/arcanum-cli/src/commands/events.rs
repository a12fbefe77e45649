//! Event commands: force-generate, accept/dismiss, mode, auto-weather, log.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use arcanum_core::GameTime;
use arcanum_environment::EventMode;

use super::Session;

pub fn force(session: &mut Session) -> Result<(), String> {
    match session.env.force_event() {
        Some(event) => {
            println!("  {}", event.description.bold());
            println!("  {}", event.mechanical_effect.dimmed());
            Ok(())
        }
        None => {
            // Absence is a valid outcome: this weather triggers nothing here.
            println!(
                "  No event matches {} weather in {}",
                session.env.state().weather.kind,
                session.env.region_name()
            );
            Ok(())
        }
    }
}

pub fn accept(session: &mut Session) -> Result<(), String> {
    if !session.env.accept_pending() {
        return Err("no pending suggested event".into());
    }
    if let Some(event) = session.env.state().events.last() {
        println!("  {} {}", "Logged:".green().bold(), event.description);
    }
    Ok(())
}

pub fn dismiss(session: &mut Session) -> Result<(), String> {
    if !session.env.dismiss_pending() {
        return Err("no pending suggested event".into());
    }
    println!("  Suggestion dismissed");
    Ok(())
}

pub fn mode(session: &mut Session, mode: &str) -> Result<(), String> {
    let mode: EventMode = mode.parse()?;
    session.env.set_event_mode(mode);
    println!("  Event mode set to {mode}");
    Ok(())
}

pub fn auto_weather(session: &mut Session, state: &str) -> Result<(), String> {
    let enabled = match state.to_lowercase().as_str() {
        "on" => true,
        "off" => false,
        other => return Err(format!("expected \"on\" or \"off\", got: {other}")),
    };
    session.env.set_auto_weather(enabled);
    println!(
        "  Automatic weather {}",
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}

pub fn log(session: &Session) -> Result<(), String> {
    let events = session.env.state().events.entries();
    if events.is_empty() {
        println!("  No events have occurred yet");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Time", "Event", "Mechanical effect"]);
    for event in events.iter().rev() {
        table.add_row(vec![
            GameTime(event.timestamp).to_string(),
            event.description.clone(),
            event.mechanical_effect.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}
