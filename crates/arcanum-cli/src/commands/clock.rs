//! Clock control commands: start, pause, reset, ratio, skip.

use chrono::Utc;
use colored::Colorize;

use super::Session;

pub fn start(session: &mut Session) -> Result<(), String> {
    if session.clock.running() {
        println!("  Clock already running at {}", session.clock.time());
        return Ok(());
    }
    session.clock.toggle(Utc::now());
    println!(
        "  {} at {} ({} real min = 1 game hour)",
        "Clock started".green().bold(),
        session.clock.time(),
        session.clock.ratio()
    );
    Ok(())
}

pub fn pause(session: &mut Session) -> Result<(), String> {
    if !session.clock.running() {
        println!("  Clock already paused at {}", session.clock.time());
        return Ok(());
    }
    // Catch-up already ran on load; toggling now freezes elapsed time.
    session.clock.toggle(Utc::now());
    println!("  {} at {}", "Clock paused".yellow().bold(), session.clock.time());
    Ok(())
}

pub fn reset(session: &mut Session) -> Result<(), String> {
    session.clock.reset();
    println!("  {} — elapsed time zeroed", "Clock reset".bold());
    Ok(())
}

pub fn ratio(session: &mut Session, minutes: f64) -> Result<(), String> {
    if session.clock.running() {
        return Err("pause the clock before changing the ratio".into());
    }
    session.clock.set_ratio(minutes);
    println!(
        "  Ratio set: {} real min = 1 game hour",
        session.clock.ratio()
    );
    Ok(())
}

pub fn skip(session: &mut Session, minutes: f64) -> Result<(), String> {
    let before = session.clock.current_minute();
    session.clock.skip(minutes);
    session.observe();
    let gained = session.clock.current_minute() - before;
    println!(
        "  {} {} game minutes — now {}",
        "Skipped".bold(),
        gained,
        session.clock.time()
    );
    Ok(())
}
