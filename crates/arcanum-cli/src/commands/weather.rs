//! Weather commands: manual reroll and the regional forecast table.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use arcanum_environment::weather;

use super::Session;

pub fn reroll(session: &mut Session) -> Result<(), String> {
    session.env.reroll_weather();
    println!("  {}", "New weather".bold());
    super::print_weather(&session.env.state().weather);
    Ok(())
}

pub fn forecast(session: &Session) -> Result<(), String> {
    let region = session.env.current_region();
    println!(
        "  {} {}",
        "Weather probabilities".bold().underline(),
        session.env.region_name()
    );

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Weather", "Weight", "Chance"]);
    for (kind, weight, pct) in weather::forecast(region) {
        table.add_row(vec![
            kind.to_string(),
            weight.to_string(),
            format!("{pct:.0}%"),
        ]);
    }
    println!("{table}");
    Ok(())
}
