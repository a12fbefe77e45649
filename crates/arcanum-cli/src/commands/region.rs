//! The `region` command: query or switch the active region.

use colored::Colorize;

use arcanum_core::Region;

use super::Session;

pub fn run(session: &mut Session, name: Option<&str>, label: Option<&str>) -> Result<(), String> {
    let Some(name) = name else {
        // Query form: the read-only view other tools (NPC generation) use.
        println!("  {}", session.env.region_name());
        return Ok(());
    };

    let region: Region = name.parse().map_err(|e: arcanum_core::CoreError| e.to_string())?;
    session.env.change_region(region);
    if let Some(label) = label {
        if region != Region::Custom {
            return Err("--label only applies to the custom region".into());
        }
        session.env.set_custom_region_name(label);
    }

    println!(
        "  {} {} — weather and events rerolled",
        "Region set:".bold(),
        session.env.region_name()
    );
    super::print_weather(&session.env.state().weather);
    Ok(())
}
