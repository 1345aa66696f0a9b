//! Show or write the configuration file.

use anyhow::Context;

use airmouse_common::config::AirmouseConfig;

pub fn run(write: bool) -> anyhow::Result<()> {
    let config = AirmouseConfig::load();

    let json = serde_json::to_string_pretty(&config).context("failed to serialize config")?;
    println!("{json}");

    if write {
        config.save().context("failed to write config")?;
        println!();
        println!("Configuration written to the standard location.");
    }

    Ok(())
}
