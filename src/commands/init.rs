use std::io::{self, Write};

use pitwall::config::{ApiConfig, AssetConfig, Config};
use pitwall::error::{PitwallError, Result};

fn prompt(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("pitwall Configuration");
    println!("=====================\n");

    let defaults = Config::default();

    let base_url = prompt(&format!(
        "Backend base URL [{}]: ",
        defaults.api.base_url
    ))?;
    let logo_dir = prompt(&format!(
        "Team logo directory [{}]: ",
        defaults.assets.logo_dir
    ))?;

    let config = Config {
        api: ApiConfig {
            base_url: if base_url.is_empty() {
                defaults.api.base_url.clone()
            } else {
                base_url
            },
            ..ApiConfig::default()
        },
        assets: AssetConfig {
            logo_dir: if logo_dir.is_empty() {
                defaults.assets.logo_dir.clone()
            } else {
                logo_dir
            },
        },
        ..defaults
    };

    // Catch a typo now rather than on the first request
    config.api.endpoint(&config.api.health_path)?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PitwallError::ConfigWrite {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let contents = config.to_toml()?;

    std::fs::write(&config_path, contents).map_err(|e| PitwallError::ConfigWrite {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'pitwall' commands!");

    Ok(())
}
