use seo_helper_core::config::{ConfigLoader, default_config_path};
use std::path::Path;

pub fn run(config: Option<&Path>) {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            println!("OK   seo-helper doctor");
            println!(
                "config: {}",
                rc.source.as_ref().map_or_else(
                    || "(none, using defaults)".to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("model: {}", rc.provider.model);
            println!("base_url: {}", rc.provider.base_url);
            println!("api_key: {}", rc.provider.masked_api_key());
            println!("max_retries: {}", rc.provider.max_retries);
            println!("timeout_secs: {}", rc.provider.timeout_secs);
            println!("temperature: {}", rc.provider.temperature);
            println!("logging.level: {}", rc.logging.level);
            if let Some(file) = &rc.logging.file {
                println!("logging.file: {}", file.display());
            }
        }
        Err(e) => {
            println!("FAIL seo-helper doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
