use anyhow::{Context, Result};
use disperse_input::{batch_processor::BatchProcessor, summary::BatchSummary, user_settings::UserSettings};
use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let input = read_input(std::env::args().nth(1))?;

    // Saved settings first, then DISPERSE_* environment overrides
    tracing::info!("Settings file: {}", UserSettings::settings_path_display());
    let mut config = UserSettings::load().to_config();
    config.apply_env_overrides();

    let processor = BatchProcessor::new(config);
    let result = processor.process(&input);

    println!("{}", result.text);
    for message in result.messages() {
        eprintln!("❗️ {}", message);
    }

    let summary = BatchSummary::from_result(&result, processor.config());
    eprintln!("{}", summary.headline());
    for line in summary.preview() {
        eprintln!("  {}", line);
    }

    Ok(if result.failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Read the recipient list from a file, or stdin when no path (or `-`) is given.
fn read_input(path: Option<String>) -> Result<String> {
    match path.as_deref() {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read recipients from stdin")?;
            Ok(buffer)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipients from {}", path)),
    }
}
