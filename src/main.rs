use clap::Parser;
use contact_form::core::config::{self, CliOverrides, FormConfig};
use contact_form::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contact-form", about = "Terminal contact form with live validation")]
struct Args {
    /// Config file (defaults to ~/.contact-form/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum number of characters for the first name
    #[arg(long, value_name = "N")]
    min_first_name_len: Option<usize>,

    /// Only show validation errors after the first submit
    #[arg(long)]
    no_live_validation: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to contact-form.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("contact-form.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Contact form starting up");

    let file_config = config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        FormConfig::default()
    });
    let cli = CliOverrides {
        first_name_min_len: args.min_first_name_len,
        no_live_validation: args.no_live_validation,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!(
        "Resolved config: title={:?}, first_name_min_len={}, live_validation={}",
        resolved.title,
        resolved.first_name_min_len,
        resolved.live_validation
    );

    tui::run(resolved)
}
