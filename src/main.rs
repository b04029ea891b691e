use std::process;

use csquare_cli::commands::{build_cli, dispatch};
use csquare_cli::logging::{init_logging, log_error};

#[tokio::main]
async fn main() {
    // The CLI still works without a log file
    let _ = init_logging();

    let matches = build_cli().get_matches();

    if let Err(e) = dispatch(&matches).await {
        log_error(&format!("Command failed: {}", e));
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
