use cafe_manager::catalog::CafeCatalog;
use cafe_manager::config::Config;
use cafe_manager::console::Console;
use cafe_manager::menu::MenuFile;
use dotenv::dotenv;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

/// Main entry point for the cafe manager.
///
/// This function:
/// 1. Loads environment variables from .env file
/// 2. Seeds the menu from `MENU_FILE` when it is set
/// 3. Runs the interactive console on stdin/stdout until exit
fn main() -> ExitCode {
    dotenv().ok();
    let config = Config::from_env();

    // Logs go to stderr so they never mix with the console on stdout
    FmtSubscriber::builder()
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_env_filter(config.log_filter.as_str())
        .init();

    info!("Starting cafe manager");

    let mut catalog = CafeCatalog::new();
    if let Some(path) = &config.menu_file {
        match MenuFile::load(path) {
            Ok(menu) => {
                info!(path = %path.display(), items = menu.items.len(), "seeding menu");
                catalog.seed(menu);
            }
            Err(err) => {
                error!(%err, "failed to load menu file");
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(&mut catalog, stdin.lock(), stdout.lock(), &config.stop_word);
    if let Err(err) = console.run() {
        error!(%err, "console failed");
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
