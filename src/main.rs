use RadShock::cli::cli_main::run_interactive_menu;
use RadShock::cli::cli_shock::solve_task_file;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

pub fn main() {
    if let Err(e) = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logger is not available: {}", e);
    }
    // `RadShock task.json` solves the task non-interactively
    match std::env::args().nth(1) {
        Some(path) => {
            if let Err(e) = solve_task_file(PathBuf::from(path)) {
                println!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => run_interactive_menu(),
    }
}
