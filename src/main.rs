// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, read config and hand it to the UI loop.
// - Returns `anyhow::Result` so fatal store errors print their context.

use download_log::{config::AppConfig, ui::main_menu};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Paths are resolved against the working directory, optionally
    // overridden by `download-log.json`. See `config::AppConfig::load`.
    let config = AppConfig::load(".")?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(config)?;
    Ok(())
}
