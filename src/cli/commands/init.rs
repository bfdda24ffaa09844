use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command: write the configuration file.
///
/// An existing file is kept unless `--force` is given. Overrides passed on
/// the command line (e.g. `--api`) end up in the written file.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = Config::resolve_path(cli.config.as_deref());

    if path.exists() && !force {
        warning(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    cfg.save_to(&path)?;
    success(format!("Config file: {}", path.display()));
    println!("🌐 API        : {}", cfg.api_base_url);
    println!("⏱️  Interval   : {}s", cfg.refresh_interval_secs);
    Ok(())
}
