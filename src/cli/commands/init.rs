use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file with default values
///
/// The defaults point at a local API instance; edit the file afterwards
/// to set the real endpoint and your identity.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing parkspot…");

    let path = Config::init_all(cli.config.as_deref())?;
    let cfg = Config::load_from(cli.config.as_deref())?;

    println!("📄 Config file : {}", path.display());
    println!("🌐 API URL     : {}", cfg.api_url);
    println!("👤 Identity    : {} ({} {})", cfg.email, cfg.prenom, cfg.nom);

    println!("🎉 parkspot initialization completed!");
    Ok(())
}
