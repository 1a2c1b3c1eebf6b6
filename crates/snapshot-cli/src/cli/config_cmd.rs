use super::*;
pub(super) fn handle_config(args: ConfigArgs, config_path: &Path) -> anyhow::Result<()> {
    match args.command {
        ConfigCommands::Init(args) => handle_init(args, config_path),
        ConfigCommands::Show => handle_show(config_path),
    }
}

pub(super) fn handle_init(args: InitArgs, config_path: &Path) -> anyhow::Result<()> {
    let mut config = ClientConfig {
        timeout_secs: args.timeout_secs,
        user_agent: args.user_agent,
        ..ClientConfig::default()
    };
    config.set_url(&args.url).context("invalid --url")?;
    config.save(config_path)?;
    println!("Config saved to {}", config_path.display());
    Ok(())
}

fn handle_show(config_path: &Path) -> anyhow::Result<()> {
    let config = ClientConfig::load(config_path)?;
    let data = serde_json::to_string_pretty(&config).context("serialize config")?;
    println!("{data}");
    Ok(())
}
