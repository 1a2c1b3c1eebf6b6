use super::*;
pub(super) fn run() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    info!(command = command_label(&cli.command), "Running command");
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    match cli.command {
        Commands::Config(args) => handle_config(args, &config_path),
        Commands::GetRepository(args) => {
            let config = load_config(&config_path, cli.url.as_deref())?;
            handle_get_repository(args, &config)
        }
    }
}

pub(super) fn load_config(path: &Path, url: Option<&str>) -> anyhow::Result<ClientConfig> {
    let mut config = ClientConfig::load(path)
        .with_context(|| format!("load config from {}", path.display()))?;
    if let Some(url) = url {
        config.set_url(url).context("invalid --url")?;
    }
    debug!(url = config.base_url(), "Using cluster");
    Ok(config)
}

pub(super) fn command_label(command: &Commands) -> &'static str {
    match command {
        Commands::Config(_) => "config",
        Commands::GetRepository(_) => "get-repository",
    }
}
