use super::*;
#[derive(Parser)]
#[command(author, version, about)]
pub(super) struct Cli {
    #[arg(long, global = true, help = "Path to the config file")]
    pub(super) config: Option<PathBuf>,
    #[arg(long, global = true, help = "Cluster URL, overrides the config file")]
    pub(super) url: Option<String>,
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(clap::Subcommand)]
pub(super) enum Commands {
    #[command(about = "Manage config")]
    Config(ConfigArgs),
    #[command(about = "Show snapshot repositories")]
    GetRepository(GetRepositoryArgs),
}

#[derive(Parser)]
pub(super) struct ConfigArgs {
    #[command(subcommand)]
    pub(super) command: ConfigCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum ConfigCommands {
    #[command(about = "Write a config file for a cluster")]
    Init(InitArgs),
    #[command(about = "Print the active config")]
    Show,
}

#[derive(Parser)]
pub(super) struct InitArgs {
    #[arg(long)]
    pub(super) url: String,
    #[arg(long)]
    pub(super) timeout_secs: Option<u64>,
    #[arg(long)]
    pub(super) user_agent: Option<String>,
}

#[derive(Parser)]
pub(super) struct GetRepositoryArgs {
    #[arg(long, value_delimiter = ',', help = "Repository names; omit for all")]
    pub(super) repository: Vec<String>,
    #[arg(long, help = "Timeout for the master node connection, e.g. 30s")]
    pub(super) master_timeout: Option<String>,
    #[arg(long, help = "Read from the local node instead of the master")]
    pub(super) local: bool,
    #[arg(long, value_delimiter = ',', help = "HTTP statuses to ignore, e.g. 404")]
    pub(super) ignore: Vec<u16>,
}

impl GetRepositoryArgs {
    pub(super) fn to_request(&self) -> GetRepositoryRequest {
        let mut request = GetRepositoryRequest::new()
            .repository(self.repository.clone())
            .ignore(self.ignore.iter().copied());
        if let Some(timeout) = &self.master_timeout {
            request = request.master_timeout(timeout.clone());
        }
        if self.local {
            request = request.local(true);
        }
        request
    }
}
