use anyhow::Context;
use clap::Parser;
use snapshot_core::config::{ClientConfig, default_config_path};
use snapshot_core::{Client, Error, GetRepositoryRequest};
use snapshot_transport::HttpTransport;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod app;
mod args;
mod config_cmd;
mod errors;
mod repository_cmd;

use args::*;

use config_cmd::handle_config;
use errors::map_api_error;
use repository_cmd::handle_get_repository;

pub fn run() -> anyhow::Result<()> {
    app::run()
}
