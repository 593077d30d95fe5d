use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use classroom_admin::config::Config;
use classroom_admin::logger::{self, Logger};
use classroom_admin::routes::Route;
use classroom_admin::service::{ClassroomService, LocalClassroomService};
use classroom_admin::storage::LocalStorage;
use classroom_admin::ui;

#[derive(Parser, Debug)]
#[command(name = "classroom-admin")]
#[command(about = "Terminal admin screen for classroom records")]
struct Args {
    /// Configuration file to use instead of the default search order
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,

    /// Screen to open after loading, e.g. /phong-hoc/them-moi or /phong-hoc/chinh-sua/P101
    #[arg(long, value_name = "PATH", value_parser = Route::parse)]
    route: Option<Route>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(target) = args.generate_config {
        let path = match target {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::new();
    if let Some(log_path) = logger::init_file_logging(&config.logging)? {
        logger.log(format!("Logging to {}", log_path.display()));
    }

    let storage = LocalStorage::new(&config.storage)
        .await
        .context("Failed to open classroom storage")?;

    if let Some(seed_file) = config.storage.seed_file() {
        let imported = storage
            .seed_from_file(&seed_file)
            .await
            .with_context(|| format!("Failed to import seed file: {}", seed_file.display()))?;
        logger.log(format!("Seed: imported {} classrooms from {}", imported, seed_file.display()));
    }

    let service: Arc<dyn ClassroomService> = Arc::new(LocalClassroomService::new(Arc::new(storage)));

    ui::run_app(service, &config, logger, args.route).await
}
