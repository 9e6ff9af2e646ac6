//! `pedigree` command-line tool.
//!
//! ```text
//! pedigree check record.json            # full record, create mode
//! pedigree check --update patch.json    # partial record
//! pedigree nni fr1234567890             # live identifier check
//! pedigree serve --config pedigree.toml # JSON API over an in-memory store
//! ```
//!
//! `check` and `nni` exit with status 1 when the input is rejected.

mod config;

use std::{
  io::Read as _,
  path::{Path, PathBuf},
  process::ExitCode,
  sync::Arc,
};

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pedigree_api::MemoryStore;
use pedigree_validate::FieldErrorMap;
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Livestock pedigree validation")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Validate a JSON record file (`-` reads stdin).
  Check {
    file: PathBuf,

    /// Treat the input as a partial update.
    #[arg(long)]
    update: bool,

    /// Validation date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Print violations as a JSON object instead of one per line.
    #[arg(long)]
    json: bool,
  },

  /// Check and normalize a single NNI.
  Nni { value: String },

  /// Serve the JSON API backed by an in-memory store.
  Serve {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "pedigree.toml")]
    config: PathBuf,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  match Cli::parse().command {
    Command::Check {
      file,
      update,
      as_of,
      json,
    } => {
      let input = read_input(&file)?;
      let today = as_of.unwrap_or_else(pedigree_validate::field::today);
      let verdict = if update {
        render(pedigree_validate::validate_update_as_of(&input, today))
      } else {
        render(pedigree_validate::validate_create_as_of(&input, today))
      };
      match verdict? {
        Ok(normalized) => {
          println!("{normalized}");
          Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
          report(&errors, json)?;
          Ok(ExitCode::FAILURE)
        }
      }
    }

    Command::Nni { value } => {
      match pedigree_validate::field::validate_identifier(&value) {
        Ok(nni) => {
          println!("{nni}");
          Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
          eprintln!("{value}: {e}");
          Ok(ExitCode::FAILURE)
        }
      }
    }

    Command::Serve { config } => {
      serve(&config).await?;
      Ok(ExitCode::SUCCESS)
    }
  }
}

/// Read and parse the JSON document at `path`, or stdin for `-`.
fn read_input(path: &Path) -> anyhow::Result<Value> {
  let text = if path == Path::new("-") {
    let mut buf = String::new();
    std::io::stdin()
      .read_to_string(&mut buf)
      .context("failed to read stdin")?;
    buf
  } else {
    std::fs::read_to_string(path)
      .with_context(|| format!("failed to read {}", path.display()))?
  };
  serde_json::from_str(&text)
    .with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Pretty-print an accepted value, passing violations through untouched.
fn render<T: Serialize>(
  verdict: Result<T, FieldErrorMap>,
) -> anyhow::Result<Result<String, FieldErrorMap>> {
  match verdict {
    Ok(value) => Ok(Ok(serde_json::to_string_pretty(&value)?)),
    Err(errors) => Ok(Err(errors)),
  }
}

fn report(errors: &FieldErrorMap, json: bool) -> anyhow::Result<()> {
  if json {
    println!("{}", serde_json::to_string_pretty(errors)?);
  } else {
    for entry in errors {
      eprintln!("{}: {}", entry.path, entry.message);
    }
  }
  Ok(())
}

async fn serve(config_path: &Path) -> anyhow::Result<()> {
  let cfg = ServerConfig::load(config_path)?;
  let store = Arc::new(MemoryStore::new());
  let app = pedigree_api::api_router(store);

  let address = cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;
  Ok(())
}
