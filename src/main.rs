use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::debug;

use ssl4eo_launch::cli::Args;
use ssl4eo_launch::error::LaunchError;
use ssl4eo_launch::invocation::{self, Invocation};
use ssl4eo_launch::launch_config::LaunchConfig;
use ssl4eo_launch::presets;
use ssl4eo_launch::runner::SystemRunner;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let code = match run(args).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            err.downcast_ref::<LaunchError>()
                .map_or(1, LaunchError::exit_code)
        }
    };
    std::process::exit(code);
}

async fn run(args: Args) -> Result<i32> {
    if args.list_presets {
        for id in presets::PRESETS {
            println!("{}\t{}", id, presets::load(id)?.name);
        }
        return Ok(0);
    }

    if let Some(path) = &args.plan {
        debug!("Replaying plan {}", path.display());
        let invocation = Invocation::read(path)
            .with_context(|| format!("Unable to load {}", path.display()))?;
        return launch(&invocation, args.dry_run).await;
    }

    let mut config = match &args.config {
        Some(path) => {
            debug!("Reading config from {}", path.display());
            LaunchConfig::read(path)
                .with_context(|| format!("Unable to load {}", path.display()))?
        }
        None => {
            debug!("Using preset {}", args.preset);
            presets::load(&args.preset)?
        }
    };
    args.apply_overrides(&mut config);

    if let Some(path) = &args.write_config {
        config.write(path)?;
        return Ok(0);
    }

    let install_dir = match &args.install_dir {
        Some(dir) => dir.clone(),
        None => invocation::install_dir()?,
    };
    let invocation = Invocation::from_config(&config, &install_dir)?;

    if let Some(path) = &args.write_plan {
        invocation.write(path)?;
    }

    launch(&invocation, args.dry_run).await
}

async fn launch(invocation: &Invocation, dry_run: bool) -> Result<i32> {
    if dry_run {
        println!("{}", serde_json::to_string_pretty(&invocation.command_line())?);
        return Ok(0);
    }
    let code = invocation.execute(&SystemRunner).await?;
    Ok(code)
}
