mod args;
mod report;

use std::process::ExitCode;

use anyhow::{Context, Result};
use providers::{ChartAdvisor, FixedAdvisor, OllamaAdvisor};
use shared::AdvisorSettings;
use tracing_subscriber::EnvFilter;

use crate::args::{Command, USAGE};
use crate::report::Request;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let args = match args::parse(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Run(args) => args,
    };

    let settings = AdvisorSettings::load(args.config.as_deref())?;
    let advisor: Box<dyn ChartAdvisor> = if args.offline {
        tracing::info!("offline run, advisor disabled");
        Box::new(FixedAdvisor::default())
    } else {
        tracing::info!(base_url = %settings.base_url, model = %settings.model, "using advisor");
        Box::new(OllamaAdvisor::new(settings))
    };

    let request = Request {
        file: &args.file,
        x: &args.x,
        y: &args.y,
        kind: args.kind.as_deref(),
        explain: args.explain,
    };
    let report = report::build(request, advisor.as_ref()).await?;

    let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
    println!("{}", json);
    Ok(())
}
