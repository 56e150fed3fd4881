//! sft-cli entry point: argument dispatch and the per-command error
//! boundary
//!
//! Every internal failure is rendered as a single human-readable line;
//! interrupting the watch loop only abandons the local wait, the
//! transaction itself stays on the network.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use sft_cli::errors::Error;
use sft_cli::extractor::ExtractionRule;
use sft_cli::network::GatewayClient;
use sft_cli::prompt;
use sft_cli::settings::{Chain, Settings};
use sft_cli::signing::PemSigner;
use sft_cli::store::ConfigStore;
use sft_cli::types::TransactionStatus;
use sft_cli::watcher::TokioClock;
use sft_cli::workflows::{self, WorkflowContext, WorkflowReport};

#[derive(Parser, Debug)]
#[command(name = "sft-cli", version, about = "Issue, configure and mint semi-fungible tokens")]
struct Cli {
    /// Network environment to run against
    #[arg(long, value_enum, env = "SFT_CHAIN")]
    chain: Option<Chain>,

    /// Path to the PEM wallet file
    #[arg(long)]
    pem: Option<String>,

    /// Path to the settings file
    #[arg(long, default_value = "settings.toml")]
    settings: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Issue a new semi-fungible token
    IssueToken {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        ticker: Option<String>,
    },
    /// Grant create/burn/add-quantity roles on the issued token
    SetRoles,
    /// Mint units of the issued token
    MintSft {
        #[arg(long)]
        quantity: Option<u32>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        royalties: Option<u32>,
        #[arg(long)]
        metadata_cid: Option<String>,
        #[arg(long)]
        tags: Option<String>,
        #[arg(long)]
        image_cid: Option<String>,
    },
    /// Add quantity to an existing token (not implemented)
    AddSftQuantity,
    /// Burn units of the issued token (not implemented)
    BurnSft,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sft_cli={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    // Help, version and invalid invocations all exit non-zero.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(2);
        }
    };

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => {}
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = Settings::load(&cli.settings)
        .with_context(|| format!("failed to load settings from {}", cli.settings))?;
    if let Some(chain) = cli.chain {
        settings.chain = chain;
    }
    if let Some(pem) = cli.pem {
        settings.pem_path = pem;
    }
    info!(chain = settings.chain.name(), "running");

    match cli.command {
        Command::AddSftQuantity | Command::BurnSft => {
            anyhow::bail!("not implemented yet");
        }
        command => dispatch(command, &settings).await,
    }
}

async fn dispatch(command: Command, settings: &Settings) -> anyhow::Result<()> {
    let signer = PemSigner::from_pem_file(&settings.pem_path).map_err(Error::Signing)?;
    let network = GatewayClient::new(settings.chain.gateway_url(), settings.http_timeout())?;
    let store = ConfigStore::in_working_dir();
    let clock = TokioClock;

    let ctx = WorkflowContext {
        network: &network,
        signer: &signer,
        clock: &clock,
        store: &store,
        settings,
        rule: ExtractionRule::FirstLogTopic,
    };

    let workflow = async {
        match command {
            Command::IssueToken { name, ticker } => {
                let args = prompt::collect_issue_args(name, ticker)?;
                if let Err(errors) = args.validate() {
                    for e in &errors {
                        eprintln!("{e}");
                    }
                    anyhow::bail!("invalid arguments");
                }
                Ok(workflows::issue::run(&ctx, &args).await?)
            }
            Command::SetRoles => Ok(workflows::roles::run(&ctx).await?),
            Command::MintSft {
                quantity,
                name,
                royalties,
                metadata_cid,
                tags,
                image_cid,
            } => {
                let args = prompt::collect_mint_args(
                    quantity,
                    name,
                    royalties,
                    metadata_cid,
                    tags,
                    image_cid,
                )?;
                if let Err(errors) = args.validate() {
                    for e in &errors {
                        eprintln!("{e}");
                    }
                    anyhow::bail!("invalid arguments");
                }
                Ok(workflows::mint::run(&ctx, &args).await?)
            }
            Command::AddSftQuantity | Command::BurnSft => unreachable!("handled in run"),
        }
    };

    // Only the local wait is interruptible; a submitted transaction stays
    // on the network either way.
    let report: WorkflowReport = tokio::select! {
        result = workflow => result?,
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted; any submitted transaction remains on the network");
            std::process::exit(130);
        }
    };

    println!("Transaction: {}", report.explorer_link(settings));
    match report.status {
        TransactionStatus::Unknown => {
            println!("Outcome unknown: settlement was not observed in time; check the explorer.");
        }
        _ => {
            if let Some(id) = &report.token_identifier {
                println!("Token identifier: {id}");
            }
        }
    }
    Ok(())
}
