//! stampwallet: command-line front-end for account identifiers and history.

mod file_index;
mod render;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use stampwallet_crypto::principal_from_slice;
use stampwallet_ledger::{AddressMode, DirectionFilter};
use stampwallet_types::Subaccount;
use stampwallet_wallet_core::{
    HistoryPage, HistoryService, IndexClient, TransactionIndex, Wallet, WalletConfig, WalletError,
};

use file_index::FileIndex;

#[derive(Parser)]
#[command(name = "stampwallet", about = "Stamp card wallet tools")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "STAMPWALLET_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "STAMPWALLET_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "STAMPWALLET_LOG_FORMAT")]
    log_format: Option<String>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print the account identifier of a principal.
    #[command(name = "account-id")]
    AccountId {
        /// Principal in text form, e.g. "2vxsx-fae".
        principal: String,

        /// Subaccount as 64 hex characters.
        #[arg(long, conflicts_with = "subaccount_index")]
        subaccount: Option<String>,

        /// Subaccount as a number (big-endian in the last 8 bytes).
        #[arg(long)]
        subaccount_index: Option<u64>,
    },

    /// Print the text form of a principal given as hex bytes.
    Principal {
        /// Raw principal bytes in hex (up to 29 bytes).
        bytes: String,
    },

    /// Show the transaction history of an account.
    History {
        /// Account identifier, 64 hex characters.
        #[arg(long)]
        account: String,

        /// Read transactions from a saved index response instead of the index.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Ledger index JSON gateway.
        #[arg(long, env = "STAMPWALLET_INDEX_URL")]
        index_url: Option<String>,

        /// Which transactions to list: "all", "sent" or "received".
        #[arg(long, default_value = "all")]
        filter: DirectionFilter,

        /// Address display: "full" or "compact".
        #[arg(long, env = "STAMPWALLET_ADDRESS_MODE")]
        mode: Option<AddressMode>,

        /// Timezone for timestamps, in minutes east of UTC.
        #[arg(long, env = "STAMPWALLET_UTC_OFFSET", allow_hyphen_values = true)]
        utc_offset: Option<i32>,

        /// Page size.
        #[arg(long, env = "STAMPWALLET_MAX_RESULTS")]
        max_results: Option<u64>,

        /// Continue below this transaction id.
        #[arg(long, conflicts_with = "all")]
        start: Option<u64>,

        /// Follow pages up to the configured page limit.
        #[arg(long)]
        all: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => WalletConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => WalletConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    stampwallet_utils::init_tracing(&config.log_level, &config.log_format)?;
    if let Some(ref path) = cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::AccountId {
            principal,
            subaccount,
            subaccount_index,
        } => {
            let mut wallet = Wallet::from_principal_text(&principal)?;
            if let Some(hex) = subaccount {
                wallet = wallet.with_subaccount(Subaccount::from_hex(&hex)?);
            } else if let Some(index) = subaccount_index {
                wallet = wallet.with_subaccount(Subaccount::from_index(index));
            }
            println!("{}", wallet.account_id_hex());
        }
        Command::Principal { bytes } => {
            let bytes = hex::decode(bytes.trim()).context("principal bytes must be hex")?;
            println!("{}", principal_from_slice(&bytes)?);
        }
        Command::History {
            account,
            file,
            index_url,
            filter,
            mode,
            utc_offset,
            max_results,
            start,
            all,
        } => {
            if let Some(url) = index_url {
                config.index_url = Some(url);
            }
            if let Some(mode) = mode {
                config.address_mode = mode;
            }
            if let Some(minutes) = utc_offset {
                config.utc_offset_minutes = minutes;
            }
            if let Some(n) = max_results {
                config.max_results = n;
            }
            let request = HistoryRequest {
                account,
                start,
                filter,
                all,
            };

            let page = match file {
                Some(path) => {
                    let index = FileIndex::from_file(&path)?;
                    request.run(HistoryService::new(index, config)).await?
                }
                None => {
                    let url = config
                        .index_url
                        .clone()
                        .ok_or(WalletError::NoIndexConnection)?;
                    let timeout = Duration::from_secs(config.request_timeout_secs);
                    let index = IndexClient::new(url, timeout)?;
                    request.run(HistoryService::new(index, config)).await?
                }
            };
            for line in render::page_lines(&page) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

struct HistoryRequest {
    account: String,
    start: Option<u64>,
    filter: DirectionFilter,
    all: bool,
}

impl HistoryRequest {
    async fn run<I: TransactionIndex>(
        self,
        service: HistoryService<I>,
    ) -> Result<HistoryPage, WalletError> {
        if self.all {
            service.load_all_for_hex(&self.account, self.filter).await
        } else {
            service
                .load_page_for_hex(&self.account, self.start, self.filter)
                .await
        }
    }
}
