//! # Swap Demo Utility
//!
//! Fetches a quote or builds swap instructions against the configured
//! Jupiter endpoint and prints the result. Nothing is signed or sent.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package swap-demo --bin swap_demo -- quote SOL USDC 100000000
//! cargo run --package swap-demo --bin swap_demo -- buy BONK 100000000
//! cargo run --package swap-demo --bin swap_demo -- sell BONK 1000000000
//! ```
//!
//! Tokens may be symbols (SOL, USDC, USDT, BONK, WIF, JUP) or mint addresses.
//! `buy` and `sell` need `WALLET_PUBLIC_KEY`; see `lib_core::config` for the
//! other environment variables.

use anyhow::{anyhow, bail, Context};
use lib_core::config::{core_config, init_config};
use lib_jupiter::{JupiterService, SwapService};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = concat!(
    "usage: swap_demo quote <input> <output> <amount>\n",
    "       swap_demo buy <token> <lamports>\n",
    "       swap_demo sell <token> <amount>",
);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [command, rest @ ..] = args.as_slice() else {
        bail!("{}", USAGE);
    };

    init_config().context("Invalid Jupiter configuration")?;
    let config = core_config();
    let service = JupiterService::from_config(config)?;

    info!(
        api_base = %config.api_base,
        preset = config.preset.as_deref().unwrap_or("none"),
        slippage_bps = service.config().quote.slippage_bps,
        "Jupiter client ready"
    );

    let mint = |token: &str| -> String {
        service
            .config()
            .tokens
            .by_symbol(token)
            .map(str::to_string)
            .unwrap_or_else(|| token.to_string())
    };

    match (command.as_str(), rest) {
        ("quote", [input, output, amount]) => {
            let (input, output) = (mint(input), mint(output));
            for address in [&input, &output] {
                if !service.is_valid_mint(address) {
                    tracing::warn!("{} may not be a valid mint", address);
                }
            }

            let quote = service.get_route_info(&input, &output, amount).await?;
            println!("{}", serde_json::to_string_pretty(&quote)?);
            println!(
                "Route: {} (price impact {}%)",
                quote.route_labels().join(" -> "),
                quote.price_impact()?
            );
        }
        ("buy" | "sell", [token, amount]) => {
            let wallet = config
                .wallet_public_key
                .clone()
                .ok_or_else(|| anyhow!("WALLET_PUBLIC_KEY must be set for {}", command))?;
            let token = mint(token);
            let swaps = SwapService::new(service, wallet);

            let instructions = if command == "buy" {
                swaps.buy(&token, amount, None).await?
            } else {
                swaps.sell(&token, amount, None).await?
            };

            println!("{}", serde_json::to_string_pretty(&instructions)?);
            println!(
                "{} instruction(s), {} lookup table(s)",
                instructions.instruction_count(),
                instructions.address_lookup_table_addresses.len()
            );
        }
        _ => bail!("{}", USAGE),
    }

    Ok(())
}
