use crate::{
    cmd,
    opts::{MarketplaceOpts, ShellOpts},
};
use clap::{Parser, Subcommand};
use eyre::Result;

/// Browse, list and buy products on a Marketplace contract.
#[derive(Debug, Parser)]
#[command(name = "marketplace", version, next_display_order = None)]
pub struct MarketplaceArgs {
    #[command(flatten)]
    pub shell: ShellOpts,

    #[command(flatten)]
    pub opts: MarketplaceOpts,

    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub cmd: Option<MarketplaceSubcommand>,
}

#[derive(Debug, Subcommand)]
pub enum MarketplaceSubcommand {
    /// List the products on the marketplace.
    #[command(visible_alias = "ls")]
    List,

    /// List a new product for sale.
    #[command(visible_alias = "c")]
    Create {
        /// The product name.
        name: String,

        /// The price in ether, e.g. `1.5`.
        price: String,
    },

    /// Buy a product.
    #[command(visible_alias = "p")]
    Purchase {
        /// The product id.
        id: u64,

        /// The amount to pay in ether. Defaults to the listed price.
        price: Option<String>,
    },

    /// Browse the marketplace from an interactive menu.
    #[command(visible_alias = "i")]
    Interactive,
}

impl MarketplaceArgs {
    pub async fn run(self) -> Result<()> {
        let config = self.opts.load_config()?;
        trace!(?config, "loaded config");
        match self.cmd.unwrap_or(MarketplaceSubcommand::Interactive) {
            MarketplaceSubcommand::List => cmd::list::run(&config, &self.opts.wallet).await,
            MarketplaceSubcommand::Create { name, price } => {
                cmd::create::run(&config, &self.opts.wallet, &name, &price).await
            }
            MarketplaceSubcommand::Purchase { id, price } => {
                cmd::purchase::run(&config, &self.opts.wallet, id, price.as_deref()).await
            }
            MarketplaceSubcommand::Interactive => {
                cmd::interactive::run(&config, &self.opts.wallet).await
            }
        }
    }
}
