use super::build_app;
use crate::{
    app::App,
    notify::{Notifier, ShellNotifier},
    view::{accepts_actions, product_label, render},
};
use dialoguer::{Input, Select};
use eyre::Result;
use marketplace_config::Config;
use marketplace_gateway::{
    GatewayConnector,
    units::{format_price, parse_price},
};
use marketplace_wallets::{WalletOpts, WalletProvider};
use std::io::IsTerminal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Create,
    Purchase,
    Refresh,
    Quit,
}

impl Action {
    const ALL: [Self; 4] = [Self::Create, Self::Purchase, Self::Refresh, Self::Quit];

    fn label(self) -> &'static str {
        match self {
            Self::Create => "List a product",
            Self::Purchase => "Buy a product",
            Self::Refresh => "Refresh",
            Self::Quit => "Quit",
        }
    }
}

pub async fn run(config: &Config, wallet: &WalletOpts) -> Result<()> {
    let notifier = ShellNotifier::new(std::io::stdin().is_terminal());
    let mut app = build_app(config, wallet, notifier).await?;
    app.init().await;
    menu(&mut app).await
}

async fn menu<W, C, N>(app: &mut App<W, C, N>) -> Result<()>
where
    W: WalletProvider,
    C: GatewayConnector<W::Signer>,
    N: Notifier,
{
    loop {
        let state = app.state();
        sh_print!("{}", render(&state))?;
        if !accepts_actions(&state) {
            return Ok(());
        }

        let labels = Action::ALL.map(Action::label);
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels[..])
            .default(0)
            .interact()?;
        match Action::ALL[selection] {
            Action::Create => {
                let name: String = Input::new().with_prompt("Product name").interact_text()?;
                let price: String =
                    Input::new().with_prompt("Product price (ETH)").interact_text()?;
                match parse_price(&price) {
                    Ok(price) => {
                        if let Some(tx_hash) = app.create_product(&name, price).await {
                            sh_println!("Product listed in transaction {tx_hash}")?;
                        }
                    }
                    Err(err) => sh_err!("invalid price {price:?}: {err}")?,
                }
            }
            Action::Purchase => {
                if state.products.is_empty() {
                    sh_println!("No products listed.")?;
                    continue;
                }
                let labels: Vec<_> = state.products.iter().map(product_label).collect();
                let index = Select::new().with_prompt("Product").items(&labels[..]).interact()?;
                let product = &state.products[index];
                let id = u64::try_from(product.id)?;
                if let Some(tx_hash) = app.purchase_product(id, &format_price(product.price)).await
                {
                    sh_println!("Product #{id} purchased in transaction {tx_hash}")?;
                }
            }
            Action::Refresh => app.refresh().await,
            Action::Quit => return Ok(()),
        }
    }
}
