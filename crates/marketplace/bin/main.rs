use clap::Parser;
use eyre::Result;
use marketplace::{args::MarketplaceArgs, handler, utils};

fn main() -> Result<()> {
    handler::install();
    utils::load_dotenv();
    utils::subscriber();

    let args = MarketplaceArgs::parse();
    args.shell.set_global_shell();
    run(args)
}

#[tokio::main]
async fn run(args: MarketplaceArgs) -> Result<()> {
    args.run().await
}
