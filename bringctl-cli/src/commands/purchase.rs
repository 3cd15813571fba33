//! Purchase command - mark an item purchased.

use anyhow::Result;
use tracing::info;

use bringctl_client::Session;

/// Arguments for the purchase command.
#[derive(clap::Args)]
pub struct PurchaseArgs {
    /// List the item is on.
    pub list: String,

    /// Item name.
    pub item: String,
}

/// Runs the purchase command.
pub fn run(args: &PurchaseArgs, session: &Session) -> Result<()> {
    info!(list = %args.list, item = %args.item, "Marking item purchased");

    let mut list = super::find_list(session, &args.list)?;
    list.purchase(&args.item)?;

    println!("Purchased {} on {}", args.item, list.name());
    println!("{}", list.summary()?);

    Ok(())
}
