//! Add command - put an item on a list's purchase collection.

use anyhow::Result;
use tracing::info;

use bringctl_client::Session;
use bringctl_core::Item;

/// Arguments for the add command.
#[derive(clap::Args)]
pub struct AddArgs {
    /// List to add to.
    pub list: String,

    /// Item name.
    pub item: String,

    /// Free-text detail, e.g. an amount.
    #[arg(long, short, default_value = "")]
    pub specification: String,
}

/// Runs the add command.
pub fn run(args: &AddArgs, session: &Session) -> Result<()> {
    info!(list = %args.list, item = %args.item, "Adding item");

    let mut list = super::find_list(session, &args.list)?;
    list.add(&args.item, &args.specification)?;

    println!(
        "Added {} to {}",
        Item::new(args.item.clone(), args.specification.clone()),
        list.name()
    );
    println!("{}", list.summary()?);

    Ok(())
}
