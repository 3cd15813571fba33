//! Lists command - show lists and their contents.

use anyhow::Result;
use tracing::info;

use bringctl_client::Session;

/// Arguments for the lists command.
#[derive(clap::Args)]
pub struct ListsArgs {
    /// Only show lists with these names (repeatable).
    #[arg(long = "list", short = 'l', value_name = "NAME")]
    pub lists: Vec<String>,

    /// Also print the recently used items.
    #[arg(long, short = 'r')]
    pub show_recently: bool,
}

/// Runs the lists command.
pub fn run(args: &ListsArgs, session: &Session) -> Result<()> {
    info!("Fetching lists");

    let mut lists = session.lists()?;
    for list in &mut lists {
        if !args.lists.is_empty() && !args.lists.iter().any(|n| n == list.name()) {
            continue;
        }

        println!("{}", list.summary()?);

        let pending = list.pending_items()?.to_vec();
        if !pending.is_empty() {
            println!("Purchase:");
            for item in &pending {
                println!("- {item}");
            }
        }

        if args.show_recently {
            let recently = list.recently_items()?.to_vec();
            if !recently.is_empty() {
                println!("Recently:");
                for item in &recently {
                    println!("- {item}");
                }
            }
        }
    }

    Ok(())
}
