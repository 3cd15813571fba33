//! CLI subcommands.

pub mod add;
pub mod lists;
pub mod purchase;

use anyhow::{bail, Result};
use bringctl_client::{Session, ShoppingList};

/// Resolves a list handle by display name.
pub(crate) fn find_list<'a>(
    session: &'a Session,
    name: &str,
) -> Result<ShoppingList<'a, Session>> {
    let Some(list) = session.lists()?.into_iter().find(|l| l.name() == name) else {
        bail!("no list named '{name}'");
    };
    Ok(list)
}
