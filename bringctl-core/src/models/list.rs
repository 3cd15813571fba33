//! List summary and detail payloads.

use serde::{Deserialize, Serialize};

use super::item::Item;

/// One entry from the list-of-lists endpoint.
///
/// The uuid is the opaque addressing key for every list-scoped call; the
/// name is display-only and what the CLI filters on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    /// Display name of the list.
    pub name: String,

    /// Stable identifier issued by the remote service.
    #[serde(rename = "listUuid")]
    pub uuid: String,
}

/// Full contents of one list as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDetail {
    /// Status string reported by the remote service.
    #[serde(default)]
    pub status: String,

    /// Items still to buy, in remote order.
    #[serde(default)]
    pub purchase: Vec<Item>,

    /// Items recently marked purchased, in remote order.
    #[serde(default)]
    pub recently: Vec<Item>,
}
