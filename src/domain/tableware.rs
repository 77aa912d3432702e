//! The tableware record exchanged between client and server.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A single tableware item.
///
/// `id` is owned by the service: it is assigned on create and taken from the path on update,
/// so whatever the caller sends in that field is only advisory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Tableware {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub material: String,
    /// Category of the item (e.g. cup, plate). Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    /// Capacity in millilitres. `capacity` is accepted as an input alias.
    #[serde(alias = "capacity")]
    pub volume: i32,
}

impl Tableware {
    /// Builds a record that has not been stored yet (`id` is 0 until the service assigns one).
    pub fn new(
        name: impl Into<String>,
        material: impl Into<String>,
        kind: impl Into<String>,
        price: f64,
        volume: i32,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            material: material.into(),
            kind: kind.into(),
            price,
            volume,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// True when both records carry the same content, ignoring `id`.
    pub fn same_content(&self, other: &Tableware) -> bool {
        self.name == other.name
            && self.material == other.material
            && self.kind == other.kind
            && self.price == other.price
            && self.volume == other.volume
    }
}

impl fmt::Display for Tableware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tableware{{id={}, name='{}', material='{}', type='{}', price={}, volume={}}}",
            self.id, self.name, self.material, self.kind, self.price, self.volume
        )
    }
}
