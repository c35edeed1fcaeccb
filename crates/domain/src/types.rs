// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The fixed origin warehouse for cross-dock deliveries.
pub const DROP_OFF_WAREHOUSE_ID: WarehouseId = WarehouseId::new(21_957_475_354_000);

/// A 1-based row in the operator's row table.
///
/// Row 1 holds headers and the region cell; data rows start at row 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowIndex(u32);

impl RowIndex {
    /// The header row.
    pub const HEADER: Self = Self(1);
    /// The first data row.
    pub const FIRST_DATA: Self = Self(2);

    /// Creates a new row index.
    #[must_use]
    pub const fn new(row: u32) -> Self {
        Self(row)
    }

    /// Returns the data row for the cluster at `index` in a cluster list.
    #[must_use]
    pub fn for_cluster_index(index: usize) -> Self {
        Self(u32::try_from(index).map_or(u32::MAX, |i| i.saturating_add(Self::FIRST_DATA.0)))
    }

    /// Returns the raw row number.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RowIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A marketplace logistics cluster identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(i64);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ClusterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A warehouse identifier as used by the seller API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(i64);

impl WarehouseId {
    /// Creates a new warehouse identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The durable draft identifier, available once the calculation succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftId(i64);

impl DraftId {
    /// Creates a new draft identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle correlating a draft creation with its calculation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(String);

impl OperationId {
    /// Creates a new operation identifier.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated, positive SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(u64);

impl Sku {
    /// Creates a SKU, returning `None` unless the value is positive.
    #[must_use]
    pub const fn new(value: u64) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated, positive item quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Creates a quantity, returning `None` unless the value is positive.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The supply type a draft is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DraftType {
    /// Cross-dock delivery through the fixed drop-off warehouse.
    #[default]
    #[serde(rename = "CREATE_TYPE_CROSSDOCK")]
    Crossdock,
}

/// A fulfillment warehouse the operator may choose.
///
/// Either field may be missing from the calculation result; the label
/// falls back to placeholder text in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseOption {
    /// The warehouse identifier, if the API supplied one.
    pub id: Option<WarehouseId>,
    /// The display name.
    pub name: String,
}

impl WarehouseOption {
    /// Placeholder shown when the warehouse name is absent.
    pub const UNNAMED: &'static str = "Name not specified";
    /// Placeholder shown when the warehouse id is absent.
    pub const NO_ID: &'static str = "ID not specified";

    /// Builds an option from the optional API fields.
    #[must_use]
    pub fn new(id: Option<WarehouseId>, name: Option<&str>) -> Self {
        let name: String = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => String::from(Self::UNNAMED),
        };
        Self { id, name }
    }

    /// Returns the display label, `"<name> (ID: <id>)"`.
    #[must_use]
    pub fn label(&self) -> String {
        match self.id {
            Some(id) => format!("{} (ID: {id})", self.name),
            None => format!("{} (ID: {})", self.name, Self::NO_ID),
        }
    }
}
