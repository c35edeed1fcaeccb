// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response bodies of the seller API endpoints.
//!
//! Response collections tolerate both missing keys and explicit `null`.

use serde::{Deserialize, Deserializer, Serialize};
use supply_plan_domain::{
    CalculationError, CalculationStatus, ClusterId, DomainError, DraftId, DraftType, OperationId,
    Quantity, Sku, Timeslot, WarehouseId, WarehouseOption,
};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Seller API endpoints used by the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /v1/cluster/list`
    ClusterList,
    /// `POST /v1/draft/create`
    DraftCreate,
    /// `POST /v1/draft/create/info`
    DraftCreateInfo,
    /// `POST /v1/draft/timeslot/info`
    DraftTimeslotInfo,
}

impl Endpoint {
    /// Returns the endpoint path.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::ClusterList => "/v1/cluster/list",
            Self::DraftCreate => "/v1/draft/create",
            Self::DraftCreateInfo => "/v1/draft/create/info",
            Self::DraftTimeslotInfo => "/v1/draft/timeslot/info",
        }
    }
}

/// Body of `cluster/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterListRequest {
    /// Cluster ids, as strings.
    pub cluster_ids: Vec<String>,
    /// Always `CLUSTER_TYPE_OZON`.
    pub cluster_type: &'static str,
}

impl ClusterListRequest {
    /// Builds a request for a single cluster.
    #[must_use]
    pub fn for_cluster(cluster_id: ClusterId) -> Self {
        Self {
            cluster_ids: vec![cluster_id.to_string()],
            cluster_type: "CLUSTER_TYPE_OZON",
        }
    }
}

/// A warehouse reference inside a cluster record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WarehouseRef {
    /// The warehouse id.
    #[serde(default)]
    pub warehouse_id: Option<WarehouseId>,
    /// The warehouse name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Cluster metadata returned by `cluster/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterRecord {
    /// The cluster id.
    pub id: ClusterId,
    /// The cluster display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Warehouses in the cluster.
    #[serde(default, deserialize_with = "null_as_default")]
    pub warehouses: Vec<WarehouseRef>,
}

/// Response of `cluster/list`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ClusterListResponse {
    /// The matching clusters; possibly empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub clusters: Vec<ClusterRecord>,
}

/// One line item of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DraftItem {
    /// Item quantity.
    pub quantity: Quantity,
    /// Item SKU.
    pub sku: Sku,
}

/// Body of `draft/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftCreateRequest {
    /// Target cluster ids, as strings.
    pub cluster_ids: Vec<String>,
    /// The fixed drop-off warehouse.
    pub drop_off_point_warehouse_id: WarehouseId,
    /// Line items.
    pub items: Vec<DraftItem>,
    /// Supply type.
    #[serde(rename = "type")]
    pub draft_type: DraftType,
}

/// Response of `draft/create`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DraftCreateResponse {
    /// Handle for the asynchronous calculation.
    pub operation_id: OperationId,
}

/// Body of `draft/create/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftInfoRequest {
    /// The operation to look up.
    pub operation_id: OperationId,
}

/// The supply warehouse sub-record of a calculated warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SupplyWarehouse {
    /// The warehouse id.
    #[serde(default)]
    pub warehouse_id: Option<WarehouseId>,
    /// The warehouse name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A warehouse entry of a calculated cluster.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatedWarehouse {
    /// Where the supply would be received.
    #[serde(default)]
    pub supply_warehouse: Option<SupplyWarehouse>,
}

impl CalculatedWarehouse {
    /// Converts this entry into a selectable option, with placeholders for
    /// missing fields.
    #[must_use]
    pub fn to_option(&self) -> WarehouseOption {
        let supply: Option<&SupplyWarehouse> = self.supply_warehouse.as_ref();
        WarehouseOption::new(
            supply.and_then(|s| s.warehouse_id),
            supply.and_then(|s| s.name.as_deref()),
        )
    }
}

/// A cluster entry of a calculation result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClusterInfo {
    /// The cluster id.
    #[serde(default)]
    pub cluster_id: Option<ClusterId>,
    /// The cluster name.
    #[serde(default)]
    pub cluster_name: Option<String>,
    /// Warehouses able to receive the supply.
    #[serde(default, deserialize_with = "null_as_default")]
    pub warehouses: Vec<CalculatedWarehouse>,
}

/// Response of `draft/create/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftInfo {
    /// Raw calculation status.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// The durable draft id, once known.
    #[serde(default)]
    pub draft_id: Option<DraftId>,
    /// Calculated clusters.
    #[serde(default, deserialize_with = "null_as_default")]
    pub clusters: Vec<ClusterInfo>,
    /// Validation errors of a failed calculation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<CalculationError>,
}

impl DraftInfo {
    /// Parses the calculation status.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownCalculationStatus` for undocumented values.
    pub fn calculation_status(&self) -> Result<CalculationStatus, DomainError> {
        self.status.parse()
    }

    /// Returns the draft id, treating `0` as absent.
    #[must_use]
    pub fn existing_draft_id(&self) -> Option<DraftId> {
        self.draft_id.filter(|id| id.value() != 0)
    }

    /// Returns the warehouse options of the first cluster.
    ///
    /// Calculation results are expected to hold one cluster per draft;
    /// any further clusters are ignored.
    #[must_use]
    pub fn warehouse_options(&self) -> Vec<WarehouseOption> {
        self.clusters
            .first()
            .map(|cluster| {
                cluster
                    .warehouses
                    .iter()
                    .map(CalculatedWarehouse::to_option)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Body of `draft/timeslot/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeslotInfoRequest {
    /// Window start, UTC.
    pub date_from: String,
    /// Window end, UTC.
    pub date_to: String,
    /// The draft to look up slots for.
    pub draft_id: DraftId,
    /// The chosen warehouse.
    pub warehouse_ids: Vec<WarehouseId>,
}

/// One slot of a day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotWindow {
    /// Start, in the warehouse timezone.
    #[serde(default, deserialize_with = "null_as_default")]
    pub from_in_timezone: String,
    /// End, in the warehouse timezone.
    #[serde(default, deserialize_with = "null_as_default")]
    pub to_in_timezone: String,
}

/// The slots of one day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayTimeslots {
    /// Slots in the day.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timeslots: Vec<SlotWindow>,
}

/// The days of one drop-off warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WarehouseTimeslots {
    /// The warehouse id.
    #[serde(default)]
    pub drop_off_warehouse_id: Option<WarehouseId>,
    /// Days with slots.
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: Vec<DayTimeslots>,
}

/// Response of `draft/timeslot/info`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeslotInfoResponse {
    /// Nested warehouse → day → slot structure.
    #[serde(default, deserialize_with = "null_as_default")]
    pub drop_off_warehouse_timeslots: Vec<WarehouseTimeslots>,
}

impl TimeslotInfoResponse {
    /// Flattens the nested structure into one list, keeping each slot's
    /// warehouse id. Order follows the response.
    #[must_use]
    pub fn flatten(&self) -> Vec<Timeslot> {
        self.drop_off_warehouse_timeslots
            .iter()
            .flat_map(|warehouse| {
                warehouse
                    .days
                    .iter()
                    .flat_map(|day| day.timeslots.iter())
                    .map(|slot| Timeslot {
                        from: slot.from_in_timezone.clone(),
                        to: slot.to_in_timezone.clone(),
                        warehouse_id: warehouse.drop_off_warehouse_id,
                    })
            })
            .collect()
    }
}
