// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seller API client: cluster lookup, draft creation and draft info.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use supply_plan_domain::{
    ClusterId, DROP_OFF_WAREHOUSE_ID, DraftId, DraftInputs, DraftType, OperationId,
};
use tracing::{info, warn};

use crate::error::CoreError;
use crate::retry::{RetryPolicies, retry_call};
use crate::transport::{HttpRequest, HttpResponse, Sleeper, Transport};
use crate::wire::{
    ClusterListRequest, ClusterListResponse, ClusterRecord, DraftCreateRequest,
    DraftCreateResponse, DraftInfo, DraftInfoRequest, DraftItem, Endpoint,
};

/// Default production base URL of the seller API.
pub const DEFAULT_BASE_URL: &str = "https://api-seller.ozon.ru";

/// Seller account credentials sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Value of the `Client-Id` header.
    pub client_id: String,
    /// Value of the `Api-Key` header.
    pub api_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Client for the seller API endpoints the workflow uses.
///
/// The transport and timer are injected so the retry behavior can be
/// exercised without a network.
#[derive(Clone)]
pub struct SellerClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) sleeper: Arc<dyn Sleeper>,
    base_url: String,
    credentials: Credentials,
    pub(crate) policies: RetryPolicies,
}

impl SellerClient {
    /// Creates a client with the default retry policies.
    ///
    /// # Arguments
    ///
    /// * `transport` - Sends the HTTP requests
    /// * `sleeper` - Waits between attempts
    /// * `base_url` - API origin without a trailing slash
    /// * `credentials` - Seller account credentials
    #[must_use]
    pub fn new(
        transport: Arc<dyn Transport>,
        sleeper: Arc<dyn Sleeper>,
        base_url: &str,
        credentials: Credentials,
    ) -> Self {
        Self {
            transport,
            sleeper,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            policies: RetryPolicies::default(),
        }
    }

    /// Replaces the retry policies.
    #[must_use]
    pub const fn with_policies(mut self, policies: RetryPolicies) -> Self {
        self.policies = policies;
        self
    }

    /// Returns the retry policies in use.
    #[must_use]
    pub const fn policies(&self) -> &RetryPolicies {
        &self.policies
    }

    /// Performs a single POST to `endpoint`.
    pub(crate) async fn post<B: Serialize + Sync>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<HttpResponse, CoreError> {
        let body: serde_json::Value =
            serde_json::to_value(body).map_err(|e| CoreError::Decode(e.to_string()))?;
        let request: HttpRequest = HttpRequest {
            url: format!("{}{}", self.base_url, endpoint.path()),
            headers: vec![
                (String::from("Client-Id"), self.credentials.client_id.clone()),
                (String::from("Api-Key"), self.credentials.api_key.clone()),
                (
                    String::from("Content-Type"),
                    String::from("application/json"),
                ),
            ],
            body,
        };
        self.transport.post(request).await
    }

    /// Fetches cluster metadata for `cluster_id`.
    ///
    /// A single attempt is made. An empty list is a valid outcome.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ClusterFetchFailed` on any transport, status or
    /// decoding failure.
    pub async fn fetch_clusters(&self, cluster_id: ClusterId) -> Result<Vec<ClusterRecord>, CoreError> {
        info!(%cluster_id, "Requesting cluster list");
        let request: ClusterListRequest = ClusterListRequest::for_cluster(cluster_id);
        let response: HttpResponse = self
            .post(Endpoint::ClusterList, &request)
            .await
            .map_err(|e| CoreError::ClusterFetchFailed(e.to_string()))?;

        if response.status != HttpResponse::OK {
            warn!(status = response.status, body = %response.body, "Cluster list request failed");
            return Err(CoreError::ClusterFetchFailed(response.body));
        }

        let parsed: ClusterListResponse = decode(&response.body)
            .map_err(|e| CoreError::ClusterFetchFailed(e.to_string()))?;
        info!(count = parsed.clusters.len(), "Received clusters");
        Ok(parsed.clusters)
    }

    /// Submits a cross-dock draft for one SKU and returns its operation id.
    ///
    /// Rate limited attempts are retried per the draft creation policy;
    /// any other non-200 status fails at once.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::HttpStatus` for a non-retryable status or
    /// `CoreError::RetriesExhausted` once attempts run out.
    pub async fn create_draft(
        &self,
        cluster_id: ClusterId,
        inputs: DraftInputs,
    ) -> Result<OperationId, CoreError> {
        let request: DraftCreateRequest = DraftCreateRequest {
            cluster_ids: vec![cluster_id.to_string()],
            drop_off_point_warehouse_id: DROP_OFF_WAREHOUSE_ID,
            items: vec![DraftItem {
                quantity: inputs.quantity,
                sku: inputs.sku,
            }],
            draft_type: DraftType::Crossdock,
        };

        let call: String = format!("draft/create cluster={cluster_id} sku={}", inputs.sku);
        let response: DraftCreateResponse = retry_call(
            &self.policies.draft_create,
            self.sleeper.as_ref(),
            &call,
            || self.post(Endpoint::DraftCreate, &request),
            decode::<DraftCreateResponse>,
        )
        .await?;

        info!(%cluster_id, operation_id = %response.operation_id, "Draft created");
        Ok(response.operation_id)
    }

    /// Looks up the draft created by `operation_id`, retrying any failure.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RetriesExhausted` once attempts run out, or
    /// `CoreError::DraftNotFound` if the response has no draft id.
    pub async fn resolve_draft_id(
        &self,
        operation_id: &OperationId,
    ) -> Result<DraftId, CoreError> {
        let request: DraftInfoRequest = DraftInfoRequest {
            operation_id: operation_id.clone(),
        };
        let call: String = format!("draft/create/info operation={operation_id}");
        let info: DraftInfo = retry_call(
            &self.policies.draft_info,
            self.sleeper.as_ref(),
            &call,
            || self.post(Endpoint::DraftCreateInfo, &request),
            decode::<DraftInfo>,
        )
        .await?;

        let draft_id: DraftId = info
            .existing_draft_id()
            .ok_or_else(|| CoreError::DraftNotFound {
                operation_id: operation_id.clone(),
            })?;
        info!(%operation_id, %draft_id, "Resolved draft id");
        Ok(draft_id)
    }
}

/// Decodes a JSON response body.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, CoreError> {
    serde_json::from_str(body).map_err(|e| CoreError::Decode(e.to_string()))
}
