use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::constants::{requests_canceled_message, NOTHING_TO_CANCEL_MESSAGE};
use crate::database::{StoreError, StoreGateway};
use crate::error::{HelpdeskError, Result};
use crate::logging::log_request_operation;
use crate::models::{NewRequest, Request};
use crate::query_builder::{RequestFilter, RequestQuery, RequestStatements};
use crate::state_machine::{RequestEvent, TransitionPolicy};

/// Lifecycle engine for tracked requests
///
/// Holds no state of its own beyond the injected store handle: every operation maps to
/// one store statement (plus a diagnostic lookup when a guarded transition is refused).
#[derive(Clone)]
pub struct RequestService {
    gateway: Arc<dyn StoreGateway>,
    policy: TransitionPolicy,
}

/// Result of sweeping all in-progress requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkCancelOutcome {
    pub canceled: Vec<Request>,
}

impl BulkCancelOutcome {
    pub fn count(&self) -> usize {
        self.canceled.len()
    }

    pub fn message(&self) -> String {
        match self.count() {
            0 => NOTHING_TO_CANCEL_MESSAGE.to_string(),
            n => requests_canceled_message(n),
        }
    }
}

impl RequestService {
    pub fn new(gateway: Arc<dyn StoreGateway>, policy: TransitionPolicy) -> Self {
        Self { gateway, policy }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    pub fn gateway(&self) -> &Arc<dyn StoreGateway> {
        &self.gateway
    }

    /// Insert a new request in status `new`
    pub async fn create(&self, new_request: NewRequest) -> Result<Request> {
        let rows = self
            .gateway
            .execute(&RequestStatements::insert(&new_request))
            .await?;

        let request = rows
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::new("INSERT returned no row"))?;

        log_request_operation("create", Some(request.id), request.status.as_str(), None);
        Ok(request)
    }

    pub async fn start(&self, id: i32) -> Result<Request> {
        self.apply(id, RequestEvent::Start).await
    }

    pub async fn complete(&self, id: i32, resolution: String) -> Result<Request> {
        self.apply(id, RequestEvent::Complete { resolution }).await
    }

    pub async fn cancel(&self, id: i32, reason: String) -> Result<Request> {
        self.apply(id, RequestEvent::Cancel { reason }).await
    }

    /// Apply a single-request transition according to the configured policy
    pub async fn apply(&self, id: i32, event: RequestEvent) -> Result<Request> {
        let sources = self.policy.allowed_sources(&event);
        let statement = RequestStatements::transition(id, &event, sources.as_deref());

        if let Some(request) = self.gateway.execute(&statement).await?.into_iter().next() {
            log_request_operation(
                event.event_type(),
                Some(id),
                request.status.as_str(),
                event.resolution().or(event.cancel_reason()),
            );
            return Ok(request);
        }

        if self.policy == TransitionPolicy::Unconditional {
            return Err(HelpdeskError::NotFound { id });
        }

        // The guarded UPDATE matched nothing: tell absence apart from a refused transition
        match self.find(id).await? {
            None => Err(HelpdeskError::NotFound { id }),
            Some(current) => {
                let err = self.policy.explain_rejection(id, current.status, &event);
                warn!(
                    request_id = id,
                    current_status = %current.status,
                    event = event.event_type(),
                    error = %err,
                    "Transition refused"
                );
                Err(err.into())
            }
        }
    }

    /// Cancel every request currently in progress
    pub async fn cancel_all_in_progress(&self) -> Result<BulkCancelOutcome> {
        let canceled = self
            .gateway
            .execute(&RequestStatements::cancel_all_in_progress())
            .await?;

        info!(count = canceled.len(), "Bulk cancel of in-progress requests");
        Ok(BulkCancelOutcome { canceled })
    }

    pub async fn list(&self, filter: &RequestFilter) -> Result<Vec<Request>> {
        let rows = self
            .gateway
            .execute(&RequestQuery::for_filter(filter))
            .await?;
        debug!(filter = ?filter, rows = rows.len(), "Listed requests");
        Ok(rows)
    }

    pub async fn find(&self, id: i32) -> Result<Option<Request>> {
        let rows = self
            .gateway
            .execute(&RequestStatements::find_by_id(id))
            .await?;
        Ok(rows.into_iter().next())
    }

    pub async fn health_check(&self) -> Result<()> {
        self.gateway.health_check().await?;
        Ok(())
    }
}

impl std::fmt::Debug for RequestService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
