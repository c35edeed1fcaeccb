// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Live operator stream.
//!
//! Choice prompts and alerts raised while the workflow runs are pushed to
//! every connected WebSocket client. Operators answer over HTTP; nothing
//! received on the socket is acted upon.

use axum::{
    extract::{
        State as AxumState, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures::{SinkExt, stream::StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use supply_plan_api::{
    SelectionOutcome, SelectionPresenter, TimeslotPrompt, WarehousePrompt, WorkflowReport,
};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Maximum number of events to buffer in the broadcast channel.
/// If clients cannot keep up, older events will be dropped.
const EVENT_BUFFER_SIZE: usize = 100;

/// Events pushed to the operator UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    /// The operator must pick a warehouse for a row.
    WarehouseChoiceRequested {
        /// The options and the token to answer with.
        prompt: WarehousePrompt,
    },
    /// The operator must pick a timeslot for a row.
    TimeslotChoiceRequested {
        /// The slots and the token to answer with.
        prompt: TimeslotPrompt,
    },
    /// A continuation failed.
    Alert {
        /// The message shown to the operator.
        message: String,
    },
    /// A batch run finished.
    WorkflowCompleted {
        /// Per-row results of the run.
        report: WorkflowReport,
    },
    /// A timeslot was recorded for a row.
    TimeslotSelected {
        /// The recorded choice.
        outcome: SelectionOutcome,
    },
    /// Connection confirmation (sent on initial connect).
    Connected {
        /// Server timestamp (ISO 8601).
        timestamp: String,
    },
}

/// Broadcaster for live events.
#[derive(Clone)]
pub struct LiveEventBroadcaster {
    tx: broadcast::Sender<LiveEvent>,
}

impl LiveEventBroadcaster {
    /// Creates a new event broadcaster.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Broadcasts an event to all connected clients.
    ///
    /// If no clients are connected, the event is silently dropped.
    pub fn broadcast(&self, event: &LiveEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(?event, receivers = count, "Broadcast live event");
            }
            Err(_) => {
                debug!(?event, "No receivers for live event");
            }
        }
    }

    /// Subscribes to events sent from now on.
    pub(crate) fn subscribe(&self) -> broadcast::Receiver<LiveEvent> {
        self.tx.subscribe()
    }
}

impl Default for LiveEventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Presents operator choices by broadcasting them as live events.
pub struct LivePresenter {
    broadcaster: Arc<LiveEventBroadcaster>,
}

impl LivePresenter {
    /// Creates a presenter that publishes through `broadcaster`.
    #[must_use]
    pub const fn new(broadcaster: Arc<LiveEventBroadcaster>) -> Self {
        Self { broadcaster }
    }
}

impl SelectionPresenter for LivePresenter {
    fn present_warehouses(&self, prompt: &WarehousePrompt) {
        info!(
            token = %prompt.token,
            row = %prompt.row,
            options = prompt.options.len(),
            "Requesting warehouse choice"
        );
        self.broadcaster.broadcast(&LiveEvent::WarehouseChoiceRequested {
            prompt: prompt.clone(),
        });
    }

    fn present_timeslots(&self, prompt: &TimeslotPrompt) {
        info!(
            token = %prompt.token,
            row = %prompt.row,
            slots = prompt.slots.len(),
            "Requesting timeslot choice"
        );
        self.broadcaster.broadcast(&LiveEvent::TimeslotChoiceRequested {
            prompt: prompt.clone(),
        });
    }

    fn alert(&self, message: &str) {
        warn!(%message, "Alerting operator");
        self.broadcaster.broadcast(&LiveEvent::Alert {
            message: message.to_string(),
        });
    }
}

/// Handles WebSocket upgrade requests for live event streaming.
///
/// # Arguments
///
/// * `ws` - WebSocket upgrade request
/// * `broadcaster` - The live event broadcaster from application state
pub async fn live_events_handler(
    ws: WebSocketUpgrade,
    AxumState(broadcaster): AxumState<Arc<LiveEventBroadcaster>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, broadcaster))
}

/// Sends a connection confirmation, then streams events until the client
/// disconnects.
async fn handle_socket(socket: WebSocket, broadcaster: Arc<LiveEventBroadcaster>) {
    info!("Operator connected to live stream");

    let (mut sender, mut receiver) = socket.split();
    let mut rx: broadcast::Receiver<LiveEvent> = broadcaster.subscribe();

    let connected_event = LiveEvent::Connected {
        timestamp: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| String::from("unknown")),
    };

    if let Ok(json) = serde_json::to_string(&connected_event)
        && sender.send(Message::Text(json.into())).await.is_err()
    {
        warn!("Failed to send connection confirmation");
        return;
    }

    let mut send_task = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(json) => {
                        if sender.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!(?e, "Failed to serialize live event");
                    }
                },
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Live stream client lagged, events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(_) | Message::Binary(_)) => {
                    warn!("Received unexpected message from client, ignoring");
                }
                Ok(Message::Close(_)) => {
                    debug!("Client sent close frame");
                    break;
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {}
                Err(e) => {
                    error!(?e, "WebSocket receive error");
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => {
            debug!("Send task completed");
            recv_task.abort();
        }
        _ = &mut recv_task => {
            debug!("Receive task completed");
            send_task.abort();
        }
    }

    info!("Operator disconnected from live stream");
}
