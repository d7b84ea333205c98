use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::endpoint::ApiRequest;
use crate::api::error::ApiError;
use crate::event::AppEvent;

/// Outcome of one dispatched request, tagged with the view mount that issued it.
#[derive(Debug)]
pub struct ApiEvent {
    pub mount: u64,
    pub request: ApiRequest,
    pub outcome: Result<Value, ApiError>,
}

/// Fire-and-forget request submission. There is no cancellation handle:
/// once dispatched, a request runs to completion and reports back exactly once.
pub trait Dispatch {
    fn dispatch(&self, mount: u64, request: ApiRequest);
}

/// Runs every request on its own thread and posts the result into the
/// application event channel.
pub struct ThreadDispatcher {
    client: Arc<ApiClient>,
    tx: Sender<AppEvent>,
}

impl ThreadDispatcher {
    pub fn new(client: ApiClient, tx: Sender<AppEvent>) -> Self {
        Self {
            client: Arc::new(client),
            tx,
        }
    }
}

impl Dispatch for ThreadDispatcher {
    fn dispatch(&self, mount: u64, request: ApiRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        if request.is_mutation() {
            log::info!("post {} (mount {mount})", request.endpoint().path());
        } else {
            log::debug!("get {} (mount {mount})", request.endpoint().path());
        }

        thread::spawn(move || {
            let outcome = client.execute(&request);
            if let Err(ref err) = outcome {
                log::warn!("{} failed: {err}", request.endpoint().path());
            }
            // Receiver gone means the app is shutting down.
            let _ = tx.send(AppEvent::Api(ApiEvent {
                mount,
                request,
                outcome,
            }));
        });
    }
}
