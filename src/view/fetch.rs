use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{ApiError, Endpoint};

/// Lifecycle of a view's single read request. `Failed` is terminal for the mount.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed,
}

impl<T> FetchState<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Turn a raw outcome into a view state. Transport, status and shape errors
/// all end up as `Failed`.
pub fn decode<T: DeserializeOwned>(
    endpoint: Endpoint,
    outcome: Result<Value, ApiError>,
) -> FetchState<T> {
    let value = match outcome {
        Ok(value) => value,
        Err(_) => return FetchState::Failed,
    };
    match serde_json::from_value(value) {
        Ok(data) => FetchState::Loaded(data),
        Err(source) => {
            let err = ApiError::Decode {
                path: endpoint.path(),
                source,
            };
            log::warn!("{err}");
            FetchState::Failed
        }
    }
}
