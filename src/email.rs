//! Email capture for the hero/footer signup forms.
//!
//! There is no backend yet: `subscribe` emulates the network round trip with
//! a short delay and keeps the collected addresses in a localStorage snapshot
//! so they can be pulled out during demos.

use chrono::{SecondsFormat, Utc};
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wasm_bindgen::prelude::*;

use crate::analytics::{self, PersistResult, StorageBackend};
use crate::config;

const EMAILS_STORAGE_KEY: &str = "grip_emails";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub email: String,
    pub source: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub success: bool,
    pub email: String,
}

/// Sign an address up for the launch list. Tracks `email_submitted`, waits
/// out a simulated network delay, then appends the record to the local
/// snapshot. Always resolves successfully; durability is best-effort.
pub async fn subscribe(email: &str, source: &str) -> SubscribeResponse {
    info!("email subscription: {} (source: {})", email, source);
    analytics::with_session(|analytics| {
        analytics.record("email_submitted", json!({"email": email, "source": source}));
    });

    // The production path POSTs to the backend, which forwards to the
    // mail-list provider; keys never belong in frontend code.
    info!("stub subscribe, would call {}/api/subscribe", config::get_backend_url());
    TimeoutFuture::new(800).await;

    let record = SubscriptionRecord {
        email: email.to_string(),
        source: source.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    if store_subscription(&*analytics::platform_storage(), &record) != PersistResult::Ok {
        warn!("email: could not store the subscription locally");
    }

    SubscribeResponse {
        success: true,
        email: email.to_string(),
    }
}

/// Append one record to the `grip_emails` snapshot (whole-array
/// read-modify-write; a malformed existing snapshot is treated as empty).
pub fn store_subscription(
    storage: &dyn StorageBackend,
    record: &SubscriptionRecord,
) -> PersistResult {
    let mut collected = collected_subscriptions(storage);
    collected.push(record.clone());
    let raw = match serde_json::to_string(&collected) {
        Ok(raw) => raw,
        Err(_) => return PersistResult::SerializationError,
    };
    match storage.write(EMAILS_STORAGE_KEY, &raw) {
        Ok(()) => PersistResult::Ok,
        Err(_) => PersistResult::StorageUnavailable,
    }
}

/// Everything collected so far, oldest first. Missing or unreadable
/// snapshots read as empty.
pub fn collected_subscriptions(storage: &dyn StorageBackend) -> Vec<SubscriptionRecord> {
    match storage.read(EMAILS_STORAGE_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("email: ignoring malformed subscription snapshot: {}", err);
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(_) => {
            warn!("email: could not read subscriptions from local storage");
            Vec::new()
        }
    }
}

/// Console debug accessor (`wasmBindings.grip_collected_emails()` under
/// Trunk). Not a stable API.
#[wasm_bindgen]
pub fn grip_collected_emails() -> JsValue {
    let collected = collected_subscriptions(&*analytics::platform_storage());
    serde_wasm_bindgen::to_value(&collected).unwrap_or(JsValue::NULL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::MemoryStorage;

    fn record(email: &str, source: &str) -> SubscriptionRecord {
        SubscriptionRecord {
            email: email.to_string(),
            source: source.to_string(),
            timestamp: "2026-01-02T03:04:05.000Z".to_string(),
        }
    }

    #[test]
    fn subscriptions_accumulate_in_order() {
        let storage = MemoryStorage::new();
        assert_eq!(store_subscription(&storage, &record("a@example.com", "signup")), PersistResult::Ok);
        assert_eq!(store_subscription(&storage, &record("b@example.com", "footer")), PersistResult::Ok);

        let collected = collected_subscriptions(&storage);
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].email, "a@example.com");
        assert_eq!(collected[0].source, "signup");
        assert_eq!(collected[1].source, "footer");
    }

    #[test]
    fn malformed_snapshot_reads_as_empty_and_is_replaced() {
        let storage = MemoryStorage::new();
        storage.write(EMAILS_STORAGE_KEY, "][").unwrap();
        assert!(collected_subscriptions(&storage).is_empty());

        store_subscription(&storage, &record("a@example.com", "hero"));
        assert_eq!(collected_subscriptions(&storage).len(), 1);
    }

    #[test]
    fn missing_snapshot_reads_as_empty() {
        assert!(collected_subscriptions(&MemoryStorage::new()).is_empty());
    }
}
