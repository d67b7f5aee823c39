//! Local analytics event log.
//!
//! Events are held in memory for the lifetime of the page and mirrored to a
//! localStorage snapshot after every append, so a developer can inspect what
//! happened across reloads. There is no remote delivery; this is the seam
//! where a real provider (GA, Mixpanel, the backend) would be called.
//!
//! Storage and clock are injected so the log can be driven deterministically
//! from native unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;

const ANALYTICS_STORAGE_KEY: &str = "grip_analytics";

/// One tracked occurrence. Serializes to the flat record shape the page has
/// always written: `{"event": ..., "timestamp": ..., "url": ..., <attrs>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "event")]
    pub name: String,
    pub timestamp: String,
    pub url: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    Unavailable,
    WriteFailed,
}

/// Outcome of a snapshot write. Persistence is best-effort: callers may log
/// a non-`Ok` result but never fail because of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistResult {
    Ok,
    StorageUnavailable,
    SerializationError,
}

/// Whole-snapshot string storage. `read` of an absent key is `Ok(None)`.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, absent or disabled storage reported as
/// `StorageError::Unavailable` (private browsing, storage turned off).
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn handle(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.handle()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // set_item fails when the quota is exceeded.
        self.handle()?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }
}

/// In-memory storage sharing one map between clones, standing in for
/// localStorage in tests and on non-wasm builds.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(target_arch = "wasm32")]
fn current_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_else(|| "about:blank".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn current_url() -> String {
    "about:blank".to_string()
}

/// Append-only event log with a best-effort localStorage mirror.
pub struct Analytics {
    events: Vec<Event>,
    storage: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
}

impl Analytics {
    pub fn new(storage: Box<dyn StorageBackend>, clock: Box<dyn Clock>) -> Self {
        Self {
            events: Vec::new(),
            storage,
            clock,
        }
    }

    /// Track an event. `attributes` should be a `json!({..})` object; the
    /// envelope keys `event`/`timestamp`/`url` are reserved and dropped if a
    /// caller supplies them. The event is appended and returned whether or
    /// not the snapshot write succeeds.
    pub fn record(&mut self, name: &str, attributes: Value) -> Event {
        let mut attributes = match attributes {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                warn!("analytics: ignoring non-object attributes for '{}': {}", name, other);
                Map::new()
            }
        };
        for reserved in ["event", "timestamp", "url"] {
            if attributes.remove(reserved).is_some() {
                warn!("analytics: dropped reserved attribute key '{}' on '{}'", reserved, name);
            }
        }

        let event = Event {
            name: name.to_string(),
            timestamp: self
                .clock
                .now()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            url: current_url(),
            attributes,
        };
        self.events.push(event.clone());

        match self.persist() {
            PersistResult::Ok => {}
            PersistResult::StorageUnavailable => {
                warn!("analytics: could not save events to local storage");
            }
            PersistResult::SerializationError => {
                warn!("analytics: could not serialize the event log");
            }
        }

        info!("analytics event: {}", event.name);
        event
    }

    /// Write the whole in-memory sequence to storage, replacing any prior
    /// snapshot.
    pub fn persist(&self) -> PersistResult {
        let raw = match serde_json::to_string(&self.events) {
            Ok(raw) => raw,
            Err(_) => return PersistResult::SerializationError,
        };
        match self.storage.write(ANALYTICS_STORAGE_KEY, &raw) {
            Ok(()) => PersistResult::Ok,
            Err(_) => PersistResult::StorageUnavailable,
        }
    }

    /// Hydrate from a prior snapshot. A missing, unreadable or malformed
    /// snapshot leaves the log as it was (expected: empty).
    pub fn restore(&mut self) {
        match self.storage.read(ANALYTICS_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Event>>(&raw) {
                Ok(events) => self.events = events,
                Err(err) => warn!("analytics: ignoring malformed event snapshot: {}", err),
            },
            Ok(None) => {}
            Err(_) => warn!("analytics: could not load events from local storage"),
        }
    }

    pub fn all_events(&self) -> &[Event] {
        &self.events
    }

    pub fn count_by_name(&self, name: &str) -> usize {
        self.events.iter().filter(|e| e.name == name).count()
    }
}

thread_local! {
    static SESSION: RefCell<Option<Analytics>> = RefCell::new(None);
}

/// Run `f` against the page-wide analytics log, constructing and hydrating it
/// on first use.
pub fn with_session<R>(f: impl FnOnce(&mut Analytics) -> R) -> R {
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        let analytics = slot.get_or_insert_with(|| {
            let mut analytics = Analytics::new(platform_storage(), Box::new(SystemClock));
            analytics.restore();
            analytics
        });
        f(analytics)
    })
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn platform_storage() -> Box<dyn StorageBackend> {
    Box::new(LocalStorage)
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn platform_storage() -> Box<dyn StorageBackend> {
    Box::new(MemoryStorage::new())
}

/// Console debug accessor (`wasmBindings.grip_events()` under Trunk). Not a
/// stable API.
#[wasm_bindgen]
pub fn grip_events() -> JsValue {
    with_session(|analytics| {
        serde_wasm_bindgen::to_value(analytics.all_events()).unwrap_or(JsValue::NULL)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    struct FakeClock(DateTime<Utc>);

    impl Clock for FakeClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    struct FailingStorage;

    impl StorageBackend for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed)
        }
    }

    fn fake_clock() -> Box<FakeClock> {
        Box::new(FakeClock(
            Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        ))
    }

    fn analytics_with(storage: Box<dyn StorageBackend>) -> Analytics {
        Analytics::new(storage, fake_clock())
    }

    #[test]
    fn events_append_in_call_order() {
        let mut analytics = analytics_with(Box::new(MemoryStorage::new()));
        analytics.record("page_view", json!(null));
        analytics.record("cta_clicked", json!({"location": "hero"}));
        analytics.record("store_button_clicked", json!({"store": "app_store"}));

        let names: Vec<_> = analytics.all_events().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["page_view", "cta_clicked", "store_button_clicked"]);
    }

    #[test]
    fn count_by_name_counts_only_matching_events() {
        let mut analytics = analytics_with(Box::new(MemoryStorage::new()));
        for _ in 0..3 {
            analytics.record("cta_clicked", json!(null));
        }
        analytics.record("page_view", json!(null));

        assert_eq!(analytics.count_by_name("cta_clicked"), 3);
        assert_eq!(analytics.count_by_name("page_view"), 1);
        assert_eq!(analytics.count_by_name("email_submitted"), 0);
    }

    #[test]
    fn snapshot_round_trips_through_storage() {
        let storage = MemoryStorage::new();
        let mut first = analytics_with(Box::new(storage.clone()));
        first.record("x", json!({"step": 1}));

        let mut second = analytics_with(Box::new(storage));
        second.restore();
        assert_eq!(second.all_events().len(), 1);
        assert_eq!(second.all_events()[0].name, "x");
        assert_eq!(second.all_events()[0].attributes["step"], json!(1));
    }

    #[test]
    fn malformed_snapshot_restores_to_empty() {
        let storage = MemoryStorage::new();
        storage.write(ANALYTICS_STORAGE_KEY, "{not json").unwrap();

        let mut analytics = analytics_with(Box::new(storage));
        analytics.restore();
        assert!(analytics.all_events().is_empty());
    }

    #[test]
    fn wrong_shape_snapshot_restores_to_empty() {
        let storage = MemoryStorage::new();
        storage.write(ANALYTICS_STORAGE_KEY, r#"{"event": "not-an-array"}"#).unwrap();

        let mut analytics = analytics_with(Box::new(storage));
        analytics.restore();
        assert!(analytics.all_events().is_empty());
    }

    #[test]
    fn record_survives_a_failing_backend() {
        let mut analytics = analytics_with(Box::new(FailingStorage));
        let event = analytics.record("cta_clicked", json!(null));
        assert_eq!(event.name, "cta_clicked");
        assert_eq!(analytics.all_events().len(), 1);
        assert_eq!(analytics.persist(), PersistResult::StorageUnavailable);
    }

    #[test]
    fn reserved_attribute_keys_cannot_clobber_the_envelope() {
        let mut analytics = analytics_with(Box::new(MemoryStorage::new()));
        let event = analytics.record(
            "page_view",
            json!({"timestamp": "bogus", "url": "bogus", "event": "bogus", "plan": "pro"}),
        );

        assert_eq!(event.timestamp, "2026-01-02T03:04:05.000Z");
        assert_eq!(event.url, "about:blank");
        assert_eq!(event.name, "page_view");
        assert_eq!(event.attributes.len(), 1);
        assert_eq!(event.attributes["plan"], json!("pro"));
    }

    #[test]
    fn events_serialize_to_the_flat_record_shape() {
        let mut analytics = analytics_with(Box::new(MemoryStorage::new()));
        let event = analytics.record("scroll_depth", json!({"depth": 25}));

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], json!("scroll_depth"));
        assert_eq!(value["depth"], json!(25));
        assert_eq!(value["timestamp"], json!("2026-01-02T03:04:05.000Z"));
    }
}
