// SPDX-License-Identifier: PMPL-1.0-or-later

//! Session-scoped cache for generated text.
//!
//! One cache is shared by every widget instance. Each key owns a slot with
//! its own lock, so two widgets missing on the same key at the same time
//! make a single generator call: the second waits on the slot and reads the
//! stored value. Failed fetches are not cached.
//!
//! Entries live for the session unless the policy bounds them by count
//! (oldest evicted first) or age.

use crate::types::ContentId;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Identity of a cached response: widget scope, content record, and a
/// digest of the source text so edited content is fetched again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    scope: String,
    id: ContentId,
    digest: String,
}

impl CacheKey {
    pub fn new(scope: impl Into<String>, id: &ContentId, source: &str) -> Self {
        let hash = blake3::hash(source.as_bytes());
        Self {
            scope: scope.into(),
            id: id.clone(),
            digest: hex::encode(&hash.as_bytes()[..8]),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn id(&self) -> &ContentId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachePolicy {
    /// Upper bound on stored entries; `None` means unbounded.
    pub max_entries: Option<usize>,
    /// Maximum age of an entry; `None` keeps it for the session.
    #[serde(with = "optional_secs")]
    pub ttl: Option<Duration>,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            max_entries: Some(128),
            ttl: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    Hit,
    Fetched,
}

#[derive(Debug, Clone)]
struct CachedText {
    text: String,
    stored_at: DateTime<Utc>,
}

type Slot = Arc<Mutex<Option<CachedText>>>;
type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct SessionCache {
    policy: CachePolicy,
    slots: Mutex<HashMap<CacheKey, Slot>>,
    clock: Clock,
}

impl std::fmt::Debug for SessionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCache")
            .field("policy", &self.policy)
            .field("entries", &self.len())
            .finish()
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}

impl SessionCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self::with_clock(policy, Arc::new(Utc::now))
    }

    /// Cache with an injected clock, for expiry tests.
    pub fn with_clock(policy: CachePolicy, clock: Clock) -> Self {
        Self {
            policy,
            slots: Mutex::new(HashMap::new()),
            clock,
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Return the cached text for `key`, or run `fetch` and store its result.
    pub fn get_or_fetch<F>(&self, key: &CacheKey, fetch: F) -> Result<(String, CacheOutcome)>
    where
        F: FnOnce() -> Result<String>,
    {
        self.fetch_into_slot(key, false, fetch)
    }

    /// Run `fetch` even if a value is cached, replacing it on success.
    pub fn refresh<F>(&self, key: &CacheKey, fetch: F) -> Result<String>
    where
        F: FnOnce() -> Result<String>,
    {
        self.fetch_into_slot(key, true, fetch).map(|(text, _)| text)
    }

    pub fn get(&self, key: &CacheKey) -> Option<String> {
        let slot = self.lock_slots().get(key).cloned()?;
        let guard = lock(&slot);
        guard
            .as_ref()
            .filter(|cached| !self.is_expired(cached))
            .map(|cached| cached.text.clone())
    }

    pub fn invalidate(&self, key: &CacheKey) {
        self.lock_slots().remove(key);
    }

    pub fn clear(&self) {
        self.lock_slots().clear();
    }

    /// Number of stored entries. Best-effort: a slot whose fetch is still
    /// running is not counted until it is filled.
    pub fn len(&self) -> usize {
        self.lock_slots()
            .values()
            .filter(|slot| match slot.try_lock() {
                Ok(guard) => guard.is_some(),
                Err(_) => false,
            })
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn fetch_into_slot<F>(&self, key: &CacheKey, force: bool, fetch: F) -> Result<(String, CacheOutcome)>
    where
        F: FnOnce() -> Result<String>,
    {
        let slot = self.lock_slots().entry(key.clone()).or_default().clone();

        let mut guard = lock(&slot);
        if !force {
            if let Some(cached) = guard.as_ref() {
                if !self.is_expired(cached) {
                    tracing::debug!(scope = key.scope(), id = %key.id(), "cache hit");
                    return Ok((cached.text.clone(), CacheOutcome::Hit));
                }
                tracing::debug!(scope = key.scope(), id = %key.id(), "cache entry expired");
                *guard = None;
            }
        }

        match fetch() {
            Ok(text) => {
                *guard = Some(CachedText {
                    text: text.clone(),
                    stored_at: (self.clock)(),
                });
                drop(guard);
                self.enforce_capacity(key);
                Ok((text, CacheOutcome::Fetched))
            }
            Err(err) => {
                let empty = guard.is_none();
                drop(guard);
                if empty {
                    self.remove_if_empty(key, &slot);
                }
                Err(err)
            }
        }
    }

    fn is_expired(&self, cached: &CachedText) -> bool {
        let Some(ttl) = self.policy.ttl else {
            return false;
        };
        let age = (self.clock)().signed_duration_since(cached.stored_at);
        match chrono::Duration::from_std(ttl) {
            Ok(ttl) => age >= ttl,
            Err(_) => false,
        }
    }

    /// Evict the oldest filled entries beyond `max_entries`. Slots that are
    /// locked by an in-flight fetch are skipped.
    fn enforce_capacity(&self, keep: &CacheKey) {
        let Some(max) = self.policy.max_entries else {
            return;
        };
        let mut slots = self.lock_slots();
        let mut filled: Vec<(CacheKey, DateTime<Utc>)> = slots
            .iter()
            .filter_map(|(key, slot)| {
                let guard = slot.try_lock().ok()?;
                guard.as_ref().map(|cached| (key.clone(), cached.stored_at))
            })
            .collect();
        if filled.len() <= max {
            return;
        }
        filled.sort_by(|a, b| a.1.cmp(&b.1));
        let excess = filled.len() - max;
        for (key, _) in filled.into_iter().filter(|(key, _)| key != keep).take(excess) {
            tracing::debug!(scope = key.scope(), id = %key.id(), "evicting cache entry");
            slots.remove(&key);
        }
    }

    fn remove_if_empty(&self, key: &CacheKey, slot: &Slot) {
        let mut slots = self.lock_slots();
        let unused = match slots.get(key) {
            Some(current) if Arc::ptr_eq(current, slot) => {
                matches!(current.try_lock(), Ok(guard) if guard.is_none())
            }
            _ => false,
        };
        if unused {
            slots.remove(key);
        }
    }

    fn lock_slots(&self) -> MutexGuard<'_, HashMap<CacheKey, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn lock(slot: &Slot) -> MutexGuard<'_, Option<CachedText>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

mod optional_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => serializer.serialize_some(&duration.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
    }
}
