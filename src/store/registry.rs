use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::workspace::Workspace;

pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_MAX_WORKSPACES: usize = 1000;

struct Slot {
    workspace: Workspace,
    touched: Instant,
}

impl Slot {
    fn seeded(now: Instant) -> Self {
        Self {
            workspace: Workspace::seeded(),
            touched: now,
        }
    }
}

/// Server-side home of every session's [`Workspace`], keyed by a random token
/// kept in the session cookie.
///
/// Workspaces untouched for `idle_timeout` are dropped on the next access,
/// and the map never holds more than `max_workspaces` entries (the least
/// recently used goes first). An evicted key is re-seeded if it comes back.
#[derive(Clone)]
pub struct WorkspaceRegistry {
    workspaces: Arc<Mutex<HashMap<String, Slot>>>,
    idle_timeout: Duration,
    max_workspaces: usize,
}

impl Default for WorkspaceRegistry {
    fn default() -> Self {
        Self::with_limits(DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_WORKSPACES)
    }
}

impl WorkspaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(idle_timeout: Duration, max_workspaces: usize) -> Self {
        Self {
            workspaces: Arc::new(Mutex::new(HashMap::new())),
            idle_timeout,
            max_workspaces: max_workspaces.max(1),
        }
    }

    /// Create a freshly seeded workspace and return its key.
    pub fn open(&self) -> String {
        let key = generate_key();
        let now = Instant::now();
        let mut map = self.workspaces.lock().unwrap_or_else(|e| e.into_inner());
        self.evict(&mut map, now, true);
        map.insert(key.clone(), Slot::seeded(now));
        key
    }

    pub fn close(&self, key: &str) {
        let mut map = self.workspaces.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(key);
    }

    /// Run `f` with exclusive access to the workspace under `key`.
    /// A missing workspace (after a restart or an eviction) is re-seeded.
    pub fn with<T>(&self, key: &str, f: impl FnOnce(&mut Workspace) -> T) -> T {
        let now = Instant::now();
        let mut map = self.workspaces.lock().unwrap_or_else(|e| e.into_inner());
        let inserting = !map.contains_key(key);
        self.evict(&mut map, now, inserting);
        let slot = map.entry(key.to_string()).or_insert_with(|| {
            log::warn!("No workspace for session, seeding a new one");
            Slot::seeded(now)
        });
        slot.touched = now;
        f(&mut slot.workspace)
    }

    pub fn len(&self) -> usize {
        self.workspaces.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop idle workspaces. With `make_room`, also trim to one below the cap.
    fn evict(&self, map: &mut HashMap<String, Slot>, now: Instant, make_room: bool) {
        let before = map.len();
        map.retain(|_, slot| now.saturating_duration_since(slot.touched) < self.idle_timeout);

        while make_room && map.len() >= self.max_workspaces {
            let Some(oldest) = map
                .iter()
                .min_by_key(|(_, slot)| slot.touched)
                .map(|(key, _)| key.clone())
            else {
                break;
            };
            map.remove(&oldest);
        }

        let dropped = before - map.len();
        if dropped > 0 {
            log::info!("Evicted {dropped} workspace(s), {} left", map.len());
        }
    }
}

/// Random 16-byte hex token.
fn generate_key() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    hex::encode(bytes)
}
