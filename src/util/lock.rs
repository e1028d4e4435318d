use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Keyed async locks serializing the writes of a single user.
///
/// Commands of different users never wait on each other. Entries for locks
/// nobody holds are pruned whenever a new lock is taken.
#[derive(Clone, Default)]
pub struct UserLocks {
    locks: Arc<Mutex<HashMap<i64, Arc<AsyncMutex<()>>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to the user's state, released when the guard drops
    pub async fn lock(&self, discord_id: i64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.retain(|id, lock| *id == discord_id || Arc::strong_count(lock) > 1);

            locks.entry(discord_id).or_default().clone()
        };

        lock.lock_owned().await
    }
}
