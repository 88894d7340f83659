use crate::snapshot::RegistrySnapshot;
use crate::target::SharedTarget;
use crate::tween::{Tween, TweenTick};
use crate::Result;
use std::fmt;

/// Identity of a registered tween, handed out by [`TweenRegistry::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(u64);

impl fmt::Display for TweenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tween_{}", self.0)
    }
}

/// An ordered collection of active tweens, advanced once per frame.
///
/// The registry is a plain value owned by the host (per scene, per
/// session); there is no process-wide registry. Implementations differ
/// only in whether their contents can be snapshotted.
pub trait TweenRegistry {
    /// Begin the tween and append it to the collection.
    ///
    /// Consuming the tween by value makes double-registration
    /// unrepresentable. A tween restored from a snapshot is appended in
    /// its in-flight state without re-snapshotting its start values.
    fn add(&mut self, tween: Tween) -> TweenId;

    /// Silently remove a tween. No callbacks fire. No-op if absent.
    fn remove(&mut self, id: TweenId) -> bool;

    /// Cancel a tween: remove it, fire its stop callback, and stop its
    /// entire planned continuation chain. Returns false if absent.
    fn stop(&mut self, id: TweenId) -> bool;

    /// Pause one tween without touching its registry membership
    fn pause(&mut self, id: TweenId) -> bool;

    /// Resume one paused tween
    fn resume(&mut self, id: TweenId) -> bool;

    /// Advance every active tween by one tick.
    ///
    /// Iterates from the end toward the start so removals during the
    /// sweep never skip an unvisited entry. Chains released by tweens
    /// finishing this tick are begun, not advanced, this tick.
    fn tick(&mut self);

    /// Hard reset: drop every tween without firing any callback
    fn clear(&mut self);

    /// Stop every tween, firing each stop callback
    fn stop_all(&mut self);

    /// Pause every tween
    fn pause_all(&mut self);

    /// Resume every paused tween
    fn resume_all(&mut self);

    /// Number of tweens currently registered
    fn active_count(&self) -> usize;

    /// Whether the id is currently registered
    fn contains(&self, id: TweenId) -> bool;

    fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

pub(crate) struct Entry {
    pub(crate) id: TweenId,
    pub(crate) tween: Tween,
}

/// In-memory registry without persistence
#[derive(Default)]
pub struct MemoryRegistry {
    pub(crate) entries: Vec<Entry>,
    next_id: u64,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    fn position(&self, id: TweenId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

impl TweenRegistry for MemoryRegistry {
    fn add(&mut self, mut tween: Tween) -> TweenId {
        if tween.state() == crate::tween::TweenState::NotStarted {
            tween.begin();
        }
        let id = TweenId(self.next_id);
        self.next_id += 1;
        log::debug!("{} registered ({} active)", id, self.entries.len() + 1);
        self.entries.push(Entry { id, tween });
        id
    }

    fn remove(&mut self, id: TweenId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                log::debug!("{} removed", id);
                true
            }
            None => false,
        }
    }

    fn stop(&mut self, id: TweenId) -> bool {
        match self.position(id) {
            Some(index) => {
                let mut entry = self.entries.remove(index);
                entry.tween.halt();
                log::debug!("{} stopped", id);
                true
            }
            None => false,
        }
    }

    fn pause(&mut self, id: TweenId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries[index].tween.pause();
                true
            }
            None => false,
        }
    }

    fn resume(&mut self, id: TweenId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries[index].tween.resume();
                true
            }
            None => false,
        }
    }

    fn tick(&mut self) {
        // End-to-start so removing the current entry never shifts an
        // unvisited one into a skipped slot.
        let mut index = self.entries.len();
        while index > 0 {
            index -= 1;
            if self.entries[index].tween.advance() == TweenTick::Remove {
                let mut entry = self.entries.remove(index);
                log::debug!("{} completed", entry.id);
                // Chained tweens begin now and are first advanced next
                // tick; they snapshot the state the final write left.
                for chained in entry.tween.take_chained() {
                    self.add(chained);
                }
            }
        }
    }

    fn clear(&mut self) {
        log::debug!("registry cleared ({} dropped)", self.entries.len());
        self.entries.clear();
    }

    fn stop_all(&mut self) {
        let mut drained: Vec<Entry> = self.entries.drain(..).collect();
        for entry in &mut drained {
            entry.tween.halt();
        }
    }

    fn pause_all(&mut self) {
        for entry in &mut self.entries {
            entry.tween.pause();
        }
    }

    fn resume_all(&mut self) {
        for entry in &mut self.entries {
            entry.tween.resume();
        }
    }

    fn active_count(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, id: TweenId) -> bool {
        self.position(id).is_some()
    }
}

/// Registry whose contents can be serialized as part of a larger
/// application snapshot and restored against live targets later.
#[derive(Default)]
pub struct SnapshotRegistry {
    inner: MemoryRegistry,
}

impl SnapshotRegistry {
    pub fn new() -> Self {
        Self {
            inner: MemoryRegistry::new(),
        }
    }

    /// Capture every tagged tween. Untagged tweens cannot be rebound to
    /// a target on restore and are omitted.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            tweens: self
                .inner
                .entries
                .iter()
                .filter_map(|entry| entry.tween.to_snapshot())
                .collect(),
        }
    }

    /// Rebuild tweens from a snapshot, rebinding each tag to a live
    /// target through the resolver. Restored tweens resume mid-flight;
    /// their callbacks are gone.
    pub fn restore(
        &mut self,
        snapshot: RegistrySnapshot,
        resolver: impl Fn(&str) -> Option<SharedTarget>,
    ) -> Result<Vec<TweenId>> {
        let mut ids = Vec::with_capacity(snapshot.tweens.len());
        for tween in snapshot.tweens {
            let restored = Tween::from_snapshot(tween, &resolver, true)?;
            ids.push(self.inner.add(restored));
        }
        Ok(ids)
    }
}

impl TweenRegistry for SnapshotRegistry {
    fn add(&mut self, tween: Tween) -> TweenId {
        self.inner.add(tween)
    }

    fn remove(&mut self, id: TweenId) -> bool {
        self.inner.remove(id)
    }

    fn stop(&mut self, id: TweenId) -> bool {
        self.inner.stop(id)
    }

    fn pause(&mut self, id: TweenId) -> bool {
        self.inner.pause(id)
    }

    fn resume(&mut self, id: TweenId) -> bool {
        self.inner.resume(id)
    }

    fn tick(&mut self) {
        self.inner.tick()
    }

    fn clear(&mut self) {
        self.inner.clear()
    }

    fn stop_all(&mut self) {
        self.inner.stop_all()
    }

    fn pause_all(&mut self) {
        self.inner.pause_all()
    }

    fn resume_all(&mut self) {
        self.inner.resume_all()
    }

    fn active_count(&self) -> usize {
        self.inner.active_count()
    }

    fn contains(&self, id: TweenId) -> bool {
        self.inner.contains(id)
    }
}
