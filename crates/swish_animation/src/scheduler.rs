//! Tween scheduler
//!
//! Owns every tween instance and drives them from a single tick. Instances
//! live in a slotmap arena and are referenced by [`TweenId`] handles; the
//! scheduler keeps two ordered lists of handles on top of it:
//!
//! - `active` - instances that receive ticks
//! - `pending_add` - instances created since the last tick boundary
//!
//! New instances always land in `pending_add` and are merged into `active`
//! at the end of a tick, so a tick never visits an instance created during
//! that same tick (including from inside a callback).
//!
//! Callbacks receive `&mut TweenScheduler`. A completion callback runs after
//! its instance has been removed from the scheduler, so it can freely start a
//! follow-up tween on the same widget.

use std::fmt;

use slotmap::{new_key_type, SlotMap};
use swish_core::WeakTarget;

use crate::builder::TweenBuilder;
use crate::config::SchedulerConfig;
use crate::error::{Result, TweenError};
use crate::instance::{Step, TweenInstance, TweenState};
use crate::preset::TweenPreset;

new_key_type! {
    /// Handle to a tween owned by a [`TweenScheduler`]
    pub struct TweenId;
}

/// Batched driver for tween instances
///
/// Not valid before [`startup`](Self::startup) or after
/// [`shutdown`](Self::shutdown): creation fails with
/// [`TweenError::NotRunning`] and ticks are ignored.
pub struct TweenScheduler {
    config: SchedulerConfig,
    instances: SlotMap<TweenId, TweenInstance>,
    /// Ticked instances, in promotion order
    active: Vec<TweenId>,
    /// Created since the last tick boundary, in creation order
    pending_add: Vec<TweenId>,
    /// Snapshot of `active` iterated by `tick`, reused across frames
    scratch: Vec<TweenId>,
    running: bool,
    ticking: bool,
}

impl TweenScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            instances: SlotMap::with_key(),
            active: Vec::new(),
            pending_add: Vec::new(),
            scratch: Vec::new(),
            running: false,
            ticking: false,
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Clear all state and start accepting tweens
    pub fn startup(&mut self) {
        self.reset();

        let capacity = self.config.initial_capacity;
        self.instances.reserve(capacity);
        self.active.reserve(capacity);
        self.pending_add.reserve(capacity);
        self.scratch.reserve(capacity);

        self.running = true;
        tracing::debug!("TweenScheduler started (capacity {})", capacity);
    }

    /// Drop every tween without firing callbacks and stop accepting new ones
    pub fn shutdown(&mut self) {
        let dropped = self.instances.len();
        self.reset();
        self.running = false;
        tracing::debug!("TweenScheduler shut down, dropped {} tweens", dropped);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn reset(&mut self) {
        self.instances.clear();
        self.active.clear();
        self.pending_add.clear();
        self.scratch.clear();
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Create a tween on `target` and return its builder
    ///
    /// Unless `additive` is set, every other tween on the same widget is
    /// cancelled first (active and pending alike, without callbacks), so at
    /// most one fresh tween per widget reaches the next tick. The new tween
    /// starts ticking on the tick after this call.
    ///
    /// A target that is already dead is accepted; the tween completes on its
    /// first tick.
    pub fn create(
        &mut self,
        target: impl Into<WeakTarget>,
        duration: f32,
        delay: f32,
        additive: bool,
    ) -> Result<TweenBuilder<'_>> {
        if !self.running {
            return Err(TweenError::NotRunning);
        }

        let target = target.into();

        if !additive {
            let replaced = self.clear(&target) + self.discard_pending(&target);
            if replaced > 0 {
                tracing::debug!("Replaced {} tweens on {:?}", replaced, target);
            }
        }

        let id = self
            .instances
            .insert(TweenInstance::new(target, duration, delay));
        self.pending_add.push(id);

        match self.instances.get_mut(id) {
            Some(instance) => Ok(TweenBuilder::new(id, instance)),
            None => Err(TweenError::StaleHandle(id)),
        }
    }

    /// Create a tween from a declarative preset
    pub fn create_from_preset(
        &mut self,
        target: impl Into<WeakTarget>,
        preset: &TweenPreset,
    ) -> Result<TweenId> {
        let builder = self.create(target, preset.duration, preset.delay, preset.additive)?;
        Ok(preset.apply(builder).id())
    }

    /// Re-open the builder of a tween that has not been promoted yet
    pub fn configure(&mut self, id: TweenId) -> Result<TweenBuilder<'_>> {
        if !self.running {
            return Err(TweenError::NotRunning);
        }
        if self.active.contains(&id) {
            return Err(TweenError::AlreadyActive(id));
        }

        match self.instances.get_mut(id) {
            Some(instance) => Ok(TweenBuilder::new(id, instance)),
            None => Err(TweenError::StaleHandle(id)),
        }
    }

    // =========================================================================
    // Cancellation
    // =========================================================================

    /// Cancel every active tween on `target`
    ///
    /// Pending tweens are left alone. Completion callbacks do not fire.
    /// Returns the number of tweens removed; a dead target matches nothing.
    pub fn clear(&mut self, target: &WeakTarget) -> usize {
        if !target.is_valid() {
            return 0;
        }

        let instances = &mut self.instances;
        let before = self.active.len();
        self.active.retain(|&id| {
            let matches = instances
                .get(id)
                .is_some_and(|instance| instance.target() == target);
            if matches {
                instances.remove(id);
            }
            !matches
        });
        before - self.active.len()
    }

    /// Cancel every tween, active and pending, without callbacks
    pub fn clear_all(&mut self) -> usize {
        let count = self.instances.len();
        self.reset();
        count
    }

    fn discard_pending(&mut self, target: &WeakTarget) -> usize {
        let instances = &mut self.instances;
        let before = self.pending_add.len();
        self.pending_add.retain(|&id| {
            let matches = instances
                .get(id)
                .is_some_and(|instance| instance.target() == target);
            if matches {
                instances.remove(id);
            }
            !matches
        });
        before - self.pending_add.len()
    }

    // =========================================================================
    // Tick
    // =========================================================================

    /// Advance every active tween by `dt` seconds
    ///
    /// Active tweens are visited once each, newest first. Finished tweens are
    /// removed before their completion callback runs. Tweens created during
    /// the tick are promoted at the end of it, in creation order.
    pub fn tick(&mut self, dt: f32) {
        if !self.running {
            tracing::debug!("TweenScheduler::tick called while not running");
            return;
        }
        if self.ticking {
            tracing::debug!("TweenScheduler::tick called from inside a callback, ignoring");
            return;
        }

        let dt = self.config.scaled_delta(dt);
        tracing::trace!(
            "Tween tick dt={} active={} pending={}",
            dt,
            self.active.len(),
            self.pending_add.len()
        );

        self.ticking = true;

        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();
        scratch.extend_from_slice(&self.active);
        for &id in scratch.iter().rev() {
            self.step(id, dt);
        }
        scratch.clear();
        self.scratch = scratch;

        self.active.append(&mut self.pending_add);
        self.ticking = false;
    }

    fn step(&mut self, id: TweenId, dt: f32) {
        // Cancelled earlier in this tick
        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };

        match instance.prepare(dt) {
            Step::Finished => self.retire(id),
            Step::Waiting => {}
            Step::Ready { fire_start } => {
                if fire_start {
                    self.fire_start(id);
                }

                let Some(instance) = self.instances.get_mut(id) else {
                    return;
                };
                let alpha = instance.advance(dt);
                self.fire_update(id, alpha);

                if self
                    .instances
                    .get(id)
                    .is_some_and(|instance| instance.is_complete())
                {
                    self.retire(id);
                }
            }
        }
    }

    fn fire_start(&mut self, id: TweenId) {
        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };
        if let Some(callback) = instance.on_start.take() {
            let target = instance.target().clone();
            callback(self, &target);
        }
    }

    fn fire_update(&mut self, id: TweenId, alpha: f32) {
        let Some(instance) = self.instances.get_mut(id) else {
            return;
        };
        let Some(mut callback) = instance.on_update.take() else {
            return;
        };

        let target = instance.target().clone();
        callback(self, &target, alpha);

        // Put it back unless the callback cancelled its own tween
        if let Some(instance) = self.instances.get_mut(id) {
            instance.on_update = Some(callback);
        }
    }

    /// Remove a finished tween, then fire its completion callback
    fn retire(&mut self, id: TweenId) {
        self.active.retain(|&active| active != id);
        let Some(mut instance) = self.instances.remove(id) else {
            return;
        };

        if let Some(callback) = instance.on_complete.take() {
            callback(self, instance.target());
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether any active tween targets `target`
    ///
    /// Tweens created since the last tick are not counted.
    pub fn is_tweening(&self, target: &WeakTarget) -> bool {
        self.active.iter().any(|&id| {
            self.instances
                .get(id)
                .is_some_and(|instance| instance.target() == target)
        })
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending_add.len()
    }

    /// Lifecycle phase of a live tween
    pub fn state(&self, id: TweenId) -> Option<TweenState> {
        self.instances.get(id).map(TweenInstance::state)
    }

    /// Linear progress of a live tween in `[0, 1]`
    pub fn progress(&self, id: TweenId) -> Option<f32> {
        self.instances.get(id).map(TweenInstance::progress)
    }

    /// Read access to a live tween
    pub fn instance(&self, id: TweenId) -> Option<&TweenInstance> {
        self.instances.get(id)
    }
}

impl Default for TweenScheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl fmt::Debug for TweenScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenScheduler")
            .field("running", &self.running)
            .field("active", &self.active.len())
            .field("pending_add", &self.pending_add.len())
            .field("config", &self.config)
            .finish()
    }
}
