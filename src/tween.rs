use crate::easing::EasingFunction;
use crate::interpolation::Interpolation;
use crate::snapshot::TweenSnapshot;
use crate::target::{Accessors, Animatable, SharedTarget};
use crate::{Result, TweenError};
use std::collections::HashMap;

/// Lifecycle callback, invoked with the tween's borrowed target.
///
/// The target is already borrowed when the callback runs; re-borrowing the
/// same [`SharedTarget`] handle inside the callback will panic.
pub type TweenCallback = Box<dyn FnMut(&mut dyn Animatable)>;

/// State of a tween animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    NotStarted,
    Running,
    Paused,
    Finished,
    Stopped,
}

/// Outcome of advancing a tween by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenTick {
    /// The tween stays in the registry
    KeepAlive,
    /// The tween is done and should be discarded
    Remove,
}

/// A tween animation driving a set of named properties on a target from
/// their snapshot-at-start values to configured end values over a fixed
/// number of ticks.
pub struct Tween {
    target: SharedTarget,
    end_values: HashMap<String, f64>,
    start_values: HashMap<String, f64>,
    elapsed: u32,
    duration_ticks: u32,
    delay_ticks: u32,
    easing: EasingFunction,
    state: TweenState,
    accessors: Option<Accessors>,
    tag: Option<String>,
    on_start: Option<TweenCallback>,
    on_update: Option<TweenCallback>,
    on_complete: Option<TweenCallback>,
    on_stop: Option<TweenCallback>,
    chained: Vec<Tween>,
}

impl Tween {
    /// Create a new tween towards the given end values.
    ///
    /// Every end value must be finite.
    pub fn new(target: SharedTarget, end_values: HashMap<String, f64>) -> Result<Self> {
        for (key, value) in &end_values {
            if !value.is_finite() {
                return Err(TweenError::InvalidArgument(format!(
                    "end value for '{key}' must be finite, got {value}"
                )));
            }
        }

        Ok(Self {
            target,
            end_values,
            start_values: HashMap::new(),
            elapsed: 0,
            duration_ticks: 1,
            delay_ticks: 0,
            easing: EasingFunction::Linear,
            state: TweenState::NotStarted,
            accessors: None,
            tag: None,
            on_start: None,
            on_update: None,
            on_complete: None,
            on_stop: None,
            chained: Vec::new(),
        })
    }

    /// Set the duration in ticks. Must be at least one tick.
    pub fn duration(mut self, ticks: u32) -> Result<Self> {
        if ticks < 1 {
            return Err(TweenError::InvalidArgument(
                "duration must be at least one tick".to_string(),
            ));
        }
        self.duration_ticks = ticks;
        Ok(self)
    }

    /// Set the number of ticks to wait before the interpolation starts
    pub fn delay(mut self, ticks: u32) -> Self {
        self.delay_ticks = ticks;
        self
    }

    /// Set the easing function (default is linear)
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Override direct property access with a custom getter/setter pair
    pub fn with_accessors(mut self, accessors: Accessors) -> Self {
        self.accessors = Some(accessors);
        self
    }

    /// Name the tween's target so it can be rebound when restoring a snapshot
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Replace the chained list. Chained tweens begin automatically when
    /// this tween completes; they must not be registered separately.
    pub fn chain(mut self, tweens: Vec<Tween>) -> Self {
        self.chained = tweens;
        self
    }

    /// Set start callback
    pub fn on_start<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut dyn Animatable) + 'static,
    {
        self.on_start = Some(Box::new(callback));
        self
    }

    /// Set update callback, invoked after each interpolation write
    pub fn on_update<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut dyn Animatable) + 'static,
    {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Set completion callback
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut dyn Animatable) + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Set stop callback, invoked when the tween is cancelled
    pub fn on_stop<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut dyn Animatable) + 'static,
    {
        self.on_stop = Some(Box::new(callback));
        self
    }

    /// Current state
    pub fn state(&self) -> TweenState {
        self.state
    }

    /// Current progress (0.0 to 1.0), before easing
    pub fn progress(&self) -> f64 {
        (self.elapsed as f64 / self.duration_ticks as f64).clamp(0.0, 1.0)
    }

    /// Pause the tween; elapsed ticks and remaining delay are untouched
    pub fn pause(&mut self) {
        if self.state == TweenState::Running {
            self.state = TweenState::Paused;
        }
    }

    /// Resume a paused tween
    pub fn resume(&mut self) {
        if self.state == TweenState::Paused {
            self.state = TweenState::Running;
        }
    }

    /// Snapshot current property values as the interpolation start and
    /// begin running. A property the target does not have reads as 0.0.
    pub(crate) fn begin(&mut self) {
        let mut snapshot = HashMap::with_capacity(self.end_values.len());
        {
            let target = self.target.borrow();
            for key in self.end_values.keys() {
                let current = match self.accessors.as_ref() {
                    Some(accessors) => accessors.read(&*target, key),
                    None => target.get(key),
                };
                snapshot.insert(key.clone(), current.unwrap_or(0.0));
            }
        }
        self.start_values = snapshot;
        self.elapsed = 0;
        self.state = TweenState::Running;

        if let Some(callback) = self.on_start.as_mut() {
            callback(&mut *self.target.borrow_mut());
        }
    }

    /// Advance by one tick, writing interpolated values to the target.
    ///
    /// Completion forces progress to exactly 1.0, so end values are reached
    /// regardless of the easing function's boundary behavior.
    pub(crate) fn advance(&mut self) -> TweenTick {
        match self.state {
            TweenState::Running => {}
            TweenState::Finished | TweenState::Stopped => return TweenTick::Remove,
            TweenState::NotStarted | TweenState::Paused => return TweenTick::KeepAlive,
        }

        if self.delay_ticks > 0 {
            self.delay_ticks -= 1;
            return TweenTick::KeepAlive;
        }

        self.elapsed += 1;
        let finished = self.elapsed >= self.duration_ticks;
        let progress = if finished {
            1.0
        } else {
            self.easing
                .apply(self.elapsed as f64 / self.duration_ticks as f64)
        };

        {
            let mut target = self.target.borrow_mut();
            for (key, end) in &self.end_values {
                let start = self.start_values.get(key).copied().unwrap_or(0.0);
                let value = Interpolation::linear(start, *end, progress);
                match self.accessors.as_mut() {
                    Some(accessors) => accessors.write(&mut *target, key, value),
                    None => target.set(key, value),
                }
            }

            if let Some(callback) = self.on_update.as_mut() {
                callback(&mut *target);
            }
        }

        if finished {
            self.state = TweenState::Finished;
            if let Some(callback) = self.on_complete.as_mut() {
                callback(&mut *self.target.borrow_mut());
            }
            TweenTick::Remove
        } else {
            TweenTick::KeepAlive
        }
    }

    /// Cancel the tween and its entire planned continuation chain
    pub(crate) fn halt(&mut self) {
        self.state = TweenState::Stopped;
        if let Some(callback) = self.on_stop.as_mut() {
            callback(&mut *self.target.borrow_mut());
        }
        for tween in &mut self.chained {
            tween.halt();
        }
    }

    /// Detach the chained tweens so they can begin their own lifecycle
    pub(crate) fn take_chained(&mut self) -> Vec<Tween> {
        std::mem::take(&mut self.chained)
    }

    /// Serializable view of this tween, if it is tagged for rebinding.
    ///
    /// Callbacks, accessor overrides and `Custom` easings are dropped;
    /// untagged chained tweens are omitted.
    pub(crate) fn to_snapshot(&self) -> Option<TweenSnapshot> {
        let tag = self.tag.clone()?;
        Some(TweenSnapshot {
            tag,
            start_values: self.start_values.clone(),
            end_values: self.end_values.clone(),
            elapsed: self.elapsed,
            duration_ticks: self.duration_ticks,
            delay_ticks: self.delay_ticks,
            easing: self.easing.name().map(str::to_owned),
            paused: self.state == TweenState::Paused,
            chained: self
                .chained
                .iter()
                .filter_map(|tween| tween.to_snapshot())
                .collect(),
        })
    }

    /// Rebuild a tween from a snapshot, rebinding its target through the
    /// resolver. `active` marks tweens that were mid-flight when the
    /// snapshot was taken; chained tweens are restored unstarted.
    pub(crate) fn from_snapshot(
        snapshot: TweenSnapshot,
        resolver: &dyn Fn(&str) -> Option<SharedTarget>,
        active: bool,
    ) -> Result<Self> {
        let target =
            resolver(&snapshot.tag).ok_or_else(|| TweenError::UnknownTarget(snapshot.tag.clone()))?;

        let easing = snapshot
            .easing
            .as_deref()
            .and_then(EasingFunction::from_name)
            .unwrap_or(EasingFunction::Linear);

        let chained = snapshot
            .chained
            .into_iter()
            .map(|chained| Self::from_snapshot(chained, resolver, false))
            .collect::<Result<Vec<_>>>()?;

        let state = if !active {
            TweenState::NotStarted
        } else if snapshot.paused {
            TweenState::Paused
        } else {
            TweenState::Running
        };

        Ok(Self {
            target,
            end_values: snapshot.end_values,
            start_values: snapshot.start_values,
            elapsed: snapshot.elapsed,
            duration_ticks: snapshot.duration_ticks.max(1),
            delay_ticks: snapshot.delay_ticks,
            easing,
            state,
            accessors: None,
            tag: Some(snapshot.tag),
            on_start: None,
            on_update: None,
            on_complete: None,
            on_stop: None,
            chained,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::shared;
    use std::cell::Cell;
    use std::rc::Rc;

    fn bag(entries: &[(&str, f64)]) -> SharedTarget {
        shared(
            entries
                .iter()
                .map(|(key, value)| (key.to_string(), *value))
                .collect::<HashMap<_, _>>(),
        )
    }

    fn ends(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_zero_duration_rejected() {
        let target = bag(&[("x", 0.0)]);
        let result = Tween::new(target, ends(&[("x", 1.0)])).unwrap().duration(0);
        assert!(matches!(result, Err(TweenError::InvalidArgument(_))));
    }

    #[test]
    fn test_non_finite_end_value_rejected() {
        let target = bag(&[]);
        assert!(Tween::new(target.clone(), ends(&[("x", f64::NAN)])).is_err());
        assert!(Tween::new(target, ends(&[("x", f64::INFINITY)])).is_err());
    }

    #[test]
    fn test_begin_snapshots_current_values() {
        let target = bag(&[("x", 3.0)]);
        let mut tween = Tween::new(target, ends(&[("x", 10.0)]))
            .unwrap()
            .duration(2)
            .unwrap();
        tween.begin();
        assert_eq!(tween.start_values.get("x"), Some(&3.0));
        assert_eq!(tween.state(), TweenState::Running);
    }

    #[test]
    fn test_missing_property_snapshots_as_zero() {
        let target = bag(&[]);
        let mut tween = Tween::new(target.clone(), ends(&[("x", 10.0)]))
            .unwrap()
            .duration(2)
            .unwrap();
        tween.begin();
        assert_eq!(tween.start_values.get("x"), Some(&0.0));

        tween.advance();
        assert_eq!(target.borrow().get("x"), Some(5.0));
    }

    #[test]
    fn test_completion_reaches_end_exactly() {
        // An easing that never returns 1.0 on its own
        let target = bag(&[("x", 0.0)]);
        let mut tween = Tween::new(target.clone(), ends(&[("x", 100.0)]))
            .unwrap()
            .duration(4)
            .unwrap()
            .with_easing(EasingFunction::Custom(|t| t * 0.9));
        tween.begin();

        for _ in 0..3 {
            assert_eq!(tween.advance(), TweenTick::KeepAlive);
        }
        assert_eq!(tween.advance(), TweenTick::Remove);
        assert_eq!(target.borrow().get("x"), Some(100.0));
        assert_eq!(tween.state(), TweenState::Finished);
    }

    #[test]
    fn test_delay_leaves_target_untouched() {
        let target = bag(&[("x", 0.0)]);
        let mut tween = Tween::new(target.clone(), ends(&[("x", 10.0)]))
            .unwrap()
            .duration(1)
            .unwrap()
            .delay(3);
        tween.begin();

        for _ in 0..3 {
            assert_eq!(tween.advance(), TweenTick::KeepAlive);
            assert_eq!(target.borrow().get("x"), Some(0.0));
        }
        assert_eq!(tween.advance(), TweenTick::Remove);
        assert_eq!(target.borrow().get("x"), Some(10.0));
    }

    #[test]
    fn test_paused_tween_is_inert() {
        let target = bag(&[("x", 0.0)]);
        let mut tween = Tween::new(target.clone(), ends(&[("x", 10.0)]))
            .unwrap()
            .duration(10)
            .unwrap();
        tween.begin();
        tween.advance();
        let mid = target.borrow().get("x");

        tween.pause();
        assert_eq!(tween.advance(), TweenTick::KeepAlive);
        assert_eq!(target.borrow().get("x"), mid);

        tween.resume();
        tween.advance();
        assert!(target.borrow().get("x") > mid);
    }

    #[test]
    fn test_callbacks_fire_in_order() {
        let started = Rc::new(Cell::new(0));
        let updated = Rc::new(Cell::new(0));
        let completed = Rc::new(Cell::new(0));

        let target = bag(&[("x", 0.0)]);
        let (s, u, c) = (started.clone(), updated.clone(), completed.clone());
        let mut tween = Tween::new(target, ends(&[("x", 1.0)]))
            .unwrap()
            .duration(2)
            .unwrap()
            .on_start(move |_| s.set(s.get() + 1))
            .on_update(move |_| u.set(u.get() + 1))
            .on_complete(move |_| c.set(c.get() + 1));

        tween.begin();
        assert_eq!(started.get(), 1);

        tween.advance();
        assert_eq!((updated.get(), completed.get()), (1, 0));

        tween.advance();
        assert_eq!((updated.get(), completed.get()), (2, 1));
    }

    #[test]
    fn test_halt_propagates_through_chain() {
        let stops = Rc::new(Cell::new(0));
        let target = bag(&[("x", 0.0)]);

        let (s1, s2, s3) = (stops.clone(), stops.clone(), stops.clone());
        let inner = Tween::new(target.clone(), ends(&[("x", 3.0)]))
            .unwrap()
            .on_stop(move |_| s3.set(s3.get() + 1));
        let middle = Tween::new(target.clone(), ends(&[("x", 2.0)]))
            .unwrap()
            .on_stop(move |_| s2.set(s2.get() + 1))
            .chain(vec![inner]);
        let mut outer = Tween::new(target, ends(&[("x", 1.0)]))
            .unwrap()
            .on_stop(move |_| s1.set(s1.get() + 1))
            .chain(vec![middle]);

        outer.begin();
        outer.halt();
        assert_eq!(stops.get(), 3);
        assert_eq!(outer.state(), TweenState::Stopped);
    }

    #[test]
    fn test_accessor_override_applies() {
        let target = bag(&[("half", 0.0)]);
        let accessors = Accessors::new(
            |target, property| target.get(property),
            |target, property, value| target.set(property, value / 2.0),
        );

        let mut tween = Tween::new(target.clone(), ends(&[("half", 10.0)]))
            .unwrap()
            .duration(1)
            .unwrap()
            .with_accessors(accessors);
        tween.begin();
        tween.advance();
        assert_eq!(target.borrow().get("half"), Some(5.0));
    }
}
