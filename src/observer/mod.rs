//! Scroll-triggered effects.
//!
//! Every watched element gets a slot in the bank. Each frame the page hands over the viewport
//! and the current layout, and the bank reports the elements whose visibility changed.
//! One-shot effects (reveal, progress fill, counter) leave the active set after they fire,
//! but their slot and presentation state stay. Doodle motion keeps watching and flips between
//! running and paused on every transition.

pub mod geometry;

use std::time::Duration;

use tracing::debug;

pub use geometry::{
    Bounds,
    ObserverOptions,
    RootMargin,
};

use crate::animation::CounterAnimation;

/// Delay between a skill bar coming into view and its fill being set.
pub const FILL_DELAY: Duration = Duration::from_millis(100);
/// Fade/slide duration of a reveal.
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);
/// Vertical offset a revealed element slides up from.
pub const REVEAL_OFFSET: f32 = 30.0;
/// Extra delay per section index for staggered section reveals.
pub const SECTION_STAGGER: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(usize);

impl TargetId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EffectKind {
    Reveal { delay: Duration },
    ProgressFill { percent: u8 },
    Counter { goal: Option<u32> },
    DoodleMotion,
}

impl EffectKind {
    pub fn is_one_shot(&self) -> bool {
        !matches!(self, EffectKind::DoodleMotion)
    }

    pub fn default_options(&self) -> ObserverOptions {
        match self {
            EffectKind::Reveal { .. } => {
                ObserverOptions::new(0.1).with_margin(RootMargin::bottom(-50.0))
            }
            EffectKind::ProgressFill { .. } | EffectKind::Counter { .. } => {
                ObserverOptions::new(0.5)
            }
            EffectKind::DoodleMotion => ObserverOptions::DEFAULT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Paused,
    Running,
}

#[derive(Debug, Clone, Default)]
pub struct Presentation {
    pub revealed_at: Option<Duration>,
    pub transition_delay: Duration,
    pub fill_percent: Option<u8>,
    pub counter: Option<CounterAnimation>,
    pub animated: bool,
    pub play_state: PlayState,
}

impl Presentation {
    /// 0.0 while hidden, rising to 1.0 over the reveal transition.
    pub fn reveal_progress(&self, now: Duration) -> f32 {
        let Some(revealed_at) = self.revealed_at else {
            return 0.0;
        };
        let start = revealed_at + self.transition_delay;
        if now <= start {
            return 0.0;
        }
        ((now - start).as_secs_f32() / REVEAL_DURATION.as_secs_f32()).min(1.0)
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fired {
    Revealed(TargetId),
    FillPending(TargetId),
    CounterStarted(TargetId),
    Doodle(TargetId, PlayState),
}

struct Slot {
    kind: EffectKind,
    options: ObserverOptions,
    observing: bool,
    last_visible: Option<bool>,
    presentation: Presentation,
}

#[derive(Default)]
pub struct ObserverBank {
    slots: Vec<Slot>,
}

impl ObserverBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, kind: EffectKind) -> TargetId {
        let options = kind.default_options();
        self.observe_with(kind, options)
    }

    pub fn observe_with(&mut self, kind: EffectKind, options: ObserverOptions) -> TargetId {
        let presentation = match &kind {
            EffectKind::Reveal { delay } => {
                Presentation { transition_delay: *delay, ..Presentation::default() }
            }
            _ => Presentation::default(),
        };
        self.slots.push(Slot { kind, options, observing: true, last_visible: None, presentation });
        TargetId(self.slots.len() - 1)
    }

    pub fn kind(&self, id: TargetId) -> Option<&EffectKind> {
        self.slots.get(id.0).map(|slot| &slot.kind)
    }

    pub fn presentation(&self, id: TargetId) -> Option<&Presentation> {
        self.slots.get(id.0).map(|slot| &slot.presentation)
    }

    pub fn is_observing(&self, id: TargetId) -> bool {
        self.slots.get(id.0).is_some_and(|slot| slot.observing)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.observing).count()
    }

    /// Compares each watched element's layout against the viewport and fires effects for the
    /// ones whose visibility changed. Elements without a layout this frame are skipped.
    pub fn check(
        &mut self,
        viewport: Bounds,
        now: Duration,
        layout: impl Fn(TargetId) -> Option<Bounds>,
    ) -> Vec<Fired> {
        let mut fired = Vec::new();

        for (index, slot) in self.slots.iter_mut().enumerate() {
            if !slot.observing {
                continue;
            }
            let id = TargetId(index);
            let Some(bounds) = layout(id) else {
                continue;
            };

            let visible = geometry::is_visible(&bounds, &viewport, &slot.options);
            if slot.last_visible == Some(visible) {
                continue;
            }
            slot.last_visible = Some(visible);

            if let Some(event) = Self::fire(slot, id, visible, now) {
                debug!("Observer fired: {:?}", event);
                fired.push(event);
            }
        }

        fired
    }

    fn fire(slot: &mut Slot, id: TargetId, visible: bool, now: Duration) -> Option<Fired> {
        if slot.kind.is_one_shot() {
            if !visible {
                return None;
            }
            slot.observing = false;
        }

        match slot.kind {
            EffectKind::Reveal { .. } => {
                slot.presentation.revealed_at = Some(now);
                Some(Fired::Revealed(id))
            }
            EffectKind::ProgressFill { .. } => Some(Fired::FillPending(id)),
            EffectKind::Counter { goal } => {
                if slot.presentation.animated {
                    return None;
                }
                match goal {
                    Some(goal) if goal > 0 => {
                        slot.presentation.counter = Some(CounterAnimation::new(goal));
                        slot.presentation.animated = true;
                        Some(Fired::CounterStarted(id))
                    }
                    _ => None,
                }
            }
            EffectKind::DoodleMotion => {
                let state = if visible { PlayState::Running } else { PlayState::Paused };
                slot.presentation.play_state = state;
                Some(Fired::Doodle(id, state))
            }
        }
    }

    /// Sets a progress bar to its percentage. Called once the fill delay has passed.
    pub fn apply_fill(&mut self, id: TargetId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            if let EffectKind::ProgressFill { percent } = slot.kind {
                slot.presentation.fill_percent = Some(percent.min(100));
            }
        }
    }

    /// Advances every running counter by one frame. Returns true while any is still running.
    pub fn advance_counters(&mut self, elapsed: Duration) -> bool {
        let mut running = false;
        for slot in &mut self.slots {
            if let Some(counter) = &mut slot.presentation.counter {
                if !counter.advance(elapsed) {
                    running = true;
                }
            }
        }
        running
    }

    pub fn counters_running(&self) -> bool {
        self.slots
            .iter()
            .filter_map(|slot| slot.presentation.counter.as_ref())
            .any(|counter| !counter.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::animation::counter::FRAME_INTERVAL;

    const VIEWPORT: Bounds = Bounds { left: 0.0, top: 0.0, width: 800.0, height: 600.0 };

    fn on_screen() -> Bounds {
        Bounds::new(0.0, 100.0, 200.0, 100.0)
    }

    fn off_screen() -> Bounds {
        Bounds::new(0.0, 2000.0, 200.0, 100.0)
    }

    fn check(bank: &mut ObserverBank, layout: &HashMap<TargetId, Bounds>) -> Vec<Fired> {
        bank.check(VIEWPORT, Duration::ZERO, |id| layout.get(&id).copied())
    }

    #[test]
    fn test_reveal_fires_once_and_unobserves() {
        let mut bank = ObserverBank::new();
        let section = bank.observe(EffectKind::Reveal { delay: SECTION_STAGGER * 2 });
        let mut layout = HashMap::from([(section, off_screen())]);

        assert!(check(&mut bank, &layout).is_empty());
        assert!(bank.is_observing(section));

        layout.insert(section, on_screen());
        assert_eq!(check(&mut bank, &layout), vec![Fired::Revealed(section)]);
        assert!(!bank.is_observing(section));

        layout.insert(section, off_screen());
        assert!(check(&mut bank, &layout).is_empty());
        layout.insert(section, on_screen());
        assert!(check(&mut bank, &layout).is_empty());

        let presentation = bank.presentation(section).unwrap();
        assert!(presentation.is_revealed());
        assert_eq!(presentation.transition_delay, Duration::from_millis(200));
    }

    #[test]
    fn test_reveal_progress_respects_delay() {
        let presentation = Presentation {
            revealed_at: Some(Duration::from_millis(1000)),
            transition_delay: Duration::from_millis(100),
            ..Presentation::default()
        };
        assert_eq!(presentation.reveal_progress(Duration::from_millis(1050)), 0.0);
        assert!((presentation.reveal_progress(Duration::from_millis(1400)) - 0.5).abs() < 1e-4);
        assert_eq!(presentation.reveal_progress(Duration::from_millis(5000)), 1.0);
        assert_eq!(Presentation::default().reveal_progress(Duration::from_secs(9)), 0.0);
    }

    #[test]
    fn test_doodle_toggles_on_every_transition() {
        let mut bank = ObserverBank::new();
        let doodle = bank.observe(EffectKind::DoodleMotion);
        let mut layout = HashMap::from([(doodle, off_screen())]);

        // First observation reports the current state.
        assert_eq!(check(&mut bank, &layout), vec![Fired::Doodle(doodle, PlayState::Paused)]);
        assert!(check(&mut bank, &layout).is_empty());

        for _ in 0..3 {
            layout.insert(doodle, on_screen());
            assert_eq!(check(&mut bank, &layout), vec![Fired::Doodle(doodle, PlayState::Running)]);
            layout.insert(doodle, off_screen());
            assert_eq!(check(&mut bank, &layout), vec![Fired::Doodle(doodle, PlayState::Paused)]);
        }
        assert!(bank.is_observing(doodle));
    }

    #[test]
    fn test_progress_fill_waits_for_apply() {
        let mut bank = ObserverBank::new();
        let bar = bank.observe(EffectKind::ProgressFill { percent: 85 });
        let layout = HashMap::from([(bar, on_screen())]);

        assert_eq!(check(&mut bank, &layout), vec![Fired::FillPending(bar)]);
        assert_eq!(bank.presentation(bar).unwrap().fill_percent, None);
        bank.apply_fill(bar);
        assert_eq!(bank.presentation(bar).unwrap().fill_percent, Some(85));
        assert_eq!(bank.active_count(), 0);
    }

    #[test]
    fn test_counter_animates_only_once() {
        let mut bank = ObserverBank::new();
        let stat = bank.observe(EffectKind::Counter { goal: Some(20) });
        let mut layout = HashMap::from([(stat, on_screen())]);

        assert_eq!(check(&mut bank, &layout), vec![Fired::CounterStarted(stat)]);
        assert_eq!(bank.presentation(stat).unwrap().counter.as_ref().unwrap().label(), "0+");

        while bank.advance_counters(FRAME_INTERVAL) {
            let shown = bank.presentation(stat).unwrap().counter.as_ref().unwrap().displayed();
            assert!(shown <= 20);
        }
        assert!(!bank.counters_running());

        layout.insert(stat, off_screen());
        check(&mut bank, &layout);
        layout.insert(stat, on_screen());
        assert!(check(&mut bank, &layout).is_empty());

        let presentation = bank.presentation(stat).unwrap();
        assert!(presentation.animated);
        assert_eq!(presentation.counter.as_ref().unwrap().label(), "20+");
    }

    #[test]
    fn test_counter_without_goal_never_starts() {
        let mut bank = ObserverBank::new();
        let none = bank.observe(EffectKind::Counter { goal: None });
        let zero = bank.observe(EffectKind::Counter { goal: Some(0) });
        let layout = HashMap::from([(none, on_screen()), (zero, on_screen())]);

        assert!(check(&mut bank, &layout).is_empty());
        assert!(bank.presentation(none).unwrap().counter.is_none());
        assert!(bank.presentation(zero).unwrap().counter.is_none());
    }

    #[test]
    fn test_simultaneous_targets_fire_independently() {
        let mut bank = ObserverBank::new();
        let a = bank.observe(EffectKind::Reveal { delay: Duration::ZERO });
        let b = bank.observe(EffectKind::ProgressFill { percent: 40 });
        let c = bank.observe(EffectKind::Reveal { delay: Duration::ZERO });
        let layout = HashMap::from([(a, on_screen()), (b, on_screen())]);

        let fired = check(&mut bank, &layout);
        assert_eq!(fired.len(), 2);
        assert!(fired.contains(&Fired::Revealed(a)));
        assert!(fired.contains(&Fired::FillPending(b)));
        assert!(bank.is_observing(c)); // never laid out
    }
}
