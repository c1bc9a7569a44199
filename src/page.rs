//! The page runtime. Owns one instance of every component, routes input to them and runs
//! every delayed step through a single timer queue.

use std::time::Duration;

use tracing::{
    debug,
    info,
};

use crate::{
    animation::{
        counter::FRAME_INTERVAL,
        TypingAnimator,
    },
    contact::{
        feedback::{
            FEEDBACK_FADE,
            FEEDBACK_VISIBLE,
        },
        form::SUBMIT_DELAY,
        ContactForm,
        FieldName,
        MailHandoff,
        RuleSet,
        SubmitOutcome,
    },
    content::PortfolioContent,
    core::{
        utils::digits_value,
        FolioError,
        TimerQueue,
    },
    decor::{
        CursorTrail,
        Ripple,
        RIPPLE_LIFETIME,
        TRAIL_FADE_AFTER,
        TRAIL_REMOVE_AFTER_FADE,
    },
    navigation::NavState,
    observer::{
        Bounds,
        EffectKind,
        Fired,
        ObserverBank,
        TargetId,
        FILL_DELAY,
        SECTION_STAGGER,
    },
    persistence::PreferenceStore,
    preference::{
        ThemeSwitcher,
        TOGGLE_SPIN,
    },
    projects::ProjectGrid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    TypingStep,
    ProgressFill(TargetId),
    CounterFrame,
    FeedbackHide(u64),
    FeedbackClear(u64),
    SubmitComplete,
    ThemeSpinEnd,
    RippleExpire(u64),
    TrailFade(u64),
    TrailRemove(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    ThemeToggle,
    Scroll { offset: f32 },
    ToggleMenu,
    NavLink { section_top: f32 },
    BackToTop,
    FilterClicked(usize),
    SearchInput(String),
    ClearSearch,
    FieldInput(FieldName, String),
    FieldBlur(FieldName),
    Submit,
    PointerMove { x: f32, y: f32, viewport_width: f32 },
    ButtonClick { button: Bounds, x: f32, y: f32 },
}

/// Observer slots registered for the page, grouped by what they decorate.
#[derive(Debug, Default)]
pub struct PageTargets {
    pub sections: Vec<TargetId>,
    pub timeline: Vec<Vec<TargetId>>,
    pub skill_groups: Vec<TargetId>,
    pub skill_bars: Vec<TargetId>,
    pub stats: Vec<TargetId>,
    pub cards: Vec<TargetId>,
    pub doodles: Vec<TargetId>,
}

pub struct PageRuntime {
    content: PortfolioContent,
    theme: ThemeSwitcher,
    typing: Option<TypingAnimator>,
    observers: ObserverBank,
    targets: PageTargets,
    projects: ProjectGrid,
    contact: Option<ContactForm>,
    nav: NavState,
    trail: CursorTrail,
    ripples: Vec<Ripple>,
    next_ripple: u64,
    last_counter_frame: Duration,
    timers: TimerQueue<TimerEvent>,
}

impl PageRuntime {
    /// Builds every component from `content` and starts the typing animation at `now`.
    /// Fails only if a contact section is declared without a recipient.
    pub fn new(
        content: PortfolioContent,
        store: Box<dyn PreferenceStore>,
        now: Duration,
    ) -> Result<Self, FolioError> {
        let contact = match &content.contact {
            Some(contact) if contact.recipient.trim().is_empty() => {
                return Err(FolioError::MissingContent("contact recipient"));
            }
            Some(contact) => Some(ContactForm::new(contact.recipient.trim(), RuleSet::standard()?)),
            None => None,
        };

        let mut observers = ObserverBank::new();
        let targets = Self::register_targets(&content, &mut observers);
        let projects = ProjectGrid::new(content.projects.clone(), content.filters.clone());

        let mut timers = TimerQueue::new();
        let typing = TypingAnimator::new(&content.phrases);
        if typing.is_some() {
            timers.schedule_at(now, TimerEvent::TypingStep);
        } else {
            info!("No phrases to type; typing animation disabled");
        }

        info!(
            "Page ready: {} sections, {} projects, {} observed elements",
            content.sections.len(),
            content.projects.len(),
            observers.active_count()
        );

        Ok(Self {
            content,
            theme: ThemeSwitcher::load(store),
            typing,
            observers,
            targets,
            projects,
            contact,
            nav: NavState::new(),
            trail: CursorTrail::new(),
            ripples: Vec::new(),
            next_ripple: 0,
            last_counter_frame: now,
            timers,
        })
    }

    fn register_targets(content: &PortfolioContent, observers: &mut ObserverBank) -> PageTargets {
        let mut targets = PageTargets::default();

        for (index, section) in content.sections.iter().enumerate() {
            let delay = SECTION_STAGGER * index as u32;
            targets.sections.push(observers.observe(EffectKind::Reveal { delay }));
            targets.timeline.push(
                section
                    .timeline
                    .iter()
                    .map(|_| observers.observe(EffectKind::Reveal { delay: Duration::ZERO }))
                    .collect(),
            );
        }

        if !content.skills.is_empty() {
            targets.skill_groups.push(observers.observe(EffectKind::Reveal { delay: Duration::ZERO }));
        }
        if !content.skill_tags.is_empty() {
            targets.skill_groups.push(observers.observe(EffectKind::Reveal { delay: Duration::ZERO }));
        }
        targets.skill_bars = content
            .skills
            .iter()
            .map(|skill| observers.observe(EffectKind::ProgressFill { percent: skill.percent }))
            .collect();
        targets.stats = content
            .stats
            .iter()
            .map(|stat| observers.observe(EffectKind::Counter { goal: digits_value(&stat.display) }))
            .collect();
        targets.cards = content
            .projects
            .iter()
            .map(|_| observers.observe(EffectKind::Reveal { delay: Duration::ZERO }))
            .collect();
        targets.doodles = (0..content.doodles).map(|_| observers.observe(EffectKind::DoodleMotion)).collect();

        targets
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    pub fn theme(&self) -> &ThemeSwitcher {
        &self.theme
    }

    pub fn typing(&self) -> Option<&TypingAnimator> {
        self.typing.as_ref()
    }

    pub fn observers(&self) -> &ObserverBank {
        &self.observers
    }

    pub fn targets(&self) -> &PageTargets {
        &self.targets
    }

    pub fn projects(&self) -> &ProjectGrid {
        &self.projects
    }

    pub fn contact(&self) -> Option<&ContactForm> {
        self.contact.as_ref()
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Routes one input event. Returns a scroll offset when the event asks the page to move.
    pub fn handle(&mut self, event: PageEvent, now: Duration) -> Option<f32> {
        match event {
            PageEvent::ThemeToggle => {
                self.theme.toggle();
                self.timers.cancel_where(|e| *e == TimerEvent::ThemeSpinEnd);
                self.timers.schedule(now, TOGGLE_SPIN, TimerEvent::ThemeSpinEnd);
            }
            PageEvent::Scroll { offset } => self.nav.on_scroll(offset),
            PageEvent::ToggleMenu => self.nav.toggle_menu(),
            PageEvent::NavLink { section_top } => return Some(self.nav.follow_link(section_top)),
            PageEvent::BackToTop => return Some(0.0),
            PageEvent::FilterClicked(index) => self.projects.select_filter(index),
            PageEvent::SearchInput(text) => self.projects.set_search(&text),
            PageEvent::ClearSearch => self.projects.clear_search(),
            PageEvent::FieldInput(name, value) => {
                if let Some(form) = &mut self.contact {
                    form.on_input(name, &value);
                }
            }
            PageEvent::FieldBlur(name) => {
                if let Some(form) = &mut self.contact {
                    form.on_blur(name);
                }
            }
            PageEvent::Submit => self.submit(now),
            PageEvent::PointerMove { x, y, viewport_width } => {
                if let Some(id) = self.trail.push(x, y, viewport_width) {
                    self.timers.schedule(now, TRAIL_FADE_AFTER, TimerEvent::TrailFade(id));
                }
            }
            PageEvent::ButtonClick { button, x, y } => {
                let id = self.next_ripple;
                self.next_ripple += 1;
                self.ripples.push(Ripple::new(id, &button, x, y, now));
                self.timers.schedule(now, RIPPLE_LIFETIME, TimerEvent::RippleExpire(id));
            }
        }
        None
    }

    fn submit(&mut self, now: Duration) {
        let Some(form) = &mut self.contact else {
            return;
        };
        match form.submit() {
            SubmitOutcome::Blocked { feedback } => self.schedule_dismiss(now, feedback),
            SubmitOutcome::Pending => {
                info!("Contact form valid, sending in {:?}", SUBMIT_DELAY);
                self.timers.schedule(now, SUBMIT_DELAY, TimerEvent::SubmitComplete);
            }
            SubmitOutcome::Ignored => debug!("Submit ignored while a message is in flight"),
        }
    }

    fn schedule_dismiss(&mut self, now: Duration, generation: u64) {
        self.timers.cancel_where(|e| {
            matches!(e, TimerEvent::FeedbackHide(g) | TimerEvent::FeedbackClear(g) if *g != generation)
        });
        self.timers.schedule(now, FEEDBACK_VISIBLE, TimerEvent::FeedbackHide(generation));
    }

    /// Compares the observed elements against the viewport. `layout` gives each target's
    /// current bounds in the viewport's coordinate space.
    pub fn check_visibility(
        &mut self,
        viewport: Bounds,
        now: Duration,
        layout: impl Fn(TargetId) -> Option<Bounds>,
    ) -> Vec<Fired> {
        let fired = self.observers.check(viewport, now, layout);
        for event in &fired {
            match event {
                Fired::FillPending(id) => {
                    self.timers.schedule(now, FILL_DELAY, TimerEvent::ProgressFill(*id));
                }
                Fired::CounterStarted(_) => {
                    if !self.timers.contains(|e| *e == TimerEvent::CounterFrame) {
                        self.last_counter_frame = now;
                        self.timers.schedule(now, FRAME_INTERVAL, TimerEvent::CounterFrame);
                    }
                }
                Fired::Revealed(_) | Fired::Doodle(..) => {}
            }
        }
        fired
    }

    /// Runs every timer due at or before `now`, in deadline order. Returns true if any ran.
    pub fn tick(&mut self, now: Duration, handoff: &mut dyn MailHandoff) -> bool {
        let mut ran = false;
        while let Some((due, event)) = self.timers.pop_due(now) {
            ran = true;
            self.dispatch(due, now, event, handoff);
        }
        ran
    }

    fn dispatch(&mut self, due: Duration, now: Duration, event: TimerEvent, handoff: &mut dyn MailHandoff) {
        match event {
            TimerEvent::TypingStep => {
                if let Some(typing) = &mut self.typing {
                    let delay = typing.step();
                    self.timers.schedule_at(due + delay, TimerEvent::TypingStep);
                }
            }
            TimerEvent::ProgressFill(id) => self.observers.apply_fill(id),
            TimerEvent::CounterFrame => {
                let elapsed = now.saturating_sub(self.last_counter_frame);
                self.last_counter_frame = now;
                if self.observers.advance_counters(elapsed) {
                    self.timers.schedule(now, FRAME_INTERVAL, TimerEvent::CounterFrame);
                }
            }
            TimerEvent::FeedbackHide(generation) => {
                if let Some(form) = &mut self.contact {
                    form.feedback_mut().hide(generation);
                    self.timers.schedule_at(due + FEEDBACK_FADE, TimerEvent::FeedbackClear(generation));
                }
            }
            TimerEvent::FeedbackClear(generation) => {
                if let Some(form) = &mut self.contact {
                    form.feedback_mut().clear(generation);
                }
            }
            TimerEvent::SubmitComplete => {
                let completion = self.contact.as_mut().and_then(|form| form.complete(handoff));
                if let Some(completion) = completion {
                    self.schedule_dismiss(now, completion.feedback());
                }
            }
            TimerEvent::ThemeSpinEnd => self.theme.end_spin(),
            TimerEvent::RippleExpire(id) => self.ripples.retain(|ripple| ripple.id != id),
            TimerEvent::TrailFade(id) => {
                self.trail.fade(id);
                self.timers.schedule_at(due + TRAIL_REMOVE_AFTER_FADE, TimerEvent::TrailRemove(id));
            }
            TimerEvent::TrailRemove(id) => self.trail.remove(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        contact::FeedbackKind,
        content::ContactContent,
        core::{
            Clock,
            ManualClock,
        },
        observer::PlayState,
        persistence::MemoryPreferenceStore,
        preference::ThemePreference,
    };

    #[derive(Default)]
    struct RecordingHandoff {
        opened: Vec<String>,
    }

    impl MailHandoff for RecordingHandoff {
        fn open(&mut self, mailto: &str) -> Result<(), FolioError> {
            self.opened.push(mailto.to_string());
            Ok(())
        }
    }

    const VIEWPORT: Bounds = Bounds { left: 0.0, top: 0.0, width: 1280.0, height: 800.0 };

    fn page(clock: &ManualClock) -> PageRuntime {
        PageRuntime::new(PortfolioContent::default(), Box::new(MemoryPreferenceStore::new()), clock.now())
            .unwrap()
    }

    fn everything_on_screen(_: TargetId) -> Option<Bounds> {
        Some(Bounds::new(0.0, 100.0, 300.0, 100.0))
    }

    fn everything_off_screen(_: TargetId) -> Option<Bounds> {
        Some(Bounds::new(0.0, 5000.0, 300.0, 100.0))
    }

    fn run_until(page: &mut PageRuntime, clock: &ManualClock, until: Duration, handoff: &mut RecordingHandoff) {
        while clock.now() < until {
            clock.advance(Duration::from_millis(1));
            page.tick(clock.now(), handoff);
        }
    }

    #[test]
    fn test_typing_starts_immediately() {
        let clock = ManualClock::new();
        let mut page = page(&clock);
        let mut handoff = RecordingHandoff::default();

        page.tick(clock.now(), &mut handoff);
        assert_eq!(page.typing().unwrap().text(), "A");

        clock.advance(Duration::from_millis(100));
        page.tick(clock.now(), &mut handoff);
        assert_eq!(page.typing().unwrap().text(), "AI");
    }

    #[test]
    fn test_no_phrases_disables_typing() {
        let clock = ManualClock::new();
        let content = PortfolioContent { phrases: Vec::new(), ..Default::default() };
        let page = PageRuntime::new(content, Box::new(MemoryPreferenceStore::new()), clock.now()).unwrap();
        assert!(page.typing().is_none());
        assert_eq!(page.next_deadline(), None);
    }

    #[test]
    fn test_empty_recipient_fails_startup() {
        let content = PortfolioContent {
            contact: Some(ContactContent { recipient: "  ".to_string(), blurb: String::new() }),
            ..Default::default()
        };
        let result = PageRuntime::new(content, Box::new(MemoryPreferenceStore::new()), Duration::ZERO);
        assert!(matches!(result, Err(FolioError::MissingContent(_))));
    }

    #[test]
    fn test_no_contact_section_disables_form() {
        let content = PortfolioContent { contact: None, ..Default::default() };
        let mut page = PageRuntime::new(content, Box::new(MemoryPreferenceStore::new()), Duration::ZERO).unwrap();
        page.handle(PageEvent::Submit, Duration::ZERO);
        assert!(page.contact().is_none());
    }

    #[test]
    fn test_theme_toggle_spins_then_settles() {
        let clock = ManualClock::new();
        let mut page = page(&clock);
        let mut handoff = RecordingHandoff::default();

        page.handle(PageEvent::ThemeToggle, clock.now());
        assert_eq!(page.theme().current(), ThemePreference::Dark);
        assert!(page.theme().is_spinning());

        run_until(&mut page, &clock, Duration::from_millis(300), &mut handoff);
        assert!(!page.theme().is_spinning());

        page.handle(PageEvent::ThemeToggle, clock.now());
        assert_eq!(page.theme().current(), ThemePreference::Light);
        assert_eq!(page.theme().stored().as_deref(), Some("light"));
    }

    #[test]
    fn test_stats_count_up_once() {
        let clock = ManualClock::new();
        let mut page = page(&clock);
        let mut handoff = RecordingHandoff::default();

        let fired = page.check_visibility(VIEWPORT, clock.now(), everything_on_screen);
        let counters = fired.iter().filter(|f| matches!(f, Fired::CounterStarted(_))).count();
        assert_eq!(counters, page.content().stats.len());

        let first = page.targets().stats[0];
        let label = |page: &PageRuntime| {
            page.observers().presentation(first).unwrap().counter.as_ref().unwrap().label()
        };
        assert_eq!(label(&page), "0+");

        clock.advance(Duration::from_millis(1000));
        page.tick(clock.now(), &mut handoff);
        assert!(label(&page) != "15+");

        run_until(&mut page, &clock, Duration::from_millis(2100), &mut handoff);
        assert_eq!(label(&page), "15+");
        assert!(!page.observers().counters_running());

        // Scrolling away and back does not restart anything.
        page.check_visibility(VIEWPORT, clock.now(), everything_off_screen);
        let again = page.check_visibility(VIEWPORT, clock.now(), everything_on_screen);
        assert!(again.iter().all(|f| matches!(f, Fired::Doodle(..))));
    }

    #[test]
    fn test_skill_bars_fill_after_delay() {
        let clock = ManualClock::new();
        let mut page = page(&clock);
        let mut handoff = RecordingHandoff::default();
        let bar = page.targets().skill_bars[0];

        page.check_visibility(VIEWPORT, clock.now(), everything_on_screen);
        assert_eq!(page.observers().presentation(bar).unwrap().fill_percent, None);

        clock.advance(Duration::from_millis(99));
        page.tick(clock.now(), &mut handoff);
        assert_eq!(page.observers().presentation(bar).unwrap().fill_percent, None);

        clock.advance(Duration::from_millis(1));
        page.tick(clock.now(), &mut handoff);
        assert_eq!(page.observers().presentation(bar).unwrap().fill_percent, Some(95));
    }

    #[test]
    fn test_sections_reveal_with_stagger() {
        let clock = ManualClock::new();
        let mut page = page(&clock);
        page.check_visibility(VIEWPORT, clock.now(), everything_on_screen);

        let third = page.targets().sections[2];
        let presentation = page.observers().presentation(third).unwrap();
        assert!(presentation.is_revealed());
        assert_eq!(presentation.transition_delay, Duration::from_millis(200));
        assert_eq!(presentation.reveal_progress(Duration::from_millis(200)), 0.0);
        assert_eq!(presentation.reveal_progress(Duration::from_millis(800)), 1.0);
        assert!(!page.observers().is_observing(third));
    }

    #[test]
    fn test_doodles_toggle_with_visibility() {
        let clock = ManualClock::new();
        let mut page = page(&clock);
        let doodle = page.targets().doodles[0];

        page.check_visibility(VIEWPORT, clock.now(), everything_on_screen);
        assert_eq!(page.observers().presentation(doodle).unwrap().play_state, PlayState::Running);
        page.check_visibility(VIEWPORT, clock.now(), everything_off_screen);
        assert_eq!(page.observers().presentation(doodle).unwrap().play_state, PlayState::Paused);
        assert!(page.observers().is_observing(doodle));
    }

    fn fill_form(page: &mut PageRuntime, now: Duration) {
        for (name, value) in [
            (FieldName::Name, "Ada Lovelace"),
            (FieldName::Email, "ada@example.com"),
            (FieldName::Subject, "Hello there"),
            (FieldName::Message, "I have a project you might like."),
        ] {
            page.handle(PageEvent::FieldInput(name, value.to_string()), now);
        }
    }

    #[test]
    fn test_submit_hands_off_after_delay_and_dismisses() {
        let clock = ManualClock::new();
        let mut page = page(&clock);
        let mut handoff = RecordingHandoff::default();
        fill_form(&mut page, clock.now());

        page.handle(PageEvent::Submit, clock.now());
        assert!(page.contact().unwrap().button().loading);

        run_until(&mut page, &clock, Duration::from_millis(1499), &mut handoff);
        assert!(handoff.opened.is_empty());

        run_until(&mut page, &clock, Duration::from_millis(1500), &mut handoff);
        assert_eq!(handoff.opened.len(), 1);
        let form = page.contact().unwrap();
        assert!(!form.button().loading);
        assert_eq!(form.feedback().kind(), Some(FeedbackKind::Success));
        assert!(form.field(FieldName::Name).value.is_empty());

        run_until(&mut page, &clock, Duration::from_millis(6500), &mut handoff);
        assert!(!page.contact().unwrap().feedback().is_visible());
        assert_eq!(page.contact().unwrap().feedback().message(), "Message sent successfully! I'll get back to you soon.");

        run_until(&mut page, &clock, Duration::from_millis(6800), &mut handoff);
        assert_eq!(page.contact().unwrap().feedback().message(), "");
    }

    #[test]
    fn test_newer_feedback_outlives_older_dismissal() {
        let clock = ManualClock::new();
        let mut page = page(&clock);
        let mut handoff = RecordingHandoff::default();

        page.handle(PageEvent::Submit, clock.now());
        run_until(&mut page, &clock, Duration::from_millis(3000), &mut handoff);
        page.handle(PageEvent::Submit, clock.now());

        // The first message's 5s deadline passes without hiding the second.
        run_until(&mut page, &clock, Duration::from_millis(5500), &mut handoff);
        assert!(page.contact().unwrap().feedback().is_visible());

        run_until(&mut page, &clock, Duration::from_millis(8000), &mut handoff);
        assert!(!page.contact().unwrap().feedback().is_visible());
    }

    #[test]
    fn test_submit_twice_sends_once() {
        let clock = ManualClock::new();
        let mut page = page(&clock);
        let mut handoff = RecordingHandoff::default();
        fill_form(&mut page, clock.now());

        page.handle(PageEvent::Submit, clock.now());
        page.handle(PageEvent::Submit, clock.now());
        run_until(&mut page, &clock, Duration::from_millis(2000), &mut handoff);
        assert_eq!(handoff.opened.len(), 1);
    }

    #[test]
    fn test_filter_and_search_route_to_grid() {
        let clock = ManualClock::new();
        let mut page = page(&clock);

        page.handle(PageEvent::FilterClicked(1), clock.now());
        assert_eq!(page.projects().current_filter(), "cv");
        page.handle(PageEvent::SearchInput("  LAYOUT ".to_string()), clock.now());
        assert_eq!(page.projects().visible_count(), 1);
        page.handle(PageEvent::SearchInput("zzz".to_string()), clock.now());
        assert!(page.projects().shows_no_results());
        page.handle(PageEvent::ClearSearch, clock.now());
        assert_eq!(page.projects().visible_count(), 2);
    }

    #[test]
    fn test_navigation_events() {
        let clock = ManualClock::new();
        let mut page = page(&clock);

        page.handle(PageEvent::ToggleMenu, clock.now());
        assert!(page.nav().is_menu_open());
        assert_eq!(page.handle(PageEvent::NavLink { section_top: 900.0 }, clock.now()), Some(820.0));
        assert!(!page.nav().is_menu_open());

        page.handle(PageEvent::Scroll { offset: 450.0 }, clock.now());
        assert!(page.nav().shows_back_to_top());
        assert_eq!(page.handle(PageEvent::BackToTop, clock.now()), Some(0.0));
    }

    #[test]
    fn test_trail_and_ripple_expire() {
        let clock = ManualClock::new();
        let mut page = page(&clock);
        let mut handoff = RecordingHandoff::default();

        page.handle(PageEvent::PointerMove { x: 10.0, y: 10.0, viewport_width: 1280.0 }, clock.now());
        page.handle(
            PageEvent::ButtonClick { button: Bounds::new(0.0, 0.0, 100.0, 40.0), x: 50.0, y: 20.0 },
            clock.now(),
        );
        assert_eq!(page.trail().len(), 1);
        assert_eq!(page.ripples().len(), 1);

        run_until(&mut page, &clock, Duration::from_millis(100), &mut handoff);
        assert!(page.trail().dots().all(|dot| dot.fading));

        run_until(&mut page, &clock, Duration::from_millis(400), &mut handoff);
        assert!(page.trail().is_empty());
        assert_eq!(page.ripples().len(), 1);

        run_until(&mut page, &clock, Duration::from_millis(600), &mut handoff);
        assert!(page.ripples().is_empty());
    }
}
