//! Cosmetic effects: parallax, hover tilt, click ripples, the cursor trail and idle floating.
//! None of these feed back into page state.

use std::{
    collections::VecDeque,
    time::Duration,
};

use crate::observer::Bounds;

pub const HERO_PARALLAX: f32 = 0.3;
pub const ORB_PARALLAX_STEP: f32 = 0.1;
pub const DOODLE_PARALLAX: f32 = 0.15;

pub const TILT_DIVISOR: f32 = 10.0;
pub const TILT_LIFT: f32 = 10.0;

pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

pub const TRAIL_MAX_DOTS: usize = 10;
pub const TRAIL_MIN_VIEWPORT_WIDTH: f32 = 768.0;
pub const TRAIL_FADE_AFTER: Duration = Duration::from_millis(100);
pub const TRAIL_REMOVE_AFTER_FADE: Duration = Duration::from_millis(300);

pub const FLOAT_AMPLITUDE: f32 = 5.0;
pub const SKILL_ENTRY_DELAY: Duration = Duration::from_millis(100);
pub const SKILL_ENTRY_STAGGER: Duration = Duration::from_millis(50);
pub const SKILL_HOVER_LIFT: f32 = 5.0;

pub fn hero_parallax(scroll: f32) -> f32 {
    scroll * HERO_PARALLAX
}

pub fn orb_parallax(scroll: f32, index: usize) -> f32 {
    scroll * (index as f32 + 1.0) * ORB_PARALLAX_STEP
}

/// Even doodles drift down and odd ones drift up.
pub fn doodle_parallax(scroll: f32, index: usize) -> f32 {
    let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
    scroll * direction * DOODLE_PARALLAX
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub lift: f32,
}

/// Tilt for a pointer at (`x`, `y`) over `card`, in degrees. Pointer coordinates are in the
/// same space as the card bounds.
pub fn card_tilt(card: &Bounds, x: f32, y: f32) -> Tilt {
    let local_x = x - card.left;
    let local_y = y - card.top;
    Tilt {
        rotate_x: (local_y - card.height / 2.0) / TILT_DIVISOR,
        rotate_y: (card.width / 2.0 - local_x) / TILT_DIVISOR,
        lift: TILT_LIFT,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub button: Bounds,
    /// Top-left corner of the ripple square, relative to the button.
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
    pub created_at: Duration,
}

impl Ripple {
    pub fn new(id: u64, button: &Bounds, click_x: f32, click_y: f32, created_at: Duration) -> Self {
        let diameter = button.width.max(button.height);
        Self {
            id,
            button: *button,
            x: click_x - button.left - diameter / 2.0,
            y: click_y - button.top - diameter / 2.0,
            diameter,
            created_at,
        }
    }

    /// 0.0 at the click, 1.0 when the ripple expires.
    pub fn progress(&self, now: Duration) -> f32 {
        let age = now.saturating_sub(self.created_at);
        (age.as_secs_f32() / RIPPLE_LIFETIME.as_secs_f32()).min(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDot {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub fading: bool,
}

#[derive(Debug, Default)]
pub struct CursorTrail {
    dots: VecDeque<TrailDot>,
    next_id: u64,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops a dot at the pointer. Returns its id, or `None` on narrow viewports.
    pub fn push(&mut self, x: f32, y: f32, viewport_width: f32) -> Option<u64> {
        if viewport_width <= TRAIL_MIN_VIEWPORT_WIDTH {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.dots.push_back(TrailDot { id, x, y, fading: false });
        while self.dots.len() > TRAIL_MAX_DOTS {
            self.dots.pop_front();
        }
        Some(id)
    }

    pub fn fade(&mut self, id: u64) {
        if let Some(dot) = self.dots.iter_mut().find(|dot| dot.id == id) {
            dot.fading = true;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.dots.retain(|dot| dot.id != id);
    }

    pub fn dots(&self) -> impl Iterator<Item = &TrailDot> {
        self.dots.iter()
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}

/// Vertical bob of stat card `index` at time `t`.
pub fn stat_float(t: Duration, index: usize) -> f32 {
    (t.as_secs_f32() + index as f32).sin() * FLOAT_AMPLITUDE
}

/// When skill chip `index` starts its entry animation, counted from the reveal of its group.
pub fn skill_entry_at(index: usize) -> Duration {
    SKILL_ENTRY_DELAY + SKILL_ENTRY_STAGGER * index as u32
}
