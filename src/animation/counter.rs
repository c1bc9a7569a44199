use std::time::Duration;

pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Counts a stat up from zero to its goal. The per-frame increment is
/// `goal / (duration / 16ms)`, scaled by how long the frame actually took.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    goal: u32,
    value: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(goal: u32) -> Self {
        let frames = COUNTER_DURATION.as_nanos() as f64 / FRAME_INTERVAL.as_nanos() as f64;
        Self { goal, value: 0.0, increment: f64::from(goal) / frames, finished: false }
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances by one frame that lasted `elapsed`. Returns true once the goal is reached.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.finished {
            return true;
        }

        let frames = elapsed.as_nanos() as f64 / FRAME_INTERVAL.as_nanos() as f64;
        self.value += self.increment * frames;
        if self.value >= f64::from(self.goal) {
            self.value = f64::from(self.goal);
            self.finished = true;
        }
        self.finished
    }

    pub fn displayed(&self) -> u32 {
        if self.finished {
            self.goal
        } else {
            (self.value.floor() as u32).min(self.goal)
        }
    }

    pub fn label(&self) -> String {
        format!("{}+", self.displayed())
    }
}
