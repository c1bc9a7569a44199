/// Axis-aligned box in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width: width.max(0.0), height: height.max(0.0) }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn intersect(&self, other: &Bounds) -> Option<Bounds> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Bounds::new(left, top, right - left, bottom - top))
    }

    /// Grows the box by the margin; negative values shrink it.
    pub fn expand(&self, margin: &RootMargin) -> Bounds {
        Bounds::new(
            self.left - margin.left,
            self.top - margin.top,
            self.width + margin.left + margin.right,
            self.height + margin.top + margin.bottom,
        )
    }
}

/// Adjustment applied to the viewport before intersecting, in CSS `rootMargin` order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    pub fn bottom(bottom: f32) -> Self {
        Self { bottom, ..Self::ZERO }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f32,
    pub root_margin: RootMargin,
}

impl ObserverOptions {
    /// At least 10% of the element inside the viewport.
    pub const DEFAULT: ObserverOptions = ObserverOptions { threshold: 0.1, root_margin: RootMargin::ZERO };

    pub fn new(threshold: f32) -> Self {
        Self { threshold, root_margin: RootMargin::ZERO }
    }

    pub fn with_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Fraction of `target` inside `root`, from 0.0 to 1.0.
pub fn intersection_ratio(target: &Bounds, root: &Bounds) -> f32 {
    match target.intersect(root) {
        None => 0.0,
        Some(overlap) if target.area() > 0.0 => overlap.area() / target.area(),
        // A zero-area target touching the root counts as fully inside.
        Some(_) => 1.0,
    }
}

pub fn is_visible(target: &Bounds, viewport: &Bounds, options: &ObserverOptions) -> bool {
    let root = viewport.expand(&options.root_margin);
    let Some(_) = target.intersect(&root) else {
        return false;
    };
    intersection_ratio(target, &root) >= options.threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Bounds = Bounds { left: 0.0, top: 0.0, width: 800.0, height: 600.0 };

    #[test]
    fn test_ratio() {
        let half_in = Bounds::new(0.0, 500.0, 100.0, 200.0);
        assert!((intersection_ratio(&half_in, &VIEWPORT) - 0.5).abs() < f32::EPSILON);

        let outside = Bounds::new(0.0, 700.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(&outside, &VIEWPORT), 0.0);

        let inside = Bounds::new(10.0, 10.0, 10.0, 10.0);
        assert_eq!(intersection_ratio(&inside, &VIEWPORT), 1.0);
    }

    #[test]
    fn test_threshold() {
        let target = Bounds::new(0.0, 580.0, 100.0, 100.0); // 20% visible
        assert!(is_visible(&target, &VIEWPORT, &ObserverOptions::new(0.1)));
        assert!(!is_visible(&target, &VIEWPORT, &ObserverOptions::new(0.5)));
    }

    #[test]
    fn test_negative_bottom_margin_shrinks_viewport() {
        let target = Bounds::new(0.0, 560.0, 100.0, 100.0); // 40px in, all inside the bottom 50px
        let plain = ObserverOptions::new(0.1);
        let inset = ObserverOptions::new(0.1).with_margin(RootMargin::bottom(-50.0));
        assert!(is_visible(&target, &VIEWPORT, &plain));
        assert!(!is_visible(&target, &VIEWPORT, &inset));
    }

    #[test]
    fn test_zero_area_target() {
        let line = Bounds::new(0.0, 100.0, 100.0, 0.0);
        assert!(is_visible(&line, &VIEWPORT, &ObserverOptions::new(0.5)));
        let below = Bounds::new(0.0, 900.0, 100.0, 0.0);
        assert!(!is_visible(&below, &VIEWPORT, &ObserverOptions::new(0.5)));
    }
}
