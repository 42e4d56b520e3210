//! L3 Molecular Layer: Scroll animation state
//!
//! Combines easing functions and timing utilities into an inertial scroll
//! position. Input only records intent; `update(now)` turns it into motion on
//! the next frame, so several key presses in one frame are batched.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp_u16, progress};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Animation start time
    start: Instant,
    /// Starting scroll position
    from: u16,
    /// Target scroll position
    to: u16,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// Scroll animation state for the page column
///
/// Call the input methods as keys arrive, then `update()` once per frame to
/// get the current interpolated position.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    /// Configuration
    config: ScrollConfig,
    /// Current scroll position (always up-to-date)
    current_scroll: u16,
    /// Largest reachable position for the current page
    max_scroll: u16,
    /// Pending scroll delta for batching multiple scroll events
    pending_delta: i32,
    /// Pending absolute target, applied before any delta
    pending_target: Option<u16>,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    /// Create a new scroll animator with configuration
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_scroll: 0,
            max_scroll: 0,
            pending_delta: 0,
            pending_target: None,
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Check if there's pending work (animation or pending input)
    /// Use this to determine if we need high frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0 || self.pending_target.is_some()
    }

    /// Get the target scroll position (final position after animation)
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    /// Get the current interpolated scroll position
    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    pub fn max_scroll(&self) -> u16 {
        self.max_scroll
    }

    /// Update the scroll limit (page height minus viewport height)
    ///
    /// A shrinking page pulls the position and any running target back in range.
    pub fn set_max_scroll(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        if self.current_scroll > max_scroll {
            self.current_scroll = max_scroll;
        }
        if let Some(anim) = self.animation.as_mut() {
            anim.to = anim.to.min(max_scroll);
            anim.from = anim.from.min(max_scroll);
        }
    }

    /// Set scroll position immediately (no animation, pending input dropped)
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll.min(self.max_scroll);
        self.pending_delta = 0;
        self.pending_target = None;
    }

    /// Animate to an absolute position on the next frame
    ///
    /// If smooth scrolling is disabled, jumps immediately to target.
    pub fn scroll_to(&mut self, target: u16) {
        if !self.config.is_smooth() {
            self.set_scroll(target);
            return;
        }
        self.pending_delta = 0;
        self.pending_target = Some(target);
    }

    /// Scroll by a delta amount (positive = down, negative = up)
    ///
    /// Multiple scroll events within the same animation frame are batched
    /// together for smoother handling of rapid key presses.
    pub fn scroll_by(&mut self, delta: i32) {
        if !self.config.is_smooth() {
            let new_scroll = (self.current_scroll as i32 + delta).clamp(0, self.max_scroll as i32) as u16;
            self.set_scroll(new_scroll);
            return;
        }

        // Accumulate delta for batching
        self.pending_delta += delta;
    }

    /// Scroll down by configured line count
    pub fn scroll_down(&mut self) {
        self.scroll_by(self.config.scroll_lines.max(1) as i32);
    }

    /// Scroll up by configured line count
    pub fn scroll_up(&mut self) {
        self.scroll_by(-(self.config.scroll_lines.max(1) as i32));
    }

    /// Scroll down by half page
    pub fn scroll_half_page_down(&mut self, viewport_height: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(half_page);
    }

    /// Scroll up by half page
    pub fn scroll_half_page_up(&mut self, viewport_height: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(-half_page);
    }

    /// Scroll down by full page
    pub fn scroll_full_page_down(&mut self, viewport_height: u16) {
        self.scroll_by(viewport_height.max(1) as i32);
    }

    /// Scroll up by full page
    pub fn scroll_full_page_up(&mut self, viewport_height: u16) {
        self.scroll_by(-(viewport_height.max(1) as i32));
    }

    /// Update animation state and return current scroll position
    ///
    /// Call this every frame to advance the animation.
    pub fn update(&mut self, now: Instant) -> u16 {
        // Process pending input; a new target always starts from the visible position
        if self.pending_target.is_some() || self.pending_delta != 0 {
            let base = self.pending_target.take().unwrap_or_else(|| self.target_scroll());
            let new_target = (base as i32 + self.pending_delta).clamp(0, self.max_scroll as i32) as u16;
            self.pending_delta = 0;

            if new_target != self.current_scroll {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current_scroll,
                    to: new_target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            } else {
                self.animation = None;
            }
        }

        // Update active animation
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, now, anim.duration) {
                self.current_scroll = anim.to.min(self.max_scroll);
                self.animation = None;
            } else {
                let t = progress(anim.start, now, anim.duration);
                let eased_t = anim.easing.apply(t);
                self.current_scroll = lerp_u16(anim.from, anim.to, eased_t).min(self.max_scroll);
            }
        }

        self.current_scroll
    }

    /// Cancel any active animation and stop at current position
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
        self.pending_target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(duration_ms: u64) -> ScrollAnimator {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            ..Default::default()
        });
        animator.set_max_scroll(200);
        animator
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        animator.set_max_scroll(200);

        animator.scroll_to(100);
        assert_eq!(animator.current_scroll(), 100);
        assert!(!animator.needs_update());
    }

    #[test]
    fn test_animation_eases_toward_target() {
        let mut animator = animator(100);
        let t0 = Instant::now();

        animator.scroll_to(100);
        assert!(animator.needs_update());
        assert_eq!(animator.update(t0), 0);
        assert_eq!(animator.target_scroll(), 100);

        let mid = animator.update(t0 + Duration::from_millis(50));
        assert!(mid > 50 && mid < 100, "ease-out is ahead of linear: {}", mid);

        assert_eq!(animator.update(t0 + Duration::from_millis(100)), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut animator = animator(100);

        animator.scroll_by(10);
        animator.scroll_by(10);
        animator.scroll_by(10);

        animator.update(Instant::now());
        assert_eq!(animator.target_scroll(), 30);
    }

    #[test]
    fn test_scroll_clamp_max() {
        let mut animator = animator(100);
        animator.set_scroll(50);
        animator.set_max_scroll(100);
        animator.scroll_to(300);
        animator.update(Instant::now());
        assert_eq!(animator.target_scroll(), 100);
    }

    #[test]
    fn test_set_scroll_drops_pending_input() {
        let mut animator = animator(100);
        animator.scroll_by(40);
        animator.set_scroll(0);
        assert!(!animator.needs_update());
        assert_eq!(animator.update(Instant::now()), 0);
    }

    #[test]
    fn test_shrinking_page_clamps_position() {
        let mut animator = animator(100);
        animator.set_scroll(150);
        animator.set_max_scroll(20);
        assert_eq!(animator.current_scroll(), 20);
    }
}
