use crate::motion::Rect;

pub const RENDER_SETTLE_MS: u32 = 100;
pub const BAR_STAGGER_MS: u32 = 100;
pub const COUNTER_STEPS: u32 = 60;
pub const COUNTER_DURATION_MS: u32 = 1_500;
pub const MAX_TILT_DEG: f64 = 10.0;
pub const NEUTRAL_TILT: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0) scale(1)";

pub fn counter_step_ms() -> u32 {
    COUNTER_DURATION_MS / COUNTER_STEPS
}

/// Delay before the `index`-th progress bar grows to its target width.
pub fn bar_delay_ms(index: usize) -> u32 {
    BAR_STAGGER_MS.saturating_mul(index as u32)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u32,
    pub done: bool,
}

impl CounterFrame {
    pub fn label(self) -> String {
        format!("{}%", self.value)
    }
}

/// Percentage counter that climbs from 0 to its target in fixed steps.
///
/// Intermediate frames round down; the last step lands exactly on the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u32,
    step: u32,
}

impl CounterAnimation {
    pub fn new(target: u8) -> Self {
        Self {
            target: u32::from(target),
            step: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.step >= COUNTER_STEPS
    }

    pub fn advance(&mut self) -> CounterFrame {
        self.step = (self.step + 1).min(COUNTER_STEPS);

        if self.is_done() {
            return CounterFrame {
                value: self.target,
                done: true,
            };
        }

        CounterFrame {
            value: self.target * self.step / COUNTER_STEPS,
            done: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn transform(self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateY(-8px) scale(1.02)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Card rotation for a pointer at (`client_x`, `client_y`); the card centre is
/// neutral and each edge reaches [`MAX_TILT_DEG`].
pub fn tilt(bounds: Rect, client_x: f64, client_y: f64) -> Tilt {
    let center_x = bounds.width / 2.0;
    let center_y = bounds.height / 2.0;
    if center_x <= 0.0 || center_y <= 0.0 {
        return Tilt {
            rotate_x: 0.0,
            rotate_y: 0.0,
        };
    }

    let x = client_x - bounds.left;
    let y = client_y - bounds.top;
    let rotate_x = ((y - center_y) / center_y * -MAX_TILT_DEG).clamp(-MAX_TILT_DEG, MAX_TILT_DEG);
    let rotate_y = ((x - center_x) / center_x * MAX_TILT_DEG).clamp(-MAX_TILT_DEG, MAX_TILT_DEG);

    Tilt { rotate_x, rotate_y }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: u8) -> Vec<CounterFrame> {
        let mut animation = CounterAnimation::new(target);
        let mut frames = Vec::new();
        while !animation.is_done() {
            frames.push(animation.advance());
        }
        frames
    }

    #[test]
    fn counter_strictly_increases_and_ends_on_target() {
        let frames = run(85);

        assert_eq!(frames.len() as u32, COUNTER_STEPS);
        assert!(frames.windows(2).all(|pair| pair[0].value < pair[1].value));
        let last = frames.last().copied().expect("frames");
        assert!(last.done);
        assert_eq!(last.label(), "85%");
        assert!(frames[..frames.len() - 1].iter().all(|frame| !frame.done));
    }

    #[test]
    fn intermediate_frames_round_down() {
        let mut animation = CounterAnimation::new(85);
        assert_eq!(animation.advance().value, 1);
        assert_eq!(animation.advance().value, 2);
        assert_eq!(animation.advance().value, 4);
    }

    #[test]
    fn finished_counter_stays_on_target() {
        let mut animation = CounterAnimation::new(50);
        for _ in 0..COUNTER_STEPS + 5 {
            animation.advance();
        }
        assert_eq!(animation.advance(), CounterFrame { value: 50, done: true });
    }

    #[test]
    fn step_timing_matches_duration() {
        assert_eq!(counter_step_ms(), 25);
        assert_eq!(bar_delay_ms(0), 0);
        assert_eq!(bar_delay_ms(3), 300);
    }

    #[test]
    fn tilt_is_neutral_at_centre_and_bounded_at_edges() {
        let bounds = Rect {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 100.0,
        };

        let centre = tilt(bounds, 200.0, 100.0);
        assert_eq!(centre.rotate_x, 0.0);
        assert_eq!(centre.rotate_y, 0.0);

        let corner = tilt(bounds, 300.0, 50.0);
        assert_eq!(corner.rotate_x, 10.0);
        assert_eq!(corner.rotate_y, 10.0);

        let outside = tilt(bounds, 900.0, 900.0);
        assert_eq!(outside.rotate_x, -MAX_TILT_DEG);
        assert_eq!(outside.rotate_y, MAX_TILT_DEG);
    }

    #[test]
    fn zero_sized_card_does_not_tilt() {
        let flat = tilt(Rect::default(), 10.0, 10.0);
        assert_eq!(
            flat.transform(),
            "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) translateY(-8px) scale(1.02)"
        );
    }
}
