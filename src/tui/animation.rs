//! Size tweens for the charts on screen.
//!
//! The dashboard decides where each chart ends up; the animator only moves the
//! displayed sizes there over time and reports which transitions completed.

use crate::chart::Size;
use crate::focus::TransitionId;
use crate::types::ChartId;

#[derive(Debug, Clone, PartialEq)]
struct Tween {
    chart: ChartId,
    from: Size,
    to: Size,
}

#[derive(Debug, Clone, PartialEq)]
struct Running {
    id: TransitionId,
    elapsed_ms: u64,
    tweens: Vec<Tween>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Animator {
    duration_ms: u64,
    displayed: Vec<Size>,
    running: Vec<Running>,
}

impl Animator {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            displayed: Vec::new(),
            running: Vec::new(),
        }
    }

    /// Size each chart is drawn at right now
    pub fn displayed(&self) -> &[Size] {
        &self.displayed
    }

    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// Drop every tween and show `sizes` as they are
    pub fn reset_to(&mut self, sizes: &[Size]) -> Vec<TransitionId> {
        self.displayed = sizes.to_vec();
        self.running.drain(..).map(|r| r.id).collect()
    }

    /// Snap every chart to `size`; interrupted transitions count as finished
    pub fn snap_all(&mut self, size: Size) -> Vec<TransitionId> {
        self.displayed.iter_mut().for_each(|s| *s = size);
        self.running.drain(..).map(|r| r.id).collect()
    }

    /// Begin moving charts towards their targets. A chart already moving is
    /// taken over from wherever it currently is.
    pub fn start(&mut self, id: TransitionId, moves: &[(ChartId, Size)]) -> Vec<TransitionId> {
        let tweens: Vec<Tween> = moves
            .iter()
            .filter_map(|(chart, to)| {
                let from = *self.displayed.get(chart.0)?;
                Some(Tween {
                    chart: *chart,
                    from,
                    to: *to,
                })
            })
            .collect();

        for running in &mut self.running {
            running
                .tweens
                .retain(|t| !moves.iter().any(|(chart, _)| *chart == t.chart));
        }

        self.running.push(Running {
            id,
            elapsed_ms: 0,
            tweens,
        });
        self.tick(0)
    }

    /// Advance all tweens; returns the transitions that completed
    pub fn tick(&mut self, delta_ms: u64) -> Vec<TransitionId> {
        let duration = self.duration_ms;
        let mut finished = Vec::new();

        for running in &mut self.running {
            running.elapsed_ms = running.elapsed_ms.saturating_add(delta_ms);
            let t = if duration == 0 {
                1.0
            } else {
                (running.elapsed_ms as f64 / duration as f64).min(1.0)
            };
            let eased = ease_cubic_in_out(t);
            for tween in &running.tweens {
                if let Some(slot) = self.displayed.get_mut(tween.chart.0) {
                    *slot = tween.from.lerp(tween.to, eased);
                }
            }
            if t >= 1.0 {
                finished.push(running.id);
            }
        }

        self.running.retain(|r| !finished.contains(&r.id));
        finished
    }
}

fn ease_cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
