//! Which chart, if any, is enlarged.
//!
//! Clicking a chart enlarges it to twice the canonical size and collapses the
//! neighbour it displaces. Clicking it again restores both. Size changes are
//! animated by the renderer; while one is in flight the controller is
//! `Transitioning` and further clicks wait in a single pending slot (the most
//! recent click wins) until the renderer reports the animation finished.
//!
//! The controller never fails. Clicks on charts it does not know, clicks while
//! interaction is disabled, and completions for transitions it no longer tracks
//! are all ignored.

use tracing::debug;

use crate::types::{ChartId, League};

/// Size a chart animates towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTarget {
    Enlarged,
    Canonical,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub chart: ChartId,
    pub target: SizeTarget,
}

/// Identifies one enlarge or restore sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionId(pub u64);

/// Animations that run concurrently and complete as one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub id: TransitionId,
    pub animations: Vec<Animation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Enlarging,
    Restoring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPhase {
    Idle,
    Focused {
        enlarged: ChartId,
        hidden: Option<ChartId>,
    },
    Transitioning {
        kind: TransitionKind,
        id: TransitionId,
        enlarged: ChartId,
        hidden: Option<ChartId>,
    },
}

/// Snapshot of the enlarged chart and the sibling it hides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusState {
    pub enlarged: Option<ChartId>,
    pub hidden_sibling: Option<ChartId>,
}

impl FocusState {
    pub fn is_empty(&self) -> bool {
        self.enlarged.is_none()
    }
}

/// The chart displaced when `chart` is enlarged: second-league charts sit to
/// the right of their partner and displace the one before them, all others
/// displace the one after.
pub fn sibling_of(chart: ChartId, leagues: &[League]) -> Option<ChartId> {
    let index = match leagues.get(chart.0)? {
        League::Second => chart.0.checked_sub(1)?,
        League::First => chart.0 + 1,
    };
    (index < leagues.len()).then_some(ChartId(index))
}

#[derive(Debug, Clone)]
pub struct FocusController {
    phase: FocusPhase,
    pending: Option<ChartId>,
    next_transition: u64,
    enabled: bool,
}

impl Default for FocusController {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusController {
    pub fn new() -> Self {
        Self {
            phase: FocusPhase::Idle,
            pending: None,
            next_transition: 0,
            enabled: true,
        }
    }

    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    pub fn pending(&self) -> Option<ChartId> {
        self.pending
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True when no animation is in flight
    pub fn is_settled(&self) -> bool {
        !matches!(self.phase, FocusPhase::Transitioning { .. })
    }

    pub fn state(&self) -> FocusState {
        match self.phase {
            FocusPhase::Idle => FocusState::default(),
            FocusPhase::Focused { enlarged, hidden }
            | FocusPhase::Transitioning {
                enlarged, hidden, ..
            } => FocusState {
                enlarged: Some(enlarged),
                hidden_sibling: hidden,
            },
        }
    }

    /// A chart was clicked
    pub fn toggle(&mut self, chart: ChartId, leagues: &[League]) -> Option<Transition> {
        if !self.enabled {
            debug!("FOCUS: toggle({:?}) ignored, interaction disabled", chart);
            return None;
        }
        if chart.0 >= leagues.len() {
            debug!("FOCUS: toggle({:?}) ignored, unknown chart", chart);
            return None;
        }

        match self.phase {
            FocusPhase::Idle => Some(self.start_enlarge(chart, leagues)),
            FocusPhase::Focused { enlarged, hidden } => {
                if chart != enlarged {
                    // Restore first, then enlarge the requested chart
                    self.pending = Some(chart);
                }
                Some(self.start_restore(enlarged, hidden))
            }
            FocusPhase::Transitioning { .. } => {
                debug!("FOCUS: toggle({:?}) queued behind in-flight transition", chart);
                self.pending = Some(chart);
                None
            }
        }
    }

    /// The renderer finished animating transition `id`
    pub fn animation_finished(
        &mut self,
        id: TransitionId,
        leagues: &[League],
    ) -> Option<Transition> {
        let FocusPhase::Transitioning {
            kind,
            id: current,
            enlarged,
            hidden,
        } = self.phase
        else {
            debug!("FOCUS: stray completion {:?} while settled", id);
            return None;
        };
        if current != id {
            debug!("FOCUS: stale completion {:?}, waiting for {:?}", id, current);
            return None;
        }

        self.phase = match kind {
            TransitionKind::Enlarging => FocusPhase::Focused { enlarged, hidden },
            // References are only dropped once the restore has fully played out
            TransitionKind::Restoring => FocusPhase::Idle,
        };
        debug!("FOCUS: {:?} settled -> {:?}", kind, self.phase);

        let next = self.pending.take()?;
        self.toggle(next, leagues)
    }

    /// Drop back to `Idle` immediately, whatever is in flight.
    ///
    /// Returns the charts that were enlarged or hidden so the caller can size
    /// them for the current layout.
    pub fn reset(&mut self) -> FocusState {
        let displaced = self.state();
        if !displaced.is_empty() || self.pending.is_some() {
            debug!("FOCUS: reset from {:?} (pending {:?})", self.phase, self.pending);
        }
        self.phase = FocusPhase::Idle;
        self.pending = None;
        displaced
    }

    /// Enable or disable click handling. Disabling also resets.
    pub fn set_enabled(&mut self, enabled: bool) -> FocusState {
        self.enabled = enabled;
        if enabled {
            FocusState::default()
        } else {
            self.reset()
        }
    }

    /// Ids never repeat, so completions from before a reset are always stale
    fn next_id(&mut self) -> TransitionId {
        let id = TransitionId(self.next_transition);
        self.next_transition += 1;
        id
    }

    fn start_enlarge(&mut self, chart: ChartId, leagues: &[League]) -> Transition {
        let hidden = sibling_of(chart, leagues);
        let id = self.next_id();
        self.phase = FocusPhase::Transitioning {
            kind: TransitionKind::Enlarging,
            id,
            enlarged: chart,
            hidden,
        };
        debug!("FOCUS: enlarging {:?}, hiding {:?}", chart, hidden);

        let mut animations = vec![Animation {
            chart,
            target: SizeTarget::Enlarged,
        }];
        if let Some(sibling) = hidden {
            animations.push(Animation {
                chart: sibling,
                target: SizeTarget::Hidden,
            });
        }
        Transition { id, animations }
    }

    fn start_restore(&mut self, enlarged: ChartId, hidden: Option<ChartId>) -> Transition {
        let id = self.next_id();
        self.phase = FocusPhase::Transitioning {
            kind: TransitionKind::Restoring,
            id,
            enlarged,
            hidden,
        };
        debug!("FOCUS: restoring {:?} and {:?}", enlarged, hidden);

        let mut animations = vec![Animation {
            chart: enlarged,
            target: SizeTarget::Canonical,
        }];
        if let Some(sibling) = hidden {
            animations.push(Animation {
                chart: sibling,
                target: SizeTarget::Canonical,
            });
        }
        Transition { id, animations }
    }
}
