//! Event facade tying a prepared season to focus and layout state.
//!
//! Renderers feed user and system events in and get back instructions about
//! what to redraw and which size changes to animate. Every `Animate` command
//! must eventually be answered with `AnimationFinished` carrying its id.

use tracing::{debug, info};

use crate::chart::Size;
use crate::focus::{FocusController, FocusState, SizeTarget, Transition, TransitionId};
use crate::layout::{Layout, ResponsiveLayoutEngine};
use crate::season_view::SeasonView;
use crate::types::{ChartId, League};

#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// A chart was clicked
    Click(ChartId),
    /// The container is now this many pixels wide
    Resize(u32),
    /// A new season finished loading and preparing
    SeasonLoaded(Box<SeasonView>),
    /// Loading a season failed; nothing of it may be drawn
    SeasonFailed,
    AnimationFinished(TransitionId),
}

/// Instructions for the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw every chart from scratch at the layout's resting size
    Rebuild { layout: Layout },
    /// Remove all charts
    Clear,
    /// Move every chart to `size` (no completion reported)
    ResizeAll { size: Size },
    /// Animate the listed charts concurrently, then report `id` finished
    Animate {
        id: TransitionId,
        moves: Vec<(ChartId, Size)>,
    },
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    view: Option<SeasonView>,
    leagues: Vec<League>,
    focus: FocusController,
    layout: ResponsiveLayoutEngine,
    container_width: u32,
    /// Size each chart is at or animating towards
    sizes: Vec<Size>,
}

impl Dashboard {
    pub fn new(container_width: u32) -> Self {
        let mut dashboard = Self {
            view: None,
            leagues: Vec::new(),
            focus: FocusController::new(),
            layout: ResponsiveLayoutEngine::default(),
            container_width,
            sizes: Vec::new(),
        };
        dashboard.layout.update(container_width, &mut dashboard.focus);
        dashboard
    }

    pub fn view(&self) -> Option<&SeasonView> {
        self.view.as_ref()
    }

    pub fn focus_state(&self) -> FocusState {
        self.focus.state()
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    pub fn layout(&self) -> Layout {
        self.layout
            .current()
            .unwrap_or_else(|| self.layout.evaluate(self.container_width))
    }

    pub fn target_sizes(&self) -> &[Size] {
        &self.sizes
    }

    pub fn target_size(&self, chart: ChartId) -> Option<Size> {
        self.sizes.get(chart.0).copied()
    }

    pub fn handle(&mut self, event: DashboardEvent) -> Vec<RenderCommand> {
        match event {
            DashboardEvent::Click(chart) => {
                if self.view.is_none() {
                    return Vec::new();
                }
                let transition = self.focus.toggle(chart, &self.leagues);
                self.animate(transition)
            }
            DashboardEvent::AnimationFinished(id) => {
                let transition = self.focus.animation_finished(id, &self.leagues);
                self.animate(transition)
            }
            DashboardEvent::Resize(width) => self.resize(width),
            DashboardEvent::SeasonLoaded(view) => self.load(*view),
            DashboardEvent::SeasonFailed => {
                self.focus.reset();
                self.view = None;
                self.leagues.clear();
                self.sizes.clear();
                vec![RenderCommand::Clear]
            }
        }
    }

    fn load(&mut self, view: SeasonView) -> Vec<RenderCommand> {
        info!("DASHBOARD: showing season {} ({} charts)", view.year, view.chart_count());
        self.focus.reset();
        self.layout.reset();
        let change = self.layout.update(self.container_width, &mut self.focus);

        self.leagues = view.chart_leagues();
        self.sizes = vec![change.layout.chart_size; view.chart_count()];
        self.view = Some(view);

        vec![RenderCommand::Rebuild {
            layout: change.layout,
        }]
    }

    fn resize(&mut self, width: u32) -> Vec<RenderCommand> {
        let previous = self.layout();
        self.container_width = width;
        let change = self.layout.update(width, &mut self.focus);

        let needs_resize = change.mode_changed
            || !change.displaced.is_empty()
            || previous.chart_size != change.layout.chart_size;
        if !needs_resize || self.view.is_none() {
            return Vec::new();
        }

        debug!("DASHBOARD: resizing all charts to {:?}", change.layout.chart_size);
        self.sizes.iter_mut().for_each(|s| *s = change.layout.chart_size);
        vec![RenderCommand::ResizeAll {
            size: change.layout.chart_size,
        }]
    }

    fn animate(&mut self, transition: Option<Transition>) -> Vec<RenderCommand> {
        let Some(transition) = transition else {
            return Vec::new();
        };
        let resting = self.layout().chart_size;
        let moves: Vec<(ChartId, Size)> = transition
            .animations
            .iter()
            .map(|a| {
                let size = match a.target {
                    SizeTarget::Enlarged => Size::enlarged(),
                    SizeTarget::Canonical => resting,
                    SizeTarget::Hidden => Size::hidden(resting),
                };
                (a.chart, size)
            })
            .collect();

        for (chart, size) in &moves {
            if let Some(slot) = self.sizes.get_mut(chart.0) {
                *slot = *size;
            }
        }

        vec![RenderCommand::Animate {
            id: transition.id,
            moves,
        }]
    }
}
