//! One season, fully prepared for drawing.
//!
//! records -> division groups -> shared scales -> placed labels -> chart drawings

use tracing::info;

use crate::aggregate::DataAggregator;
use crate::chart::{ChartDrawing, MARGIN, PLOT_HEIGHT, PLOT_WIDTH};
use crate::labels::{LabelPlacer, SeparatingPlacer, DEFAULT_LABEL_GAP};
use crate::scale::ScalePair;
use crate::types::{ChartId, DivisionGroup, League, TeamSeasonRecord};

/// Knobs of the preparation pipeline
#[derive(Debug, Clone)]
pub struct SeasonViewOptions {
    pub aggregator: DataAggregator,
    pub label_gap: f64,
}

impl Default for SeasonViewOptions {
    fn default() -> Self {
        Self {
            aggregator: DataAggregator::default(),
            label_gap: DEFAULT_LABEL_GAP,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeasonView {
    pub year: i32,
    pub groups: Vec<DivisionGroup>,
    pub scales: ScalePair,
    pub charts: Vec<ChartDrawing>,
}

impl SeasonView {
    pub fn build(year: i32, records: &[TeamSeasonRecord], options: &SeasonViewOptions) -> Self {
        let groups = options.aggregator.aggregate(records);
        let scales = ScalePair::from_records(records, PLOT_WIDTH, PLOT_HEIGHT);

        // Labels may use the bottom margin but no further
        let placer = SeparatingPlacer::new(options.label_gap, PLOT_HEIGHT + MARGIN.bottom);
        let groups: Vec<DivisionGroup> = groups
            .into_iter()
            .map(|g| placer.place(g, &scales.vertical))
            .collect();

        let charts = groups
            .iter()
            .enumerate()
            .map(|(i, g)| ChartDrawing::build(ChartId(i), g, &scales))
            .collect();

        info!(
            "SEASON: {} prepared: {} teams in {} divisions",
            year,
            records.len(),
            groups.len()
        );

        Self {
            year,
            groups,
            scales,
            charts,
        }
    }

    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    /// League of every chart, in display order
    pub fn chart_leagues(&self) -> Vec<League> {
        self.charts.iter().map(|c| c.league).collect()
    }

    pub fn chart(&self, id: ChartId) -> Option<&ChartDrawing> {
        self.charts.get(id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{modern_season, record};

    #[test]
    fn test_one_chart_per_division_in_display_order() {
        let view = SeasonView::build(2015, &modern_season(30), &SeasonViewOptions::default());
        assert_eq!(view.chart_count(), 6);
        let keys: Vec<&str> = view.charts.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["NL East", "AL East", "NL Central", "AL Central", "NL West", "AL West"]
        );
        assert_eq!(view.chart(ChartId(1)).map(|c| c.league), Some(League::Second));
        assert!(view.chart(ChartId(6)).is_none());
    }

    #[test]
    fn test_labels_separated_in_every_division() {
        let options = SeasonViewOptions::default();
        let view = SeasonView::build(2015, &modern_season(40), &options);
        for group in &view.groups {
            for pair in group.values.windows(2) {
                let gap = (pair[1].label_position - pair[0].label_position).abs();
                assert!(gap >= options.label_gap - 1e-9);
            }
        }
    }

    #[test]
    fn test_identical_final_results_get_distinct_label_rows() {
        let records = vec![
            record("NYY", "AL East", 3, &[1, 2, 1]),
            record("BOS", "AL East", 3, &[-1, 0, 1]),
        ];
        let options = SeasonViewOptions::default();
        let view = SeasonView::build(2015, &records, &options);
        let rows = &view.groups[0].values;
        let gap = (rows[0].label_position - rows[1].label_position).abs();
        assert!(gap >= options.label_gap - 1e-9);
    }
}
