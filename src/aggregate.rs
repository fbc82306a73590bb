//! Grouping of flat team-season records into ordered division groups.

use tracing::debug;

use crate::division_order::DivisionOrderer;
use crate::types::{DivisionGroup, TeamRow, TeamSeasonRecord};

/// Turns a season's records into division groups in display order.
#[derive(Debug, Clone, Default)]
pub struct DataAggregator {
    orderer: DivisionOrderer,
}

impl DataAggregator {
    pub fn new(orderer: DivisionOrderer) -> Self {
        Self { orderer }
    }

    /// Group by the verbatim `league` key, order the groups, then order teams
    /// within each group by final standing (best first, ties in input order).
    pub fn aggregate(&self, records: &[TeamSeasonRecord]) -> Vec<DivisionGroup> {
        let mut groups: Vec<DivisionGroup> = Vec::new();

        // Linear scan keeps first-seen key order, which the orderer's
        // fallback for unknown keys depends on
        for record in records {
            match groups.iter_mut().find(|g| g.key == record.league) {
                Some(group) => group.values.push(TeamRow::new(record.clone())),
                None => groups.push(DivisionGroup {
                    key: record.league.clone(),
                    values: vec![TeamRow::new(record.clone())],
                }),
            }
        }

        self.orderer.sort_by_key(&mut groups, |g| g.key.as_str());

        for group in &mut groups {
            sort_by_final_standing(&mut group.values);
        }

        debug!(
            "AGGREGATE: {} records -> {} divisions [{}]",
            records.len(),
            groups.len(),
            groups
                .iter()
                .map(|g| g.key.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        groups
    }
}

/// Stable sort, highest final differential first
fn sort_by_final_standing(rows: &mut [TeamRow]) {
    rows.sort_by(|a, b| b.record.final_result().cmp(&a.record.final_result()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::record;
    use std::collections::HashSet;

    #[test]
    fn test_group_count_matches_distinct_keys() {
        let records = vec![
            record("NYY", "AL East", 10, &[1, 2, 3]),
            record("BOS", "AL East", 10, &[-1, -2, -1]),
            record("NYM", "NL East", 10, &[1, 0, -1]),
            record("CHC", "NL Central", 10, &[1, 2, 1]),
        ];
        let groups = DataAggregator::default().aggregate(&records);
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_union_of_groups_equals_input() {
        let records = crate::fixtures::modern_season(30);
        let groups = DataAggregator::default().aggregate(&records);

        let total: usize = groups.iter().map(|g| g.values.len()).sum();
        assert_eq!(total, records.len());

        let seen: HashSet<&str> = groups
            .iter()
            .flat_map(|g| g.values.iter().map(|r| r.record.abbreviation.as_str()))
            .collect();
        let expected: HashSet<&str> = records.iter().map(|r| r.abbreviation.as_str()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_nl_group_precedes_al_group() {
        let records = vec![
            record("NYY", "AL East", 10, &[1]),
            record("BOS", "AL East", 10, &[-1]),
            record("NYM", "NL East", 10, &[1]),
            record("ATL", "NL East", 10, &[-1]),
        ];
        let groups = DataAggregator::default().aggregate(&records);
        assert_eq!(groups[0].key, "NL East");
        assert_eq!(groups[1].key, "AL East");
    }

    #[test]
    fn test_keys_are_not_normalized() {
        let records = vec![
            record("NYY", "AL East", 10, &[1]),
            record("BOS", "al east", 10, &[1]),
        ];
        let groups = DataAggregator::default().aggregate(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "AL East");
        assert_eq!(groups[1].key, "al east");
    }

    #[test]
    fn test_teams_sorted_by_final_result_ties_in_input_order() {
        let records = vec![
            record("TOR", "AL East", 10, &[0, -2]),
            record("NYY", "AL East", 10, &[1, 4]),
            record("BAL", "AL East", 10, &[1, 2]),
            record("BOS", "AL East", 10, &[-1, 2]),
        ];
        let groups = DataAggregator::default().aggregate(&records);
        let order: Vec<&str> = groups[0]
            .values
            .iter()
            .map(|r| r.record.abbreviation.as_str())
            .collect();
        assert_eq!(order, vec!["NYY", "BAL", "BOS", "TOR"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(DataAggregator::default().aggregate(&[]).is_empty());
    }
}
