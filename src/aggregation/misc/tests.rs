use super::*;
use crate::aggregation::fixtures::{
    driver_standing, lap, qualifying, race, result, with_fastest_rank, with_laps, FixtureSource,
};
use crate::error::StatsError;
use std::sync::Arc;

fn range(from: u16, to: u16) -> YearRange {
    YearRange::new(Season::new(from), Season::new(to))
}

fn aggregator(source: FixtureSource) -> Aggregator {
    Aggregator::new(Arc::new(source), 4).unwrap()
}

fn won_by(season: u16, round: u32, circuit: &str, winner: &str) -> Race {
    race(
        season,
        round,
        circuit,
        vec![
            result(1, 1, winner, "Team", "Finished"),
            result(2, 2, "other", "Team", "Finished"),
        ],
    )
}

fn fastest_by(season: u16, round: u32, circuit: &str, driver_id: &str) -> Race {
    race(
        season,
        round,
        circuit,
        vec![with_fastest_rank(
            result(1, 1, driver_id, "Team", "Finished"),
            1,
        )],
    )
}

/// 2004 round 1: "1" takes everything but "2" leads the lap.
/// 2005 round 1: "1" takes everything and leads.
/// 2005 round 2: "2" wins from "3"'s pole.
fn hat_trick_source() -> FixtureSource {
    FixtureSource::default()
        .with_results(2004, vec![won_by(2004, 1, "A", "1")])
        .with_qualifying(2004, vec![qualifying(2004, 1, "A", &[(1, "1", "Team")])])
        .with_fastest(2004, vec![fastest_by(2004, 1, "A", "1")])
        .with_laps(2004, 1, vec![lap(1, &[("2", 1, "1:30.0"), ("1", 2, "1:30.5")])])
        .with_results(
            2005,
            vec![won_by(2005, 1, "A", "1"), won_by(2005, 2, "B", "2")],
        )
        .with_qualifying(
            2005,
            vec![
                qualifying(2005, 1, "A", &[(1, "1", "Team")]),
                qualifying(2005, 2, "B", &[(1, "3", "Team")]),
            ],
        )
        .with_fastest(
            2005,
            vec![fastest_by(2005, 1, "A", "1"), fastest_by(2005, 2, "B", "2")],
        )
        .with_laps(2005, 1, vec![lap(1, &[("1", 1, "1:29.0")])])
        .with_laps(2005, 2, vec![lap(1, &[("2", 1, "1:29.0")])])
}

#[test]
fn test_race_count_per_season_includes_empty_seasons() {
    let mut source = FixtureSource::default();
    source.race_counts.insert(2010, 19);
    source.race_counts.insert(2012, 20);

    let counts = aggregator(source)
        .race_count_per_season(&range(2010, 2012))
        .unwrap();

    let pairs: Vec<(u16, u32)> = counts.iter().map(|c| (c.season, c.race_count)).collect();
    assert_eq!(pairs, vec![(2010, 19), (2011, 0), (2012, 20)]);
}

#[test]
fn test_hat_tricks() {
    let tricks = aggregator(hat_trick_source())
        .hat_tricks(&range(2004, 2005))
        .unwrap();

    assert_eq!(
        tricks,
        vec![HatTrickModel {
            name: "1 Driver".to_string(),
            hat_trick_count: 2,
        }]
    );
}

#[test]
fn test_hat_trick_needs_fastest_lap_in_same_race() {
    let source = FixtureSource::default()
        .with_results(2007, vec![won_by(2007, 1, "A", "1")])
        .with_qualifying(2007, vec![qualifying(2007, 1, "A", &[(1, "1", "Team")])])
        .with_fastest(2007, vec![fastest_by(2007, 1, "A", "2")]);

    let tricks = aggregator(source).hat_tricks(&range(2007, 2007)).unwrap();
    assert!(tricks.is_empty());
}

#[test]
fn test_hat_trick_conditions_must_share_a_round() {
    // "1" has pole and win in round 1 but the fastest lap in round 2.
    let source = FixtureSource::default()
        .with_results(
            2008,
            vec![won_by(2008, 1, "A", "1"), won_by(2008, 2, "B", "2")],
        )
        .with_qualifying(
            2008,
            vec![
                qualifying(2008, 1, "A", &[(1, "1", "Team")]),
                qualifying(2008, 2, "B", &[(1, "2", "Team")]),
            ],
        )
        .with_fastest(
            2008,
            vec![fastest_by(2008, 1, "A", "2"), fastest_by(2008, 2, "B", "1")],
        );

    let tricks = aggregator(source).hat_tricks(&range(2008, 2008)).unwrap();
    assert!(tricks.is_empty());
}

#[test]
fn test_grand_slams_need_every_lap_led() {
    let slams = aggregator(hat_trick_source())
        .grand_slams(&range(2004, 2005))
        .unwrap();

    assert_eq!(
        slams,
        vec![GrandSlamModel {
            name: "1 Driver".to_string(),
            grand_slam_count: 1,
        }]
    );
}

#[test]
fn test_grand_slam_without_lap_data_is_not_counted() {
    let source = FixtureSource::default()
        .with_results(2006, vec![won_by(2006, 1, "A", "1")])
        .with_qualifying(2006, vec![qualifying(2006, 1, "A", &[(1, "1", "Team")])])
        .with_fastest(2006, vec![fastest_by(2006, 1, "A", "1")]);

    let slams = aggregator(source).grand_slams(&range(2006, 2006)).unwrap();
    assert!(slams.is_empty());
}

#[test]
fn test_non_finishers() {
    let source = FixtureSource::default().with_results(
        2000,
        vec![
            race(
                2000,
                1,
                "A",
                vec![
                    result(1, 1, "one", "Team", "Finished"),
                    result(2, 2, "two", "Team", "+1 Lap"),
                    with_laps(result(3, 3, "three", "Team", "Engine"), 12),
                ],
            ),
            race(
                2000,
                2,
                "B",
                vec![
                    with_laps(result(1, 1, "three", "Team", "Gearbox"), 40),
                    result(2, 2, "two", "Team", "+3 Laps"),
                ],
            ),
        ],
    );

    let dnfs = aggregator(source).non_finishers(&range(2000, 2000)).unwrap();

    assert_eq!(dnfs.len(), 1);
    assert_eq!(dnfs[0].name, "three Driver");
    assert_eq!(dnfs[0].total_did_not_finish_count, 2);
    let laps: Vec<u32> = dnfs[0].did_not_finish_by_year[0]
        .did_not_finish_information
        .iter()
        .map(|d| d.laps_completed)
        .collect();
    assert_eq!(laps, vec![12, 40]);
}

#[test]
fn test_season_position_changes() {
    let mut source = FixtureSource::default().with_results(
        2001,
        vec![race(
            2001,
            1,
            "A",
            vec![
                result(1, 3, "one", "Team", "Finished"),
                result(2, 1, "two", "Team", "Finished"),
                result(3, 0, "three", "Team", "Finished"),
            ],
        )],
    );
    source.driver_standings.insert(
        2001,
        vec![driver_standing("one", 10.0), driver_standing("two", 6.0)],
    );

    let seasons = aggregator(source)
        .season_position_changes(&range(2001, 2001))
        .unwrap();

    assert_eq!(seasons.len(), 1);
    let changes = &seasons[0].position_changes;
    let summary: Vec<(&str, i32, u32)> = changes
        .iter()
        .map(|c| (c.name.as_str(), c.total_position_change, c.championship_position))
        .collect();
    // Pit-lane start for "three" counts as grid 3 of 3.
    assert_eq!(
        summary,
        vec![("one Driver", 2, 1), ("three Driver", 0, 0), ("two Driver", -1, 2)]
    );
}

#[test]
fn test_constructors_front_rows_count_both_cars() {
    let source = FixtureSource::default().with_qualifying(
        2003,
        vec![
            qualifying(
                2003,
                1,
                "A",
                &[(1, "one", "Red"), (2, "two", "Red"), (3, "three", "Blue")],
            ),
            qualifying(2003, 2, "B", &[(1, "three", "Blue"), (2, "one", "Red")]),
        ],
    );

    let rows = aggregator(source)
        .constructors_front_rows(&range(2003, 2003))
        .unwrap();

    let totals: Vec<(&str, u32)> = rows
        .iter()
        .map(|r| (r.name.as_str(), r.total_front_row_count))
        .collect();
    assert_eq!(totals, vec![("Blue", 1), ("Red", 3)]);

    let red = &rows[1];
    assert_eq!(red.front_row_information[0].circuit_name, "A");
    assert_eq!(red.front_row_information[0].circuit_front_row_count, 2);
}

#[test]
fn test_drivers_finishing_positions() {
    let source = FixtureSource::default().with_results(
        2002,
        vec![
            race(
                2002,
                1,
                "A",
                vec![
                    result(1, 1, "one", "Team", "Finished"),
                    result(3, 2, "two", "Team", "Accident"),
                ],
            ),
            race(2002, 2, "B", vec![result(1, 1, "one", "Team", "Finished")]),
        ],
    );

    let positions = aggregator(source)
        .drivers_finishing_positions(&range(2002, 2002))
        .unwrap();

    assert_eq!(positions[0].name, "one Driver");
    assert_eq!(positions[0].finishing_positions[0].finishing_position, 1);
    assert_eq!(positions[0].finishing_positions[0].count, 2);

    let two = &positions[1].finishing_positions[0];
    assert_eq!(two.finishing_position, 3);
    assert!(!two.finishing_position_information[0].finished_race);
}

fn single_race_source() -> FixtureSource {
    FixtureSource::default()
        .with_results(
            2010,
            vec![race(
                2010,
                4,
                "A",
                vec![
                    result(1, 2, "one", "Team", "Finished"),
                    result(2, 1, "two", "Team", "Finished"),
                ],
            )],
        )
        .with_laps(
            2010,
            4,
            vec![
                lap(1, &[("two", 1, "1:35.100"), ("one", 2, "1:35.900")]),
                lap(2, &[("one", 1, "1:31.250"), ("two", 2, "bad")]),
            ],
        )
}

#[test]
fn test_position_changes_during_race() {
    let changes = aggregator(single_race_source())
        .position_changes_during_race(Season::new(2010), Round::new(4))
        .unwrap();

    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].name, "one Driver");
    let positions: Vec<(u32, u32)> = changes[0]
        .laps
        .iter()
        .map(|l| (l.lap_number, l.position))
        .collect();
    assert_eq!(positions, vec![(1, 2), (2, 1)]);
}

#[test]
fn test_lap_times_skip_unparsable() {
    let times = aggregator(single_race_source())
        .lap_times(Season::new(2010), Round::new(4))
        .unwrap();

    assert_eq!(times[0].name, "one Driver");
    assert_eq!(times[0].timings.len(), 2);
    assert!((times[0].timings[1] - 91.25).abs() < 1e-9);
    assert_eq!(times[1].timings.len(), 1);
}

#[test]
fn test_single_race_without_laps_is_empty() {
    let times = aggregator(single_race_source())
        .lap_times(Season::new(2010), Round::new(5))
        .unwrap();
    assert!(times.is_empty());
}

#[test]
fn test_laps_without_results_is_missing_data() {
    let source = FixtureSource::default().with_laps(2010, 1, vec![lap(1, &[("one", 1, "1:30.0")])]);

    let result = aggregator(source).position_changes_during_race(Season::new(2010), Round::new(1));
    assert!(matches!(result, Err(StatsError::MissingData { .. })));
}

#[test]
fn test_failing_season_aborts_report() {
    let source = hat_trick_source().failing(2005);

    let result = aggregator(source).hat_tricks(&range(2004, 2005));
    assert!(matches!(result, Err(StatsError::Io(_))));
}
