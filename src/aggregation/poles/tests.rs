use super::*;
use crate::aggregation::fixtures::{qualifying, FixtureSource};
use crate::options::Season;
use std::sync::Arc;

fn range(from: u16, to: u16) -> YearRange {
    YearRange::new(Season::new(from), Season::new(to))
}

fn qualifying_source() -> FixtureSource {
    FixtureSource::default()
        .with_qualifying(
            2003,
            vec![
                qualifying(2003, 1, "Melbourne", &[(1, "msc", "Ferrari"), (2, "bar", "Ferrari")]),
                qualifying(2003, 2, "Sepang", &[(2, "trl", "Toyota"), (1, "alo", "Renault")]),
                qualifying(2003, 3, "Interlagos", &[(1, "bar", "Ferrari")]),
            ],
        )
        .with_qualifying(
            2004,
            vec![qualifying(2004, 1, "Melbourne", &[(1, "msc", "Ferrari")])],
        )
}

fn aggregator(source: FixtureSource) -> Aggregator {
    Aggregator::new(Arc::new(source), 4).unwrap()
}

#[test]
fn test_drivers_poles() {
    let poles = aggregator(qualifying_source())
        .drivers_poles(&range(2003, 2004))
        .unwrap();

    assert_eq!(poles.len(), 3);
    let msc = poles.iter().find(|p| p.name == "msc Driver").unwrap();
    assert_eq!(msc.total_pole_count, 2);
    assert_eq!(msc.poles_by_year[0].circuits, vec!["Melbourne"]);

    let alo = poles.iter().find(|p| p.name == "alo Driver").unwrap();
    assert_eq!(alo.poles_by_year[0].circuits, vec!["Sepang"]);
}

#[test]
fn test_constructors_poles() {
    let poles = aggregator(qualifying_source())
        .constructors_poles(&range(2003, 2004))
        .unwrap();

    let ferrari = poles.iter().find(|p| p.name == "Ferrari").unwrap();
    assert_eq!(ferrari.total_pole_count, 3);
    assert_eq!(ferrari.poles_by_year[0].year_pole_count, 2);
    assert!(poles.iter().all(|p| p.name != "Toyota"));
}

#[test]
fn test_unique_poles() {
    let aggregator = aggregator(qualifying_source());

    let drivers = aggregator.unique_drivers_poles(&range(2003, 2004)).unwrap();
    assert_eq!(drivers[0].pole_sitters, vec!["msc Driver", "alo Driver", "bar Driver"]);
    assert_eq!(drivers[1].unique_pole_sitters_count, 1);

    let constructors = aggregator.unique_constructors_poles(&range(2003, 2003)).unwrap();
    assert_eq!(constructors[0].pole_sitters, vec!["Ferrari", "Renault"]);
}
