//! Display names and time-string parsing shared by the aggregators.

use super::types::{Constructor, Driver};

pub fn driver_name(driver: &Driver) -> String {
    format!("{} {}", driver.given_name, driver.family_name)
}

pub fn constructor_name(constructor: &Constructor) -> String {
    constructor.name.clone()
}

/// Parse `[+][h:]m:ss.fff` or `ss.fff` into seconds.
pub fn parse_duration_secs(raw: &str) -> Option<f64> {
    let trimmed = raw.trim().trim_start_matches('+');
    if trimmed.is_empty() {
        return None;
    }

    trimmed.split(':').try_fold(0.0_f64, |acc, part| {
        part.parse::<f64>().ok().map(|value| acc * 60.0 + value)
    })
}

/// Gap of the runner-up to the winner in seconds. Lapped cars and missing
/// times count as no measurable gap.
pub fn gap_to_winner(raw: Option<&str>) -> f64 {
    raw.and_then(parse_duration_secs).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let driver = Driver {
            driver_id: "alonso".to_string(),
            given_name: "Fernando".to_string(),
            family_name: "Alonso".to_string(),
        };
        assert_eq!(driver_name(&driver), "Fernando Alonso");

        let constructor = Constructor {
            constructor_id: "renault".to_string(),
            name: "Renault".to_string(),
        };
        assert_eq!(constructor_name(&constructor), "Renault");
    }

    #[test]
    fn test_parse_duration_secs() {
        assert_eq!(parse_duration_secs("+2.548"), Some(2.548));
        assert_eq!(parse_duration_secs("0.548"), Some(0.548));
        assert_eq!(parse_duration_secs("1:34.500"), Some(94.5));
        assert_eq!(parse_duration_secs("1:00:00.000"), Some(3600.0));
        assert_eq!(parse_duration_secs(""), None);
        assert_eq!(parse_duration_secs("+1 Lap"), None);
    }

    #[test]
    fn test_gap_to_winner() {
        let gap = gap_to_winner(Some("+1:02.345"));
        assert!((gap - 62.345).abs() < 1e-9);
        assert_eq!(gap_to_winner(Some("0")), 0.0);
        assert_eq!(gap_to_winner(None), 0.0);
    }
}
