//! Display helpers for amounts and movement dates.

use chrono::{DateTime, Utc};

use crate::config::Config;

/// Shortest decimal rendering of `value`; whole numbers print without a
/// fraction and negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".into();
    }
    format!("{}", value)
}

/// `Nrs. 400` style rendering of the magnitude of a movement.
pub fn format_money(label: &str, value: f64) -> String {
    format!("{} {}", label, format_number(value.abs()))
}

/// Signed rendering used for balances and summaries.
pub fn format_signed(label: &str, value: f64) -> String {
    format!("{} {}", label, format_number(value))
}

pub fn format_balance(config: &Config, balance: f64) -> String {
    format_signed(&config.balance_label, balance)
}

/// Relative label for a movement date: `Today`, `Yesterday`, `N days ago`
/// within `recent_days`, otherwise `YYYY/MM/DD`. Distance is counted in UTC
/// calendar days and is symmetric.
pub fn format_movement_date(date: DateTime<Utc>, now: DateTime<Utc>, recent_days: u32) -> String {
    let days = (now.date_naive() - date.date_naive()).num_days().abs();
    match days {
        0 => "Today".into(),
        1 => "Yesterday".into(),
        n if n <= i64::from(recent_days) => format!("{} days ago", n),
        _ => date.format("%Y/%m/%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn numbers_render_like_plain_values() {
        assert_eq!(format_number(250.0), "250");
        assert_eq!(format_number(-750.0), "-750");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn money_uses_magnitude() {
        assert_eq!(format_money("Nrs.", -400.0), "Nrs. 400");
        assert_eq!(format_signed("Rs:", -750.0), "Rs: -750");
    }

    #[test]
    fn movement_date_boundaries() {
        let now = noon();
        assert_eq!(format_movement_date(now, now, 7), "Today");
        assert_eq!(
            format_movement_date(now - Duration::hours(11), now, 7),
            "Today"
        );
        assert_eq!(
            format_movement_date(now - Duration::days(1), now, 7),
            "Yesterday"
        );
        assert_eq!(
            format_movement_date(now - Duration::days(7), now, 7),
            "7 days ago"
        );
        assert_eq!(
            format_movement_date(now - Duration::days(8), now, 7),
            "2024/03/07"
        );
    }

    #[test]
    fn recent_window_is_configurable() {
        let now = noon();
        assert_eq!(
            format_movement_date(now - Duration::days(3), now, 2),
            "2024/03/12"
        );
    }
}
