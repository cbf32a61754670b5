#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate, TimeZone};
    use logicheck::libs::formatter::*;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0 min");
        assert_eq!(format_minutes(45), "45 min");
        assert_eq!(format_minutes(60), "1h 0min");
        assert_eq!(format_minutes(125), "2h 5min");
    }

    #[test]
    fn test_format_date_and_weekday() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(format_date(date), "02/03/2025");
        assert_eq!(weekday_name(date), "domingo");
    }

    #[test]
    fn test_month_abbr() {
        let abbr = |m| month_abbr(NaiveDate::from_ymd_opt(2025, m, 1).unwrap());
        assert_eq!(abbr(2), "Fev");
        assert_eq!(abbr(8), "Ago");
        assert_eq!(abbr(12), "Dez");
    }

    #[test]
    fn test_format_clock() {
        let local = Local.with_ymd_and_hms(2025, 1, 10, 14, 5, 0).unwrap();
        assert_eq!(format_clock(local.timestamp_millis()), "14:05");
        assert_eq!(format_clock(i64::MAX), "--:--");
    }

    #[test]
    fn test_format_generated_at() {
        let now = Local.with_ymd_and_hms(2025, 12, 31, 23, 59, 8).unwrap();
        assert_eq!(format_generated_at(now), "31/12/2025 às 23:59:08");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"A&B"</b>"#), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
        assert_eq!(escape_html("João"), "João");
    }
}
