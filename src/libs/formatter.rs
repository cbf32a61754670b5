//! Formatting helpers shared by the console views and the report exporters.
//!
//! Reports are read by Brazilian operators, so dates follow the `dd/mm/yyyy`
//! convention and weekday names are Portuguese. Everything here is pure and
//! never fails: values outside chrono's range render as placeholders.
//!
//! ## Formats
//!
//! - Durations: `45 min`, `1h 0min`, `2h 5min`
//! - Dates: `10/01/2025`
//! - Times of day: `08:05`, in the local time zone
//!
//! ## Examples
//!
//! ```rust
//! use logicheck::libs::formatter::{format_date, format_minutes};
//! use chrono::NaiveDate;
//!
//! assert_eq!(format_minutes(125), "2h 5min");
//! assert_eq!(format_minutes(45), "45 min");
//!
//! let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
//! assert_eq!(format_date(date), "10/01/2025");
//! ```

use chrono::{DateTime, Datelike, Local, NaiveDate, Weekday};

/// Formats a minute count as `M min` below one hour and `Hh Mmin` above.
pub fn format_minutes(minutes: u64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{}h {}min", hours, rest)
    } else {
        format!("{} min", rest)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Local `HH:MM` of a millisecond Unix timestamp.
pub fn format_clock(timestamp_ms: i64) -> String {
    local_datetime(timestamp_ms)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Local `dd/mm/yyyy HH:MM:SS`, used for "generated at" lines.
pub fn format_generated_at(now: DateTime<Local>) -> String {
    format!("{} às {}", now.format("%d/%m/%Y"), now.format("%H:%M:%S"))
}

pub fn local_datetime(timestamp_ms: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp_millis(timestamp_ms).map(|dt| dt.with_timezone(&Local))
}

/// Full Portuguese weekday name, e.g. `sexta-feira`.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// Three-letter Portuguese month abbreviation, e.g. `Fev`.
pub fn month_abbr(date: NaiveDate) -> &'static str {
    const MONTHS: [&str; 12] = ["Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez"];
    MONTHS[date.month0() as usize]
}

/// Escapes text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
