use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::model::{ForecastDay, HourEntry, WeatherResponse};
use crate::style::Styles;

/// Rain-chance percentage above which an hour line is rendered as a warning.
/// The comparison is strict: 40 stays on the regular path, 41 warns.
pub const RAIN_WARN_THRESHOLD: f64 = 40.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("invalid day {requested}: the forecast only covers {available} day(s)")]
    DayOutOfRange { requested: usize, available: usize },
}

/// Fully rendered report, ready to print.
#[derive(Debug, Clone)]
pub struct Report {
    pub header: String,
    pub date_line: String,
    pub hour_lines: Vec<String>,
    /// True when the location timezone could not be resolved and UTC was used.
    /// Recoverable: the caller warns and keeps going.
    pub tz_fallback: bool,
}

/// Parse the location's IANA timezone id, falling back to UTC.
pub fn resolve_timezone(tz_id: &str) -> (Tz, bool) {
    match tz_id.parse::<Tz>() {
        Ok(tz) => (tz, false),
        Err(_) => (chrono_tz::UTC, true),
    }
}

/// Bounds-checked access to the requested forecast day.
pub fn select_day(response: &WeatherResponse, day: usize) -> Result<&ForecastDay, ReportError> {
    let available = response.forecast.forecastday.len();
    response
        .forecast
        .forecastday
        .get(day)
        .ok_or(ReportError::DayOutOfRange { requested: day, available })
}

/// Hours of `day` whose local time is at or after `now`, in input order.
///
/// Entries within a day arrive sorted ascending by `time_epoch`, so this
/// yields the forward-looking tail of the day. Entries whose epoch does not
/// map to a valid instant are skipped.
pub fn upcoming_hours<'a>(
    day: &'a ForecastDay,
    tz: Tz,
    now: DateTime<Utc>,
) -> Vec<(DateTime<Tz>, &'a HourEntry)> {
    let now_local = now.with_timezone(&tz);

    day.hour
        .iter()
        .filter_map(|entry| {
            let utc = DateTime::from_timestamp(entry.time_epoch, 0)?;
            let local = utc.with_timezone(&tz);
            (local >= now_local).then_some((local, entry))
        })
        .collect()
}

/// `"Name, Region :"` in gold, then current conditions in both units.
pub fn format_header(response: &WeatherResponse, styles: &Styles) -> String {
    let location = &response.location;
    let current = &response.current;

    format!(
        "{}{}, {} :{} {:.0}F (Feels like {:.0}F), {:.0}C (Feels like {:.0}C), {}",
        styles.gold,
        location.name,
        location.region,
        styles.reset,
        current.temp_f,
        current.feelslike_f,
        current.temp_c,
        current.feelslike_c,
        current.condition.text,
    )
}

pub fn format_date_line(day: &ForecastDay, styles: &Styles) -> String {
    format!("{}{}{}", styles.green, day.date, styles.reset)
}

/// One forecast line for an hour entry.
///
/// Above the rain threshold the whole line is red; below it the time is
/// magenta, the numbers are unstyled and the condition text is yellow.
pub fn format_hour_line(local: DateTime<Tz>, entry: &HourEntry, styles: &Styles) -> String {
    let time = local.format("%H:00");

    if entry.chance_of_rain > RAIN_WARN_THRESHOLD {
        format!(
            "{}{} - {:.0}F, {:.0}C, {:.0}%, {}{}",
            styles.red,
            time,
            entry.temp_f,
            entry.temp_c,
            entry.chance_of_rain,
            entry.condition.text,
            styles.reset,
        )
    } else {
        format!(
            "{}{}{} - {:.0}F, {:.0}C, {:.0}%, {}{}{}",
            styles.magenta,
            time,
            styles.reset,
            entry.temp_f,
            entry.temp_c,
            entry.chance_of_rain,
            styles.yellow,
            entry.condition.text,
            styles.reset,
        )
    }
}

/// Build the full report for `day`, filtered to hours at or after `now`.
pub fn render(
    response: &WeatherResponse,
    day: usize,
    now: DateTime<Utc>,
    styles: &Styles,
) -> Result<Report, ReportError> {
    let selected = select_day(response, day)?;
    let (tz, tz_fallback) = resolve_timezone(&response.location.tz_id);

    let hour_lines = upcoming_hours(selected, tz, now)
        .into_iter()
        .map(|(local, entry)| format_hour_line(local, entry, styles))
        .collect();

    Ok(Report {
        header: format_header(response, styles),
        date_line: format_date_line(selected, styles),
        hour_lines,
        tz_fallback,
    })
}
