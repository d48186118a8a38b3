use serde::Deserialize;

/// Root of the WeatherAPI.com `forecast.json` response.
///
/// Decoded once per invocation; nothing mutates it afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub location: Location,
    pub current: Current,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub localtime_epoch: i64,
    /// IANA timezone identifier, e.g. "America/New_York".
    pub tz_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub temp_f: f64,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    /// Calendar date, "YYYY-MM-DD".
    pub date: String,
    /// One entry per hour of the day, ascending by `time_epoch`.
    pub hour: Vec<HourEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourEntry {
    /// UTC epoch seconds.
    pub time_epoch: i64,
    pub temp_c: f64,
    pub temp_f: f64,
    pub chance_of_rain: f64,
    pub condition: Condition,
}
