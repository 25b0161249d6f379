use chrono::{DateTime, Local, TimeZone};
use primitives::TimeStamp;
use std::{
	fmt::Display,
	time::{SystemTime, UNIX_EPOCH},
};

/// Current unix time in whole seconds
pub fn now_seconds() -> TimeStamp {
	SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default()
}

pub fn timestamp_to_local(ts: TimeStamp) -> Option<DateTime<Local>> {
	let secs = i64::try_from(ts).ok()?;
	Local.timestamp_opt(secs, 0).single()
}

/// e.g. "Mon, January 1, 2024"
pub fn format_date<Tz: TimeZone>(date_time: &DateTime<Tz>) -> String
where
	Tz::Offset: Display,
{
	date_time.format("%a, %B %-d, %Y").to_string()
}

/// e.g. "09:05:00"
pub fn format_time<Tz: TimeZone>(date_time: &DateTime<Tz>) -> String
where
	Tz::Offset: Display,
{
	date_time.format("%H:%M:%S").to_string()
}

/// Date and time labels of a contract timestamp, in local time
pub fn format_timestamp(ts: TimeStamp) -> Option<(String, String)> {
	let date_time = timestamp_to_local(ts)?;
	Some((format_date(&date_time), format_time(&date_time)))
}
