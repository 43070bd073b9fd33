use time::{
    Date, Duration, OffsetDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Monday of the week containing `date`.
pub fn week_start(date: Date) -> Date {
    date - Duration::days(date.weekday().number_days_from_monday() as i64)
}

/// Monday of the current week, evaluated in UTC.
pub fn current_week_start() -> Date {
    week_start(OffsetDateTime::now_utc().date())
}

/// Unix timestamp of midnight UTC for `date`.
pub fn to_timestamp(date: Date) -> i64 {
    date.midnight().assume_utc().unix_timestamp()
}

pub fn from_timestamp(timestamp: i64) -> Result<Date, time::error::ComponentRange> {
    Ok(OffsetDateTime::from_unix_timestamp(timestamp)?.date())
}

pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value.trim(), DATE_FORMAT)
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

pub fn format_timestamp(timestamp: i64) -> String {
    match from_timestamp(timestamp) {
        Ok(date) => format_date(date),
        Err(_) => timestamp.to_string(),
    }
}

pub fn now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
