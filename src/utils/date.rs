// Date and time formatting for greetings and the daily reminder marker

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Format of `last_reminder` in the config file
pub const REMINDER_DATE_FORMAT: &str = "%d-%m-%Y";

/// Format a date the way `last_reminder` stores it
pub fn reminder_marker(date: NaiveDate) -> String {
    date.format(REMINDER_DATE_FORMAT).to_string()
}

/// Today's reminder marker in local time
pub fn today_marker() -> String {
    reminder_marker(Local::now().date_naive())
}

/// Format the clock shown in the greeting ("19 Oct | 09:05 AM" or "19 Oct | 21:05")
pub fn format_greeting_time(now: NaiveDateTime, time_format_24h: bool) -> String {
    if time_format_24h {
        now.format("%d %b | %H:%M").to_string()
    } else {
        now.format("%d %b | %I:%M %p").to_string()
    }
}
