//! Calendar data for one year: month lengths, weekday offsets and how much
//! of each month has elapsed.

use chrono::{Datelike, NaiveDate};

/// Display language for month names and the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Parse a language code. Unknown codes fall back to English.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "ru" => Locale::Ru,
            _ => Locale::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Abbreviated month names, January first.
    pub fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Locale::En => &[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            Locale::Ru => &[
                "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
            ],
        }
    }

    /// Footer line summarizing the year's progress.
    pub fn footer_text(self, days_left: u32, percent: u32) -> String {
        match self {
            Locale::En => format!("{} d left   {}%", days_left, percent),
            Locale::Ru => format!("{} дн. осталось   {}%", days_left, percent),
        }
    }
}

/// One month of the year as seen from `now`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthData {
    pub name: &'static str,
    /// Number of days in the month
    pub days: u32,
    /// Days already reached: all of them for past months, today's day of
    /// month for the current month, zero for future months
    pub passed_days: u32,
    pub is_current: bool,
    /// Weekday of the 1st, Monday = 0
    pub start_weekday: u32,
}

/// Build the twelve months of `now`'s year.
pub fn build_months(now: NaiveDate, locale: Locale) -> Vec<MonthData> {
    let year = now.year();
    let names = locale.month_names();

    (1..=12u32)
        .map(|month| {
            let days = days_in_month(year, month);
            let start_weekday = NaiveDate::from_ymd_opt(year, month, 1)
                .map(|first| first.weekday().num_days_from_monday())
                .unwrap_or(0);

            let passed_days = if now.month() > month {
                days
            } else if now.month() == month {
                now.day()
            } else {
                0
            };

            MonthData {
                name: names[(month - 1) as usize],
                days,
                passed_days,
                is_current: now.month() == month,
                start_weekday,
            }
        })
        .collect()
}

/// Number of days in `month` (1-based) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// 365 or 366.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Year progress as of `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Day of year, 1-based
    pub day: u32,
    pub days_left: u32,
    /// Truncated percentage of the year reached
    pub percent: u32,
}

pub fn progress(now: NaiveDate) -> Progress {
    let day = now.ordinal();
    let total = days_in_year(now.year());
    Progress {
        day,
        days_left: total - day,
        percent: (day as f64 / total as f64 * 100.0) as u32,
    }
}
