//! Moment-style date formatting for `{{date:FORMAT}}` placeholders
//!
//! Template files written for the note plugin use moment.js format strings
//! (`YYYY-MM-DD`, `dddd, MMMM Do`, ...). This module renders the subset of
//! tokens those templates rely on. Text inside `[...]` is emitted literally;
//! characters that don't start a token are copied through unchanged.
//!
//! Weeks follow ISO 8601 (`W`, `WW`, `GG`, `GGGG`). Locale-dependent tokens
//! (`w`, `gggg`, and the `L`/`LL`/`LT` presets) are not supported and come
//! out as literal text.

use chrono::{Datelike, Timelike};

use crate::clock::Timestamp;

/// Recognized tokens, longest first within each letter.
const TOKENS: &[&str] = &[
    "YYYY", "YY", "Q", "MMMM", "MMM", "MM", "M", "Do", "DDDD", "DDD", "DD", "D", "dddd", "ddd",
    "dd", "d", "E", "HH", "H", "hh", "h", "kk", "k", "mm", "m", "ss", "s", "SSS", "SS", "S", "A",
    "a", "ZZ", "Z", "X", "x", "WW", "W", "GGGG", "GG",
];

/// Format `ts` according to a moment.js format string
pub fn format_moment(ts: &Timestamp, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(end) = rest[1..].find(']') {
                out.push_str(&rest[1..1 + end]);
                rest = &rest[end + 2..];
                continue;
            }
        }

        match TOKENS.iter().find(|token| rest.starts_with(**token)) {
            Some(token) => {
                out.push_str(&render_token(ts, token));
                rest = &rest[token.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}

fn render_token(ts: &Timestamp, token: &str) -> String {
    let millis = ts.timestamp_subsec_millis();
    match token {
        "YYYY" => format!("{:04}", ts.year()),
        "YY" => format!("{:02}", ts.year().rem_euclid(100)),
        "Q" => ((ts.month0() / 3) + 1).to_string(),
        "MMMM" => ts.format("%B").to_string(),
        "MMM" => ts.format("%b").to_string(),
        "MM" => format!("{:02}", ts.month()),
        "M" => ts.month().to_string(),
        "Do" => ordinal(ts.day()),
        "DDDD" => format!("{:03}", ts.ordinal()),
        "DDD" => ts.ordinal().to_string(),
        "DD" => format!("{:02}", ts.day()),
        "D" => ts.day().to_string(),
        "dddd" => ts.format("%A").to_string(),
        "ddd" => ts.format("%a").to_string(),
        "dd" => ts.format("%a").to_string().chars().take(2).collect(),
        "d" => ts.weekday().num_days_from_sunday().to_string(),
        "E" => ts.weekday().number_from_monday().to_string(),
        "HH" => format!("{:02}", ts.hour()),
        "H" => ts.hour().to_string(),
        "hh" => format!("{:02}", ts.hour12().1),
        "h" => ts.hour12().1.to_string(),
        "kk" => format!("{:02}", hour_from_one(ts.hour())),
        "k" => hour_from_one(ts.hour()).to_string(),
        "mm" => format!("{:02}", ts.minute()),
        "m" => ts.minute().to_string(),
        "ss" => format!("{:02}", ts.second()),
        "s" => ts.second().to_string(),
        "SSS" => format!("{:03}", millis),
        "SS" => format!("{:02}", millis / 10),
        "S" => (millis / 100).to_string(),
        "A" => meridiem(ts, "AM", "PM"),
        "a" => meridiem(ts, "am", "pm"),
        "ZZ" => ts.format("%z").to_string(),
        "Z" => ts.format("%:z").to_string(),
        "X" => ts.timestamp().to_string(),
        "x" => ts.timestamp_millis().to_string(),
        "WW" => format!("{:02}", ts.iso_week().week()),
        "W" => ts.iso_week().week().to_string(),
        "GGGG" => format!("{:04}", ts.iso_week().year()),
        "GG" => format!("{:02}", ts.iso_week().year().rem_euclid(100)),
        other => other.to_string(),
    }
}

fn meridiem(ts: &Timestamp, am: &str, pm: &str) -> String {
    let (is_pm, _) = ts.hour12();
    let label = if is_pm { pm } else { am };
    label.to_string()
}

/// Hours counted 1-24, as moment's `k` token does
fn hour_from_one(hour: u32) -> u32 {
    if hour == 0 {
        24
    } else {
        hour
    }
}

fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}
