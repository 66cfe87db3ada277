//! Reminder message logic
//!
//! Computes which plant is due for watering soonest and formats the banner
//! message with a human-readable relative time.

use chrono::{DateTime, Utc};

use crate::storage::Plant;

/// Locale for relative-time phrases and the reminder message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    /// Parse a locale string from config ("en", "pt"); unknown values fall
    /// back to English.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pt" | "pt-br" => Locale::Pt,
            _ => Locale::En,
        }
    }
}

/// The plant whose watering reminder fires soonest.
///
/// The store does not guarantee any ordering, so the head of the list cannot
/// be trusted to be the next one due - pick the minimum notification time
/// explicitly.
pub fn next_due(plants: &[Plant]) -> Option<&Plant> {
    plants.iter().min_by_key(|p| p.notification)
}

/// Format the distance between two instants as a rounded phrase
/// ("about 1 hour", "3 days", "less than a minute").
///
/// Thresholds follow the common calendar-distance convention: seconds round
/// away below a minute, minutes up to 45, "about N hours" under a day, days
/// under a month, then months and years.
pub fn format_distance(from: DateTime<Utc>, to: DateTime<Utc>, locale: Locale) -> String {
    let seconds = (to - from).num_seconds().max(0);
    let minutes = (seconds as f64 / 60.0).round() as i64;

    match locale {
        Locale::En => match minutes {
            0 => "less than a minute".to_string(),
            1 => "1 minute".to_string(),
            2..=45 => format!("{} minutes", minutes),
            46..=90 => "about 1 hour".to_string(),
            _ if minutes < 60 * 24 => {
                format!("about {} hours", (minutes as f64 / 60.0).round() as i64)
            }
            _ if minutes < 60 * 24 * 30 => {
                let days = ((minutes as f64) / (60.0 * 24.0)).round().max(1.0) as i64;
                if days == 1 {
                    "1 day".to_string()
                } else {
                    format!("{} days", days)
                }
            }
            _ if minutes < 60 * 24 * 365 => {
                let months = ((minutes as f64) / (60.0 * 24.0 * 30.0)).round().max(1.0) as i64;
                if months == 1 {
                    "about 1 month".to_string()
                } else {
                    format!("about {} months", months)
                }
            }
            _ => {
                let years = ((minutes as f64) / (60.0 * 24.0 * 365.0)).round().max(1.0) as i64;
                if years == 1 {
                    "about 1 year".to_string()
                } else {
                    format!("about {} years", years)
                }
            }
        },
        Locale::Pt => match minutes {
            0 => "menos de um minuto".to_string(),
            1 => "1 minuto".to_string(),
            2..=45 => format!("{} minutos", minutes),
            46..=90 => "cerca de 1 hora".to_string(),
            _ if minutes < 60 * 24 => {
                format!("cerca de {} horas", (minutes as f64 / 60.0).round() as i64)
            }
            _ if minutes < 60 * 24 * 30 => {
                let days = ((minutes as f64) / (60.0 * 24.0)).round().max(1.0) as i64;
                if days == 1 {
                    "1 dia".to_string()
                } else {
                    format!("{} dias", days)
                }
            }
            _ if minutes < 60 * 24 * 365 => {
                let months = ((minutes as f64) / (60.0 * 24.0 * 30.0)).round().max(1.0) as i64;
                if months == 1 {
                    "cerca de 1 mês".to_string()
                } else {
                    format!("cerca de {} meses", months)
                }
            }
            _ => {
                let years = ((minutes as f64) / (60.0 * 24.0 * 365.0)).round().max(1.0) as i64;
                if years == 1 {
                    "cerca de 1 ano".to_string()
                } else {
                    format!("cerca de {} anos", years)
                }
            }
        },
    }
}

/// Build the banner message for the plant due soonest, or None for an
/// empty list.
pub fn build_reminder(plants: &[Plant], now: DateTime<Utc>, locale: Locale) -> Option<String> {
    let plant = next_due(plants)?;

    let message = if plant.notification <= now {
        match locale {
            Locale::En => format!("Don't forget to water {} now.", plant.name),
            Locale::Pt => format!("Não esqueça de regar a {} agora.", plant.name),
        }
    } else {
        let distance = format_distance(now, plant.notification, locale);
        match locale {
            Locale::En => format!("Don't forget to water {} in {}.", plant.name, distance),
            Locale::Pt => format!("Não esqueça de regar a {} daqui a {}.", plant.name, distance),
        }
    };

    Some(message)
}
