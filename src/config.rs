use chrono::Duration;

use crate::error::{config::ConfigError, AppError};

/// Minimum guild membership age, in hours, required to claim when not configured.
const DEFAULT_MIN_MEMBER_AGE_HOURS: i64 = 48;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Members who joined the guild more recently than this cannot claim.
    pub min_member_age: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            min_member_age: Duration::hours(parse_min_member_age_hours(
                std::env::var("MIN_MEMBER_AGE_HOURS").ok(),
            )?),
        })
    }
}

fn parse_min_member_age_hours(value: Option<String>) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_MIN_MEMBER_AGE_HOURS);
    };

    match value.trim().parse::<i64>() {
        Ok(hours) if hours >= 0 => Ok(hours),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "MIN_MEMBER_AGE_HOURS".to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_age_defaults_to_two_days() {
        assert_eq!(parse_min_member_age_hours(None).unwrap(), 48);
    }

    #[test]
    fn member_age_accepts_zero() {
        assert_eq!(parse_min_member_age_hours(Some("0".to_string())).unwrap(), 0);
    }

    #[test]
    fn member_age_rejects_garbage() {
        let err = parse_min_member_age_hours(Some("two days".to_string())).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar { ref name, .. } if name == "MIN_MEMBER_AGE_HOURS"
        ));
    }

    #[test]
    fn member_age_rejects_negative() {
        assert!(parse_min_member_age_hours(Some("-3".to_string())).is_err());
    }
}
