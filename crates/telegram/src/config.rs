//! Bot settings loaded from the environment

use links::PlayerRewrites;

use crate::constants::{DEFAULT_CREDIT, DEFAULT_MAX_CONCURRENT_JOBS, DEFAULT_MAX_TXT_FILE_MB};
use crate::error::{BotError, BotResult};

/// Runtime settings for the bot
#[derive(Clone, Debug)]
pub struct Settings {
    /// Telegram bot token
    pub bot_token: String,
    /// Owner user ID, always authorized
    pub owner: Option<u64>,
    /// Users allowed to run conversions; empty means everyone
    pub auth_users: Vec<u64>,
    /// Credit line shown in document captions
    pub credit: String,
    /// Player rewrite rules for known video hosts
    pub rewrites: PlayerRewrites,
    /// Size of the conversion gate
    pub max_concurrent_jobs: usize,
    /// Largest accepted .txt upload in bytes
    pub max_txt_bytes: u32,
}

impl Settings {
    /// Load settings from process environment variables
    ///
    /// # Errors
    /// Returns an error if the bot token is missing or a value is malformed
    pub fn from_env() -> BotResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> BotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bot_token = get("BOT_TOKEN")
            .or_else(|| get("TELOXIDE_TOKEN"))
            .ok_or_else(|| BotError::Config("BOT_TOKEN must be set, e.g. in the .env file".to_string()))?;

        let owner = get("OWNER").map(|v| parse_user_id("OWNER", &v)).transpose()?;

        let mut auth_users = match get("AUTH_USERS") {
            Some(list) => parse_user_ids(&list)?,
            None => Vec::new(),
        };
        if let Some(owner) = owner {
            if !auth_users.is_empty() && !auth_users.contains(&owner) {
                auth_users.push(owner);
            }
        }

        let credit = get("CREDIT").unwrap_or_else(|| DEFAULT_CREDIT.to_string());

        // An explicitly empty PLAYER_REWRITES turns the built-in rules off
        let player_token = get("PLAYER_TOKEN").unwrap_or_default();
        let rewrites = match lookup("PLAYER_REWRITES") {
            Some(rules) => PlayerRewrites::parse(&rules, player_token)?,
            None => PlayerRewrites::builtin(player_token),
        };

        let max_concurrent_jobs = match get("MAX_CONCURRENT_JOBS") {
            Some(v) => parse_positive::<usize>("MAX_CONCURRENT_JOBS", &v)?,
            None => DEFAULT_MAX_CONCURRENT_JOBS,
        };

        let max_txt_mb = match get("MAX_TXT_FILE_MB") {
            Some(v) => parse_positive::<u32>("MAX_TXT_FILE_MB", &v)?,
            None => DEFAULT_MAX_TXT_FILE_MB,
        };
        let max_txt_bytes = max_txt_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| BotError::Config(format!("MAX_TXT_FILE_MB is too large: {}", max_txt_mb)))?;

        Ok(Self {
            bot_token,
            owner,
            auth_users,
            credit,
            rewrites,
            max_concurrent_jobs,
            max_txt_bytes,
        })
    }

    /// Check whether a user may run conversions
    pub fn is_authorized(&self, user_id: u64) -> bool {
        if self.owner == Some(user_id) {
            return true;
        }
        self.auth_users.is_empty() || self.auth_users.contains(&user_id)
    }

    /// Upload cap in whole megabytes, for user-facing messages
    pub fn max_txt_mb(&self) -> u32 {
        self.max_txt_bytes / (1024 * 1024)
    }
}

fn parse_user_id(key: &str, value: &str) -> BotResult<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| BotError::Config(format!("{} must be a numeric user ID, got `{}`", key, value)))
}

/// Parse a comma-separated list of user IDs, ignoring blank entries
pub fn parse_user_ids(list: &str) -> BotResult<Vec<u64>> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| parse_user_id("AUTH_USERS", id))
        .collect()
}

fn parse_positive<T>(key: &str, value: &str) -> BotResult<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match value.parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(BotError::Config(format!("{} must be a positive number, got `{}`", key, value))),
    }
}
