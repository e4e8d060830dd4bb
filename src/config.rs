use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ClientError;
use crate::models::PlayerId;

/// When the ability effect of a moved piece fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbilityTrigger {
    /// As soon as the proposal is sent, whether or not the authority accepts it
    #[default]
    Proposal,
    /// Only once the authority acknowledges the move with `ok`
    Acknowledgement,
}

impl FromStr for AbilityTrigger {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "proposal" => Ok(AbilityTrigger::Proposal),
            "acknowledgement" | "ack" => Ok(AbilityTrigger::Acknowledgement),
            other => Err(ClientError::Config {
                message: format!("unknown ability trigger '{}'", other),
            }),
        }
    }
}

/// Client settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Join as this player right away
    pub player: Option<PlayerId>,
    pub animation: Duration,
    pub ability_duration: Duration,
    pub ability_trigger: AbilityTrigger,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            player: None,
            animation: Duration::from_millis(350),
            ability_duration: Duration::from_millis(2500),
            ability_trigger: AbilityTrigger::default(),
        }
    }
}

impl ClientConfig {
    /// Read settings from `ELIXIR_*` environment variables
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        if let Some(player) = lookup("ELIXIR_PLAYER") {
            config.player = Some(player.parse().map_err(|_| ClientError::Config {
                message: format!("ELIXIR_PLAYER must be 1 or 2, got '{}'", player),
            })?);
        }
        if let Some(ms) = lookup("ELIXIR_ANIMATION_MS") {
            config.animation = parse_millis("ELIXIR_ANIMATION_MS", &ms)?;
        }
        if let Some(ms) = lookup("ELIXIR_ABILITY_MS") {
            config.ability_duration = parse_millis("ELIXIR_ABILITY_MS", &ms)?;
        }
        if let Some(trigger) = lookup("ELIXIR_ABILITY_TRIGGER") {
            config.ability_trigger = trigger.parse()?;
        }

        Ok(config)
    }
}

fn parse_millis(key: &str, value: &str) -> Result<Duration, ClientError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ClientError::Config {
            message: format!("{} must be a number of milliseconds: {}", key, e),
        })
}
