use super::limits::DEFAULT_CADENCE_MS;
use engine::ElapsedPolicy;
use serde::Deserialize;
use std::time::Duration;

/// Countdown engine settings
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CountdownConfig {
    cadence_ms: Option<u64>,
    elapsed_policy: Option<ElapsedPolicy>,
}

impl CountdownConfig {
    pub fn cadence_ms(&self) -> u64 {
        self.cadence_ms.unwrap_or(DEFAULT_CADENCE_MS)
    }

    pub fn cadence(&self) -> Duration {
        Duration::from_millis(self.cadence_ms())
    }

    pub fn elapsed_policy(&self) -> ElapsedPolicy {
        self.elapsed_policy.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_one_second_freeze() {
        let config = CountdownConfig::default();
        assert_eq!(config.cadence(), Duration::from_secs(1));
        assert_eq!(config.elapsed_policy(), ElapsedPolicy::Freeze);
    }

    #[test]
    fn test_zero_policy_from_toml() {
        let config: CountdownConfig =
            toml::from_str("cadence_ms = 500\nelapsed_policy = 'zero'").expect("valid toml");
        assert_eq!(config.cadence_ms(), 500);
        assert_eq!(config.elapsed_policy(), ElapsedPolicy::Zero);
    }
}
