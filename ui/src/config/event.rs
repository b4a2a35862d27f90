use engine::TargetInstant;
use serde::Deserialize;

/// The event being announced
#[derive(Debug, Deserialize, Default, Clone)]
pub struct EventConfig {
    couple: Option<String>,
    headline: Option<String>,
    target: Option<String>,
    #[serde(default)]
    labels: UnitLabels,
}

impl EventConfig {
    pub fn couple(&self) -> &str {
        self.couple.as_deref().unwrap_or("ALEXA & MARCO")
    }

    pub fn headline(&self) -> &str {
        self.headline.as_deref().unwrap_or("SAVE THE DATE")
    }

    /// Raw target string as configured
    pub fn target_raw(&self) -> &str {
        self.target.as_deref().unwrap_or("2025-03-24T18:00:00")
    }

    /// Target interpreted in the local timezone
    pub fn target(&self) -> Result<TargetInstant, engine::CountdownError> {
        TargetInstant::parse_local(self.target_raw())
    }

    pub fn labels(&self) -> &UnitLabels {
        &self.labels
    }
}

/// Captions under the four countdown units
#[derive(Debug, Deserialize, Default, Clone)]
pub struct UnitLabels {
    days: Option<String>,
    hours: Option<String>,
    minutes: Option<String>,
    seconds: Option<String>,
}

impl UnitLabels {
    pub fn days(&self) -> &str {
        self.days.as_deref().unwrap_or("Días")
    }

    pub fn hours(&self) -> &str {
        self.hours.as_deref().unwrap_or("Horas")
    }

    pub fn minutes(&self) -> &str {
        self.minutes.as_deref().unwrap_or("Minutos")
    }

    pub fn seconds(&self) -> &str {
        self.seconds.as_deref().unwrap_or("Segundos")
    }

    /// Labels in display order
    pub fn all(&self) -> [&str; 4] {
        [self.days(), self.hours(), self.minutes(), self.seconds()]
    }
}
