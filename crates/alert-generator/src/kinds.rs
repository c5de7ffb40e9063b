use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of transient event an alert reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "GRB")]
    GammaRayBurst,
    #[serde(rename = "Apparent Brightness Rise")]
    ApparentBrightnessRise,
    #[serde(rename = "UV Rise")]
    UvRise,
    #[serde(rename = "X-Ray Rise")]
    XRayRise,
    #[serde(rename = "Comet")]
    Comet,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::GammaRayBurst,
        EventKind::ApparentBrightnessRise,
        EventKind::UvRise,
        EventKind::XRayRise,
        EventKind::Comet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::GammaRayBurst => "GRB",
            EventKind::ApparentBrightnessRise => "Apparent Brightness Rise",
            EventKind::UvRise => "UV Rise",
            EventKind::XRayRise => "X-Ray Rise",
            EventKind::Comet => "Comet",
        }
    }

    /// Pick one kind uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observatory credited as the source of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    #[serde(rename = "MMT")]
    Mmt,
    #[serde(rename = "Gemini Observatory Telescopes")]
    Gemini,
    #[serde(rename = "Very Large Telescope")]
    VeryLargeTelescope,
    #[serde(rename = "Subaru Telescope")]
    Subaru,
    #[serde(rename = "Large Binocular Telescope")]
    LargeBinocular,
    #[serde(rename = "Southern African Large Telescope")]
    SouthernAfricanLarge,
    #[serde(rename = "Keck 1 and 2")]
    Keck,
    #[serde(rename = "Hobby-Eberly Telescope")]
    HobbyEberly,
    #[serde(rename = "Gran Telescopio Canarias")]
    GranTelescopioCanarias,
    #[serde(rename = "The Giant Magellan Telescope")]
    GiantMagellan,
    #[serde(rename = "Thirty Meter Telescope")]
    ThirtyMeter,
    #[serde(rename = "European Extremely Large Telescope")]
    EuropeanExtremelyLarge,
}

impl SourceKind {
    pub const ALL: [SourceKind; 12] = [
        SourceKind::Mmt,
        SourceKind::Gemini,
        SourceKind::VeryLargeTelescope,
        SourceKind::Subaru,
        SourceKind::LargeBinocular,
        SourceKind::SouthernAfricanLarge,
        SourceKind::Keck,
        SourceKind::HobbyEberly,
        SourceKind::GranTelescopioCanarias,
        SourceKind::GiantMagellan,
        SourceKind::ThirtyMeter,
        SourceKind::EuropeanExtremelyLarge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Mmt => "MMT",
            SourceKind::Gemini => "Gemini Observatory Telescopes",
            SourceKind::VeryLargeTelescope => "Very Large Telescope",
            SourceKind::Subaru => "Subaru Telescope",
            SourceKind::LargeBinocular => "Large Binocular Telescope",
            SourceKind::SouthernAfricanLarge => "Southern African Large Telescope",
            SourceKind::Keck => "Keck 1 and 2",
            SourceKind::HobbyEberly => "Hobby-Eberly Telescope",
            SourceKind::GranTelescopioCanarias => "Gran Telescopio Canarias",
            SourceKind::GiantMagellan => "The Giant Magellan Telescope",
            SourceKind::ThirtyMeter => "Thirty Meter Telescope",
            SourceKind::EuropeanExtremelyLarge => "European Extremely Large Telescope",
        }
    }

    /// Pick one source uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
