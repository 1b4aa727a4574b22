use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether diagnostic printing was compiled in (`verbose` cargo feature).
pub const VERBOSE_BUILD: bool = cfg!(feature = "verbose");

/// Target the course code is built for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Desktop build with a standard output.
    #[default]
    Host,
    /// MSP432 launchpad; no console, printing compiles to nothing.
    Msp432,
}

impl Platform {
    pub fn supports_printing(self) -> bool {
        matches!(self, Platform::Host)
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Host => "host",
            Platform::Msp432 => "msp432",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "host" => Ok(Platform::Host),
            "msp432" => Ok(Platform::Msp432),
            other => Err(format!("unknown platform '{other}' (expected host or msp432)")),
        }
    }
}

/// Diagnostic output is produced only for verbose builds running on the host
/// with verbosity switched on.
pub fn printing_enabled(platform: Platform, verbose: bool) -> bool {
    VERBOSE_BUILD && verbose && platform.supports_printing()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform() {
        assert_eq!("host".parse::<Platform>(), Ok(Platform::Host));
        assert_eq!("MSP432".parse::<Platform>(), Ok(Platform::Msp432));
        assert!("kl25z".parse::<Platform>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for platform in [Platform::Host, Platform::Msp432] {
            assert_eq!(platform.to_string().parse::<Platform>(), Ok(platform));
        }
    }

    #[test]
    fn test_target_board_never_prints() {
        assert!(!printing_enabled(Platform::Msp432, true));
        assert!(!printing_enabled(Platform::Host, false));
    }

    #[test]
    fn test_host_prints_when_verbose_build() {
        assert_eq!(printing_enabled(Platform::Host, true), VERBOSE_BUILD);
    }
}
