//! # Server settings
//!
//! Settings are read from the same [`EnvSnapshot`] that is served to clients. Empty variables are
//! treated as unset.

use std::{
    fmt,
    net::{AddrParseError, SocketAddr},
    str::FromStr,
};

use crate::{env::EnvSnapshot, vars};

mod defaults {
    pub const LISTEN_PORT: u16 = 3000;
}

/// # Diagnostic verbosity
///
/// Controls the per-request diagnostic report. Only [`Diagnostics::Expose`] makes anything
/// visible to clients, since the debug payload describes the server's environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Diagnostics {
    /// No diagnostic output.
    #[default]
    Off,
    /// Log a diagnostic report for every request.
    Log,
    /// Log the report and attach a `debug` object to config responses.
    Expose,
}

impl Diagnostics {
    /// Whether a diagnostic report is logged for each request.
    pub fn logs(self) -> bool {
        !matches!(self, Diagnostics::Off)
    }

    /// Whether config responses carry the `debug` object.
    pub fn exposes(self) -> bool {
        matches!(self, Diagnostics::Expose)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Diagnostics::Off => "off",
            Diagnostics::Log => "log",
            Diagnostics::Expose => "expose",
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected one of `off`, `log`, `expose`, got {0:?}")]
pub struct ParseDiagnosticsError(String);

impl FromStr for Diagnostics {
    type Err = ParseDiagnosticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "off" => Ok(Diagnostics::Off),
            "log" => Ok(Diagnostics::Log),
            "expose" => Ok(Diagnostics::Expose),
            _ => Err(ParseDiagnosticsError(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("environment variable {var} is not a valid socket address: {source}")]
    InvalidListenAddr {
        var: &'static str,
        #[source]
        source: AddrParseError,
    },

    #[error("environment variable {var} is invalid: {source}")]
    InvalidDiagnostics {
        var: &'static str,
        #[source]
        source: ParseDiagnosticsError,
    },
}

/// # Server settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Address the HTTP server binds to
    pub listen_addr: SocketAddr,
    pub diagnostics: Diagnostics,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], defaults::LISTEN_PORT)),
            diagnostics: Diagnostics::default(),
        }
    }
}

impl Settings {
    pub fn from_env(env: &EnvSnapshot) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        if let Some(addr) = env.get_non_empty(vars::LISTEN_ADDR) {
            settings.listen_addr = addr.parse().map_err(|source| {
                SettingsError::InvalidListenAddr {
                    var: vars::LISTEN_ADDR,
                    source,
                }
            })?;
        }
        if let Some(level) = env.get_non_empty(vars::DIAGNOSTICS) {
            settings.diagnostics = level.parse().map_err(|source| {
                SettingsError::InvalidDiagnostics {
                    var: vars::DIAGNOSTICS,
                    source,
                }
            })?;
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_env(&EnvSnapshot::default()).unwrap();
        assert_eq!(settings.listen_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(settings.diagnostics, Diagnostics::Off);
        assert!(!settings.diagnostics.logs());
        assert!(!settings.diagnostics.exposes());
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let env = EnvSnapshot::from_iter([(vars::LISTEN_ADDR, ""), (vars::DIAGNOSTICS, "")]);
        assert_eq!(Settings::from_env(&env).unwrap(), Settings::default());
    }

    #[test]
    fn test_reads_overrides() {
        let env = EnvSnapshot::from_iter([
            (vars::LISTEN_ADDR, "127.0.0.1:8080"),
            (vars::DIAGNOSTICS, "Expose"),
        ]);
        let settings = Settings::from_env(&env).unwrap();
        assert_eq!(settings.listen_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(settings.diagnostics, Diagnostics::Expose);
        assert!(settings.diagnostics.logs());
        assert!(settings.diagnostics.exposes());
    }

    #[test]
    fn test_invalid_listen_addr() {
        let env = EnvSnapshot::from_iter([(vars::LISTEN_ADDR, "localhost")]);
        let err = Settings::from_env(&env).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::InvalidListenAddr {
                var: vars::LISTEN_ADDR,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_diagnostics() {
        let env = EnvSnapshot::from_iter([(vars::DIAGNOSTICS, "verbose")]);
        let err = Settings::from_env(&env).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidDiagnostics { .. }));
        assert!(err.to_string().contains(vars::DIAGNOSTICS));
    }

    #[test]
    fn test_diagnostics_round_trips_through_display() {
        for level in [Diagnostics::Off, Diagnostics::Log, Diagnostics::Expose] {
            assert_eq!(level.to_string().parse::<Diagnostics>(), Ok(level));
        }
        assert_eq!("LOG".parse::<Diagnostics>(), Ok(Diagnostics::Log));
    }
}
