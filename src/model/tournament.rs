use serde::{Deserialize, Serialize};
use std::fmt;

/// How a tournament pairs players each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingSystem {
    Arena,
    RoundRobin,
    Swiss,
}

impl PairingSystem {
    pub fn code(&self) -> i32 {
        match self {
            PairingSystem::Arena => 0,
            PairingSystem::RoundRobin => 1,
            PairingSystem::Swiss => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.code() == code)
    }

    pub fn all() -> [PairingSystem; 3] {
        [
            PairingSystem::Arena,
            PairingSystem::RoundRobin,
            PairingSystem::Swiss,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PairingSystem::Arena => "Arena",
            PairingSystem::RoundRobin => "Round-Robin",
            PairingSystem::Swiss => "Swiss",
        }
    }
}

impl fmt::Display for PairingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Display label for a raw pairing system code.
///
/// Unknown codes give an empty label rather than an error; this only feeds
/// rendering.
pub fn pairing_system_name(code: i32) -> &'static str {
    PairingSystem::from_code(code)
        .map(|p| p.display_name())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_system_names() {
        assert_eq!(pairing_system_name(0), "Arena");
        assert_eq!(pairing_system_name(1), "Round-Robin");
        assert_eq!(pairing_system_name(2), "Swiss");
        assert_eq!(pairing_system_name(99), "");
        assert_eq!(pairing_system_name(-1), "");
    }

    #[test]
    fn test_pairing_system_codes_round_trip() {
        for system in PairingSystem::all() {
            assert_eq!(PairingSystem::from_code(system.code()), Some(system));
        }
        assert_eq!(PairingSystem::Swiss.to_string(), "Swiss");
    }
}
