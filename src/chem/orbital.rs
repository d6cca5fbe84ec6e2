use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Subshell letter of an orbital, which fixes its electron capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subshell {
    S,
    P,
    D,
    F,
}

impl Subshell {
    pub const fn capacity(self) -> u8 {
        match self {
            Subshell::S => 2,
            Subshell::P => 6,
            Subshell::D => 10,
            Subshell::F => 14,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Subshell::S => 's',
            Subshell::P => 'p',
            Subshell::D => 'd',
            Subshell::F => 'f',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            's' => Some(Subshell::S),
            'p' => Some(Subshell::P),
            'd' => Some(Subshell::D),
            'f' => Some(Subshell::F),
            _ => None,
        }
    }
}

impl fmt::Display for Subshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A principal-quantum-number + subshell pair such as `3d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orbital {
    pub n: u8,
    pub subshell: Subshell,
}

impl Orbital {
    pub const fn new(n: u8, subshell: Subshell) -> Self {
        Self { n, subshell }
    }

    pub const fn capacity(self) -> u8 {
        self.subshell.capacity()
    }
}

impl fmt::Display for Orbital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.n, self.subshell)
    }
}

/// Failure to parse an orbital label such as `"3d"`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseOrbitalError {
    #[error("orbital label must be a shell digit followed by a subshell letter, got {0:?}")]
    Malformed(String),
    #[error("principal quantum number must be 1-7, got {0}")]
    ShellOutOfRange(u8),
    #[error("unknown subshell letter {0:?}")]
    UnknownSubshell(char),
}

impl FromStr for Orbital {
    type Err = ParseOrbitalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(digit), Some(letter), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseOrbitalError::Malformed(s.to_string()));
        };
        let n = digit
            .to_digit(10)
            .ok_or_else(|| ParseOrbitalError::Malformed(s.to_string()))? as u8;
        if n < 1 || n > 7 {
            return Err(ParseOrbitalError::ShellOutOfRange(n));
        }
        let subshell =
            Subshell::from_letter(letter).ok_or(ParseOrbitalError::UnknownSubshell(letter))?;
        Ok(Self { n, subshell })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_labels() {
        assert_eq!("1s".parse(), Ok(Orbital::new(1, Subshell::S)));
        assert_eq!("3d".parse(), Ok(Orbital::new(3, Subshell::D)));
        assert_eq!("4f".parse(), Ok(Orbital::new(4, Subshell::F)));
    }

    #[test]
    fn display_round_trips() {
        for label in ["1s", "2p", "5f", "7p"] {
            let orbital: Orbital = label.parse().unwrap();
            assert_eq!(orbital.to_string(), label);
        }
    }

    #[test]
    fn rejects_malformed_labels() {
        assert_eq!(
            "3".parse::<Orbital>(),
            Err(ParseOrbitalError::Malformed("3".to_string()))
        );
        assert_eq!(
            "3dx".parse::<Orbital>(),
            Err(ParseOrbitalError::Malformed("3dx".to_string()))
        );
        assert_eq!(
            "ds".parse::<Orbital>(),
            Err(ParseOrbitalError::Malformed("ds".to_string()))
        );
        assert_eq!(
            "0s".parse::<Orbital>(),
            Err(ParseOrbitalError::ShellOutOfRange(0))
        );
        assert_eq!(
            "8s".parse::<Orbital>(),
            Err(ParseOrbitalError::ShellOutOfRange(8))
        );
        assert_eq!(
            "3g".parse::<Orbital>(),
            Err(ParseOrbitalError::UnknownSubshell('g'))
        );
    }

    #[test]
    fn capacities_follow_subshell() {
        assert_eq!(Orbital::new(1, Subshell::S).capacity(), 2);
        assert_eq!(Orbital::new(2, Subshell::P).capacity(), 6);
        assert_eq!(Orbital::new(3, Subshell::D).capacity(), 10);
        assert_eq!(Orbital::new(4, Subshell::F).capacity(), 14);
    }
}
