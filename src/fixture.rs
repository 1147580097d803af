use thiserror::Error;

use crate::team::{TeamId, TeamRegistry};

/// the three match formats a fixture token can name.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MatchFormat {
    Test,
    Odi,
    T20,
}

impl MatchFormat {
    /// maps a trailing-section token to a format. matching is exact
    /// and case-sensitive; any other token is no format at all.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Test" => Some(Self::Test),
            "ODI" => Some(Self::Odi),
            "T20" => Some(Self::T20),
            _ => None,
        }
    }

    /// the line announcing that a match of this format has started.
    pub fn banner(&self) -> &'static str {
        match self {
            Self::Test => "Test Match Started!",
            Self::Odi => "ODI Match Started!",
            Self::T20 => "T20 Match Started!",
        }
    }

    /// the fixed playing-conditions line for this format.
    pub fn conditions(&self) -> &'static str {
        match self {
            Self::Test => "Playing conditions: 5 days match",
            Self::Odi => "Playing conditions: 50 overs per side",
            Self::T20 => "Playing conditions: 20 overs per side",
        }
    }
}

/// one scheduled match between two registered teams. built per
/// recognized fixture token and dropped right after it starts.
pub struct Fixture {
    format: MatchFormat,
    home: TeamId,
    away: TeamId,
}

impl Fixture {
    pub fn new(format: MatchFormat, home: TeamId, away: TeamId) -> Self {
        Self { format, home, away }
    }

    /// the full three-line start block, without printing it.
    pub fn banner(&self, teams: &TeamRegistry) -> String {
        format!(
            "{}\n{} vs. {}\n{}",
            self.format.banner(),
            teams.team(self.home).name(),
            teams.team(self.away).name(),
            self.format.conditions(),
        )
    }

    /// announces the match on stdout. each fixture is started at
    /// most once; the driving loop drops it afterwards.
    pub fn start(&self, teams: &TeamRegistry) {
        println!("{}", self.banner(teams));
    }
}

/// starts the given fixture. a missing fixture is an error rather
/// than a panic; with a fixture in hand this cannot fail.
pub fn play(fixture: Option<&Fixture>, teams: &TeamRegistry) -> Result<(), PlayError> {
    let fixture = fixture.ok_or(PlayError::MissingFixture)?;
    fixture.start(teams);
    Ok(())
}

/// represents anything that can go wrong when dispatching a fixture.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlayError {
    #[error("no fixture to play")]
    MissingFixture,
}
