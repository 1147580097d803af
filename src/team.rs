/// the three roles a roster line can declare. roles only differ in
/// the label their profile line leads with.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlayerRole {
    Batsman,
    Bowler,
    AllRounder,
}

impl PlayerRole {
    /// maps a roster token to a role. matching is exact and
    /// case-sensitive; any other token is no role at all.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Batsman" => Some(Self::Batsman),
            "Bowler" => Some(Self::Bowler),
            "AllRounder" => Some(Self::AllRounder),
            _ => None,
        }
    }

    /// the label a profile line leads with. all-rounders print with
    /// a hyphen, unlike their roster token.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Batsman => "Batsman",
            Self::Bowler => "Bowler",
            Self::AllRounder => "All-Rounder",
        }
    }
}

#[derive(Debug)]
pub struct Player {
    role: PlayerRole,
    name: String,
    age: u32,
}

impl Player {
    pub fn new(role: PlayerRole, name: &str, age: u32) -> Self {
        Self {
            role,
            name: name.to_string(),
            age,
        }
    }

    /// for inspecting parse results in tests
    #[allow(dead_code)]
    pub fn role(&self) -> PlayerRole {
        self.role
    }

    #[allow(dead_code)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// one profile line: `<label>: <name>, Age: <age>`. only printed
    /// when a team sheet is shown, never during a match.
    #[allow(dead_code)]
    pub fn describe(&self) -> String {
        format!("{}: {}, Age: {}", self.role.label(), self.name, self.age)
    }
}

/// umpires stand outside both teams and carry no age on record.
/// never built from the fixture file, but kept available.
#[allow(dead_code)]
pub struct Umpire {
    name: String,
}

#[allow(dead_code)]
impl Umpire {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn describe(&self) -> String {
        format!("Umpire: {}", self.name)
    }
}

#[derive(Debug)]
pub struct Team {
    name: String,
    players: Vec<Player>,
}

impl Team {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            players: Vec::new(),
        }
    }

    /// appends a player to the roster. the roster is only ever
    /// extended while the fixture file is being read.
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(dead_code)]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// prints the team sheet: the team name, then every player's
    /// profile line in roster order, then a blank line. not part of
    /// the match flow.
    #[allow(dead_code)]
    pub fn show_team(&self) {
        println!("Team: {}", self.name);
        println!("Players:");
        for player in &self.players {
            println!("{}", player.describe());
        }
        println!();
    }
}

/// handle to a team held by the registry. fixtures carry these
/// instead of borrowing the teams themselves.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TeamId(usize);

/// owns every team built at startup. the registry is append-only
/// and lives for the rest of the process, so a handle it issued
/// never dangles.
pub struct TeamRegistry {
    teams: Vec<Team>,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self { teams: Vec::new() }
    }

    pub fn register(&mut self, team: Team) -> TeamId {
        self.teams.push(team);
        TeamId(self.teams.len() - 1)
    }

    pub fn team(&self, id: TeamId) -> &Team {
        self.teams
            .get(id.0)
            .expect("team handles are only issued by register")
    }
}
