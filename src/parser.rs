use std::{fs::File, io::Read, path::Path};

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::{extra::Err, prelude::*};
use log::debug;
use thiserror::Error;

use crate::{
    fixture::MatchFormat,
    team::{Player, PlayerRole, Team},
};

/// everything a fixture file declares: both rosters and the match
/// formats to run, in file order.
#[derive(Debug)]
pub struct FixtureFile {
    pub teams: [Team; 2],
    pub formats: Vec<MatchFormat>,
}

/// a lexed token: a bare word or a non-negative integer.
#[derive(Debug, PartialEq, Eq, Clone)]
enum Token {
    Word(String),
    Num(u32),
}

type Spanned = (Token, SimpleSpan);

/// a function which returns the token lexer. should be used as
/// tokens().parse(). every maximal run of non-whitespace characters
/// is one token; all-digit runs must fit in a u32.
fn tokens<'a>() -> impl Parser<'a, &'a str, Vec<Spanned>, Err<Rich<'a, char>>> {
    let token = any()
        .filter(|c: &char| !c.is_whitespace())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|raw: String, span| {
            if raw.chars().all(|c| c.is_ascii_digit()) {
                raw.parse::<u32>()
                    .map(Token::Num)
                    .map_err(|e| Rich::custom(span, format!("invalid number: {}", e)))
            } else {
                Ok(Token::Word(raw))
            }
        });

    token
        .map_with(|token, extra| (token, extra.span()))
        .padded()
        .repeated()
        .collect::<Vec<_>>()
}

/// a structural problem found while assembling tokens into rosters.
/// the span points at the offending token, or past the final byte
/// when the file ends too early.
struct AssemblyError {
    message: String,
    span: SimpleSpan,
}

/// walks the lexed tokens in file order.
struct Cursor<'a> {
    tokens: &'a [Spanned],
    position: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Spanned], source_len: usize) -> Self {
        Self {
            tokens,
            position: 0,
            end: source_len,
        }
    }

    fn next(&mut self) -> Option<&'a Spanned> {
        let spanned = self.tokens.get(self.position);
        if spanned.is_some() {
            self.position += 1;
        }
        spanned
    }

    /// the next token as raw text, whatever its shape.
    fn text(&mut self, expected: &str) -> Result<String, AssemblyError> {
        match self.next() {
            Some((Token::Word(word), _)) => Ok(word.clone()),
            Some((Token::Num(number), _)) => Ok(number.to_string()),
            None => Err(self.unexpected_end(expected)),
        }
    }

    fn number(&mut self, expected: &str) -> Result<u32, AssemblyError> {
        match self.next() {
            Some((Token::Num(number), _)) => Ok(*number),
            Some((Token::Word(word), span)) => Err(AssemblyError {
                message: format!("expected {}, found `{}`", expected, word),
                span: *span,
            }),
            None => Err(self.unexpected_end(expected)),
        }
    }

    fn unexpected_end(&self, expected: &str) -> AssemblyError {
        AssemblyError {
            message: format!("expected {}, found end of input", expected),
            span: (self.end..self.end).into(),
        }
    }
}

/// reads one team header and its player block. the declared count
/// decides how many triples are consumed; a triple with an unknown
/// role is consumed without adding a player.
fn roster(cursor: &mut Cursor) -> Result<Team, AssemblyError> {
    let name = cursor.text("a team name")?;
    let declared = cursor.number("a player count")?;

    let mut team = Team::new(&name);
    for _ in 0..declared {
        let role_token = cursor.text("a player role")?;
        let player_name = cursor.text("a player name")?;
        let age = cursor.number("a player age")?;

        match PlayerRole::from_token(&role_token) {
            Some(role) => team.add_player(Player::new(role, &player_name, age)),
            None => debug!("skipping `{}`: unknown role `{}`", player_name, role_token),
        }
    }

    Ok(team)
}

/// reads match-format tokens until the input runs out. an unknown
/// token is consumed and ignored; running out is not an error.
fn match_sequence(cursor: &mut Cursor) -> Vec<MatchFormat> {
    let mut formats = Vec::new();
    while let Some((token, _)) = cursor.next() {
        let raw = match token {
            Token::Word(word) => word.clone(),
            Token::Num(number) => number.to_string(),
        };

        match MatchFormat::from_token(&raw) {
            Some(format) => formats.push(format),
            None => debug!("skipping unknown match token `{}`", raw),
        }
    }
    formats
}

/// parses fixture text already in memory. errors come back as
/// message/span pairs for the caller to report.
fn parse_fixture(source: &str) -> Result<FixtureFile, Vec<(String, SimpleSpan)>> {
    let parse_result = tokens().parse(source);
    let Some(lexed) = parse_result.output() else {
        return Err(parse_result
            .errors()
            .map(|error| (error.to_string(), *error.span()))
            .collect());
    };

    let mut cursor = Cursor::new(lexed, source.len());
    let first = roster(&mut cursor).map_err(|error| vec![(error.message, error.span)])?;
    let second = roster(&mut cursor).map_err(|error| vec![(error.message, error.span)])?;
    let formats = match_sequence(&mut cursor);

    Ok(FixtureFile {
        teams: [first, second],
        formats,
    })
}

pub fn parse_fixture_file(path: &Path) -> Result<FixtureFile, FixtureParseError> {
    let file_name = path.display().to_string();

    let mut file =
        File::open(path).map_err(|_| FixtureParseError::CannotOpen(file_name.clone()))?;
    let mut buffer = String::new();
    file.read_to_string(&mut buffer)
        .map_err(|_| FixtureParseError::BadFile)?;

    parse_fixture(&buffer).map_err(|errors| {
        for (message, span) in errors {
            let span = span.start()..span.end();
            let _ = Report::build(ReportKind::Error, (file_name.as_str(), span.clone()))
                .with_message(&message)
                .with_label(
                    Label::new((file_name.as_str(), span))
                        .with_color(Color::Red)
                        .with_message("parsing failed here"),
                )
                .finish()
                .eprint((file_name.as_str(), Source::from(buffer.clone())));
        }
        FixtureParseError::CannotParse
    })
}

/// represents anything that can go wrong while reading a fixture
/// file. unknown role and match tokens are not errors.
#[derive(Error, Debug)]
pub enum FixtureParseError {
    #[error("unable to open `{0}`")]
    CannotOpen(String),

    #[error("file is not valid UTF-8")]
    BadFile,

    #[error("invalid fixture file")]
    CannotParse,
}

#[cfg(test)]
mod test {
    use chumsky::Parser;

    use crate::{fixture::MatchFormat, team::PlayerRole};

    use super::{Token, parse_fixture, tokens};

    const FIXTURE: &str = "\
Lions 2
Batsman Sam 25
Bowler Lee 30
Tigers 1
AllRounder Ben 28
Test ODI T20
";

    #[test]
    fn lexes_words_and_numbers() {
        let lexed = tokens().parse("Lions 2\nBatsman Sam 25").unwrap();
        let kinds: Vec<Token> = lexed.into_iter().map(|(token, _)| token).collect();
        assert_eq!(
            kinds,
            vec![
                Token::Word("Lions".to_string()),
                Token::Num(2),
                Token::Word("Batsman".to_string()),
                Token::Word("Sam".to_string()),
                Token::Num(25),
            ]
        );
    }

    #[test]
    fn rejects_numbers_that_do_not_fit() {
        assert!(tokens().parse("99999999999999999999").has_errors());
    }

    #[test]
    fn parses_a_full_fixture_file() {
        let file = parse_fixture(FIXTURE).unwrap();

        assert_eq!(file.teams[0].name(), "Lions");
        assert_eq!(file.teams[0].players().len(), 2);
        assert_eq!(file.teams[1].name(), "Tigers");
        assert_eq!(file.teams[1].players()[0].role(), PlayerRole::AllRounder);
        assert_eq!(
            file.formats,
            vec![MatchFormat::Test, MatchFormat::Odi, MatchFormat::T20]
        );
    }

    #[test]
    fn unknown_roles_shrink_the_roster() {
        let source = "Lions 3\nBatsman Sam 25\nWicketKeeper Jo 27\nBowler Lee 30\nTigers 0\n";
        let file = parse_fixture(source).unwrap();

        let names: Vec<&str> = file.teams[0]
            .players()
            .iter()
            .map(|player| player.name())
            .collect();
        assert_eq!(names, vec!["Sam", "Lee"]);
        assert!(file.teams[1].players().is_empty());
        assert!(file.formats.is_empty());
    }

    #[test]
    fn unknown_match_tokens_are_ignored() {
        let source = "Lions 0\nTigers 0\nTest Friendly ODI 7 T20\n";
        let file = parse_fixture(source).unwrap();
        assert_eq!(
            file.formats,
            vec![MatchFormat::Test, MatchFormat::Odi, MatchFormat::T20]
        );
    }

    #[test]
    fn a_file_with_no_match_tokens_is_valid() {
        let file = parse_fixture("Lions 0\nTigers 0\n").unwrap();
        assert!(file.formats.is_empty());
    }

    #[test]
    fn rejects_a_truncated_roster() {
        assert!(parse_fixture("Lions 2\nBatsman Sam 25\n").is_err());
        assert!(parse_fixture("Lions 0\n").is_err());
        assert!(parse_fixture("").is_err());
    }

    #[test]
    fn rejects_a_non_numeric_age() {
        let errors = parse_fixture("Lions 1\nBatsman Sam young\nTigers 0\n").unwrap_err();
        assert!(errors[0].0.contains("a player age"));
    }
}
