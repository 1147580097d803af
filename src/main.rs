use std::{path::Path, process::ExitCode};

use env_logger::Env;
use fixture::{Fixture, play};
use log::info;
use parser::parse_fixture_file;
use team::TeamRegistry;

mod fixture;
mod parser;
mod team;

/// the fixture file every run reads. there are no flags or
/// environment knobs pointing the program elsewhere.
const INPUT_PATH: &str = "input.txt";

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default()).init();

    let fixture_file = match parse_fixture_file(Path::new(INPUT_PATH)) {
        Ok(fixture_file) => fixture_file,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    let mut teams = TeamRegistry::new();
    let [first, second] = fixture_file.teams;
    let home = teams.register(first);
    let away = teams.register(second);
    info!(
        "rosters ready, {} match tokens recognized",
        fixture_file.formats.len()
    );

    for format in fixture_file.formats {
        let fixture = Fixture::new(format, home, away);
        if let Err(error) = play(Some(&fixture), &teams) {
            eprintln!("{}", error);
        }
    }

    ExitCode::SUCCESS
}
