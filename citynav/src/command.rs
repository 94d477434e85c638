//! Front end command line parsing.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// A single front end command.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// `add <cityA> <cityB> <distance>`, distance is validated by the session.
    Add { city_a: String, city_b: String, distance: String },

    /// `route <start> <end>`
    Route { start: String, end: String },

    Cities,
    Help,
    Quit,
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help' for the list of commands")]
    Unknown(String),

    #[error("Usage: {0}")]
    BadArguments(&'static str),

    #[error("Unpaired quotes")]
    UnpairedQuotes,

    #[error("Quotes must enclose a whole word")]
    MisplacedQuotes,
}

pub const USAGE: &'static str = "\
add <cityA> <cityB> <distance>   Add a connection between two cities
route <start> <end>              Find the shortest route
cities                           List known cities
help                             Show this help
quit                             Exit
City names with spaces must be quoted, e.g. add \"Nowa Huta\" Krakow 10
Quotes enclose a whole word only, names can't contain quotes";

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let words = split_words(line)?;
    let (name, args) = match words.split_first() {
        Some((name, args)) => (name.to_lowercase(), args),
        None => return Ok(None),
    };

    let cmd = match (name.as_str(), args) {
        ("add", [city_a, city_b, distance]) => Command::Add {
            city_a: city_a.clone(),
            city_b: city_b.clone(),
            distance: distance.clone(),
        },
        ("add", _) => return Err(CommandError::BadArguments("add <cityA> <cityB> <distance>")),
        ("route", [start, end]) => Command::Route {
            start: start.clone(),
            end: end.clone(),
        },
        ("route", _) => return Err(CommandError::BadArguments("route <start> <end>")),
        ("cities", []) => Command::Cities,
        ("help", _) => Command::Help,
        ("quit", []) | ("exit", []) => Command::Quit,
        ("cities", _) | ("quit", _) | ("exit", _) => return Err(CommandError::BadArguments("commands 'cities' and 'quit' take no arguments")),
        (other, _) => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(cmd))
}

fn split_words(s: &str) -> Result<Vec<String>, CommandError> {
    lazy_static! {
        // Either a double-quoted string (may contain spaces) or a run of non-space chars without quotes.
        static ref RE_WORD: Regex = Regex::new(r#""([^"]*)"|([^\s"]+)"#).expect("bad regex");
    }

    let mut words = Vec::new();
    let mut pos = 0;
    for caps in RE_WORD.captures_iter(s) {
        let m = caps.get(0).ok_or(CommandError::UnpairedQuotes)?;

        // Words must be separated by whitespace, anything else left between them is a stray quote
        let gap = &s[pos..m.start()];
        if !gap.chars().all(char::is_whitespace) {
            return Err(CommandError::UnpairedQuotes);
        }
        if gap.is_empty() && pos > 0 {
            return Err(CommandError::MisplacedQuotes);
        }

        let word = caps.get(1).or_else(|| caps.get(2)).map_or("", |w| w.as_str());
        words.push(word.to_string());
        pos = m.end();
    }

    if !s[pos..].chars().all(char::is_whitespace) {
        return Err(CommandError::UnpairedQuotes);
    }
    Ok(words)
}

#[test]
fn test_split_words() -> Result<(), CommandError> {
    let w = |words: &[&str]| words.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    assert_eq!(split_words("")?, w(&[]));
    assert_eq!(split_words("add A B 5")?, w(&["add", "A", "B", "5"]));
    assert_eq!(split_words("  add   A\tB 5 ")?, w(&["add", "A", "B", "5"]));
    assert_eq!(split_words(r#"add "Nowa Huta" Krakow 10"#)?, w(&["add", "Nowa Huta", "Krakow", "10"]));
    assert_eq!(split_words(r#"route "" B"#)?, w(&["route", "", "B"]));
    assert_eq!(split_words(r#"add "Nowa Huta Krakow 10"#), Err(CommandError::UnpairedQuotes));
    assert_eq!(split_words(r#"add Nowa"Huta Krakow 10"#), Err(CommandError::UnpairedQuotes));
    assert_eq!(split_words(r#"add A B 5""#), Err(CommandError::UnpairedQuotes));
    assert_eq!(split_words(r#"add "A"B 5"#), Err(CommandError::MisplacedQuotes));
    assert_eq!(split_words(r#"add A"B" 5"#), Err(CommandError::MisplacedQuotes));
    assert_eq!(split_words(r#"add "A""B" 5"#), Err(CommandError::MisplacedQuotes));
    assert_eq!(split_words(r#"add "A" "B" 5"#)?, w(&["add", "A", "B", "5"]));

    Ok(())
}

#[test]
fn test_parse_command() -> Result<(), CommandError> {
    let s = |s: &str| s.to_string();
    assert_eq!(parse_command("")?, None);
    assert_eq!(parse_command("   ")?, None);
    assert_eq!(parse_command("# a comment")?, None);
    assert_eq!(
        parse_command("add A B 5")?,
        Some(Command::Add {
            city_a: s("A"),
            city_b: s("B"),
            distance: s("5")
        })
    );
    assert_eq!(
        parse_command(r#"ADD "Nowa Huta" Krakow abc"#)?,
        Some(Command::Add {
            city_a: s("Nowa Huta"),
            city_b: s("Krakow"),
            distance: s("abc")
        })
    );
    assert_eq!(parse_command("route A C")?, Some(Command::Route { start: s("A"), end: s("C") }));
    assert_eq!(parse_command("cities")?, Some(Command::Cities));
    assert_eq!(parse_command("help")?, Some(Command::Help));
    assert_eq!(parse_command("quit")?, Some(Command::Quit));
    assert_eq!(parse_command("exit")?, Some(Command::Quit));

    assert_eq!(parse_command("add A B"), Err(CommandError::BadArguments("add <cityA> <cityB> <distance>")));
    assert_eq!(parse_command("route A"), Err(CommandError::BadArguments("route <start> <end>")));
    assert!(matches!(parse_command("cities A"), Err(CommandError::BadArguments(_))));
    assert_eq!(parse_command("fly A B"), Err(CommandError::Unknown(s("fly"))));
    assert_eq!(parse_command(r#"add "A"B 5"#), Err(CommandError::MisplacedQuotes));

    Ok(())
}
