//! City navigator terminal front end

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Error};
use clap::Parser;
use log::info;

use citynav::{parse_command, Command, Navigator, Opts, Route, RouteQuery, Settings, USAGE};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args: Args = Args::parse();
    let mut settings = Opts::load(args.config.as_deref())?;
    if args.json {
        settings.json = true;
    }
    info!("{}", describe_settings(&settings));

    let mut nav = Navigator::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.script {
        Some(ref path) => {
            let file = File::open(path).with_context(|| format!("Can't open script [{}]", path.display()))?;
            info!("Reading commands from [{}]", path.display());
            command_loop(&mut nav, &settings, BufReader::new(file), &mut out, false)
        }
        None => {
            let stdin = io::stdin();
            let input = stdin.lock();
            command_loop(&mut nav, &settings, input, &mut out, true)
        }
    }
}

fn describe_settings(settings: &Settings) -> String {
    let source = match settings.used_config_file {
        Some(ref path) => format!("config file [{}]", path.display()),
        None => "defaults".to_string(),
    };
    format!(
        "Settings from {}: unit [{}], playback delay {} ms, json output {}",
        source,
        settings.unit,
        settings.playback_delay.as_millis(),
        if settings.json { "on" } else { "off" }
    )
}

/// City connection navigator.
#[derive(Parser)]
#[clap(version = "0.1.0", author = "The citynav development team")]
struct Args {
    /// Config file path (default `~/.citynav`)
    #[clap(long = "config")]
    config: Option<PathBuf>,

    /// Read commands from file instead of standard input
    #[clap(long = "script")]
    script: Option<PathBuf>,

    /// Print route results as JSON
    #[clap(long = "json")]
    json: bool,
}

fn command_loop<R: BufRead>(nav: &mut Navigator, settings: &Settings, input: R, out: &mut dyn Write, interactive: bool) -> Result<(), Error> {
    if interactive {
        writeln!(out, "Type 'help' for the list of commands.")?;
        prompt(out)?;
    }

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(cmd)) => execute(nav, settings, cmd, out)?,
            Ok(None) => {}
            Err(err) => writeln!(out, "Error: {}", err)?,
        }
        if interactive {
            prompt(out)?;
        }
    }

    Ok(())
}

fn prompt(out: &mut dyn Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn execute(nav: &mut Navigator, settings: &Settings, cmd: Command, out: &mut dyn Write) -> Result<(), Error> {
    match cmd {
        Command::Add { city_a, city_b, distance } => match nav.add_connection(&city_a, &city_b, &distance) {
            Ok(km) => writeln!(out, "Connected '{}' and '{}' ({} {}).", city_a.trim(), city_b.trim(), km, settings.unit)?,
            // Bad input is reported, the session goes on
            Err(err) => writeln!(out, "Error: {}", err)?,
        },
        Command::Route { start, end } => {
            let query = nav.find_shortest_path(&start, &end);
            if settings.json {
                writeln!(out, "{}", serde_json::to_string(&query)?)?;
            } else {
                print_route(&query, settings, out)?;
            }
        }
        Command::Cities => {
            writeln!(
                out,
                "{} {}, {} {}",
                nav.city_count(),
                plural(nav.city_count(), "city", "cities"),
                nav.connection_count(),
                plural(nav.connection_count(), "connection", "connections")
            )?;
            for city in nav.cities() {
                writeln!(out, "  {}", city)?;
            }
        }
        Command::Help => writeln!(out, "{}", USAGE)?,
        Command::Quit => {}
    }
    Ok(())
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

/// Text report, legs printed one by one with the configured pause in between.
fn print_route(query: &RouteQuery, settings: &Settings, out: &mut dyn Write) -> io::Result<()> {
    let route = match query {
        RouteQuery::Found(route) => route,
        RouteQuery::Unreachable { .. } => return writeln!(out, "{}", query.report(&settings.unit)),
    };

    writeln!(out, "{}", route.summary(&settings.unit))?;
    writeln!(out, "Path:")?;
    for leg in &route.legs {
        if settings.playback_delay.as_millis() > 0 {
            out.flush()?;
            thread::sleep(settings.playback_delay);
        }
        writeln!(out, "{}", Route::leg_line(leg, &settings.unit))?;
    }
    writeln!(out, "Destination reached.")
}

#[cfg(test)]
fn run_script(script: &str, settings: &Settings) -> String {
    let mut nav = Navigator::new();
    let mut out = Vec::new();
    command_loop(&mut nav, settings, script.as_bytes(), &mut out, false).expect("command loop failed");
    String::from_utf8(out).expect("non-utf8 output")
}

#[test]
fn test_script_session() {
    let script = "\
# Krakow area
add A B 5
add B C 3
add A C 10
route A C
route A D
route A A
";
    assert_eq!(
        run_script(script, &Settings::default()),
        "\
Connected 'A' and 'B' (5 km).
Connected 'B' and 'C' (3 km).
Connected 'A' and 'C' (10 km).
Shortest distance from 'A' to 'C': 8 km.
Path:
A -> B (5 km)
B -> C (3 km)
Destination reached.
'D' is not reachable from 'A'.
Shortest distance from 'A' to 'A': 0 km.
Path:
Destination reached.
"
    );
}

#[test]
fn test_script_errors_do_not_stop_session() {
    let script = "\
add A B abc
add A B
fly
route A B
add A B 4
quit
route A B
";
    assert_eq!(
        run_script(script, &Settings::default()),
        "\
Error: Please enter a valid integer for distance (got 'abc')
Error: Usage: add <cityA> <cityB> <distance>
Error: Unknown command 'fly', type 'help' for the list of commands
'B' is not reachable from 'A'.
Connected 'A' and 'B' (4 km).
"
    );
}

#[test]
fn test_script_json_and_cities() {
    let settings = Settings {
        json: true,
        ..Settings::default()
    };
    let script = "\
add \"Nowa Huta\" Krakow 10
cities
route Krakow \"Nowa Huta\"
";
    assert_eq!(
        run_script(script, &settings),
        "\
Connected 'Nowa Huta' and 'Krakow' (10 km).
2 cities, 1 connection
  Krakow
  Nowa Huta
{\"status\":\"found\",\"start\":\"Krakow\",\"end\":\"Nowa Huta\",\"distance\":10,\"legs\":[{\"from\":\"Krakow\",\"to\":\"Nowa Huta\",\"weight\":10}]}
"
    );
}

#[test]
fn test_script_echoes_stored_distance() {
    let script = "\
cities
add A B +007
cities
add B C 0012
cities
";
    assert_eq!(
        run_script(script, &Settings::default()),
        "\
0 cities, 0 connections
Connected 'A' and 'B' (7 km).
2 cities, 1 connection
  A
  B
Connected 'B' and 'C' (12 km).
3 cities, 2 connections
  A
  B
  C
"
    );
}

#[test]
fn test_plural() {
    assert_eq!(plural(0, "city", "cities"), "cities");
    assert_eq!(plural(1, "city", "cities"), "city");
    assert_eq!(plural(2, "city", "cities"), "cities");
}

#[test]
fn test_describe_settings() {
    assert_eq!(
        describe_settings(&Settings::default()),
        "Settings from defaults: unit [km], playback delay 0 ms, json output off"
    );

    let settings = Settings {
        unit: "mi".to_string(),
        playback_delay: std::time::Duration::from_millis(250),
        json: true,
        used_config_file: Some(PathBuf::from("/etc/citynav.json")),
    };
    assert_eq!(
        describe_settings(&settings),
        "Settings from config file [/etc/citynav.json]: unit [mi], playback delay 250 ms, json output on"
    );
}
