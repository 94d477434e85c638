//! City connection navigator.
//!
//! A [`Navigator`] session owns one graph of city connections. The caller adds connections
//! and asks for shortest routes; rendering the result is up to the caller.

pub use self::command::{parse_command, Command, CommandError, USAGE};
pub use self::config::{Opts, Settings};
pub use self::errors::{ConfigError, ValidationError};
pub use self::navigator::Navigator;
pub use self::route::{Report, Route, RouteLeg, RouteQuery};

mod command;
mod config;
mod errors;
mod navigator;
mod route;
