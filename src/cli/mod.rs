//! CLI module for Cinegraph.
//!
//! Every subcommand runs one read operation and prints the result as JSON
//! on stdout:
//! - `movie`: look up a movie by uuid
//! - `movies`: search movies by title and/or actor
//! - `participations`: movies a person is connected to
//! - `people`: people connected to a movie by role
//! - `directors`, `writers`, `cast`: role-specific shortcuts

mod query;

use clap::{Parser, Subcommand};

use crate::models::Role;

/// Cinegraph - read-only movie graph gateway
#[derive(Parser)]
#[command(name = "cinegraph")]
#[command(about = "Read-only movie graph gateway - typed queries over Neo4j")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find a movie by uuid
    Movie {
        /// Movie uuid
        uuid: String,
    },

    /// Search movies by title and/or actor name
    Movies {
        /// Case-insensitive title substring
        #[arg(long)]
        title: Option<String>,

        /// Case-insensitive actor name substring
        #[arg(long)]
        actor: Option<String>,
    },

    /// List the movies a person participated in
    Participations {
        /// Person uuid
        uuid: String,
    },

    /// List people connected to a movie by role
    People {
        /// Edge role: DIRECTED, WROTE or ACTED_IN
        #[arg(long)]
        role: Role,

        /// Movie uuid
        uuid: String,
    },

    /// List the directors of a movie
    Directors {
        /// Movie uuid
        uuid: String,
    },

    /// List the writers of a movie
    Writers {
        /// Movie uuid
        uuid: String,
    },

    /// List the cast of a movie
    Cast {
        /// Movie uuid
        uuid: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_people_command() {
        let app = App::try_parse_from(["cinegraph", "people", "--role", "acted-in", "abc-1"])
            .unwrap();
        match app.command {
            Command::People { role, uuid } => {
                assert_eq!(role, Role::ActedIn);
                assert_eq!(uuid, "abc-1");
            }
            _ => panic!("expected people command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        let result = App::try_parse_from(["cinegraph", "people", "--role", "PRODUCED", "abc-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_movies_filters_are_optional() {
        let app = App::try_parse_from(["cinegraph", "-v", "movies", "--title", "matrix"]).unwrap();
        assert!(app.verbose);
        match app.command {
            Command::Movies { title, actor } => {
                assert_eq!(title.as_deref(), Some("matrix"));
                assert_eq!(actor, None);
            }
            _ => panic!("expected movies command"),
        }
    }
}
