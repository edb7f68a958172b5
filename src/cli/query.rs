//! Query command handlers.

use color_eyre::Result;
use serde::Serialize;

use crate::config::Config;
use crate::context::Context;
use crate::di::FromRef;
use crate::services::MovieService;

use super::{App, Command};

impl App {
    /// Run the selected query against the configured database.
    pub async fn run(self, config: Config) -> Result<()> {
        let ctx = Context::connect(config).await?;
        let service = MovieService::from_ref(&ctx);

        match self.command {
            Command::Movie { uuid } => print_json(&service.find_movie(&uuid).await?),
            Command::Movies { title, actor } => print_json(
                &service
                    .search_movies(title.as_deref(), actor.as_deref())
                    .await?,
            ),
            Command::Participations { uuid } => {
                print_json(&service.find_participations(&uuid).await?)
            }
            Command::People { role, uuid } => {
                print_json(&service.find_people(role.label(), &uuid).await?)
            }
            Command::Directors { uuid } => print_json(&service.find_directors(&uuid).await?),
            Command::Writers { uuid } => print_json(&service.find_writers(&uuid).await?),
            Command::Cast { uuid } => print_json(&service.find_cast(&uuid).await?),
        }
    }
}

/// Writes a value to stdout as pretty-printed JSON.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
