//! Movie repository: read queries over movies, people and their edges.

use crate::context::Context;
use crate::cypher;
use crate::di::FromContext;
use crate::error::AppError;
use crate::graph::{decode_new, read_string, Graph, Row};
use crate::models::{Movie, Participation, Person, Role};

const FIND_MOVIE_BY_UUID: &str = "MATCH (m:Movie) WHERE m.uuid = $uuid
     RETURN m.uuid, m.title, m.released, m.tagline";

const LIST_MOVIES: &str = "MATCH (m:Movie)
     RETURN m.uuid, m.title, m.released, m.tagline";

const SEARCH_MOVIES_BY_TITLE: &str = "MATCH (m:Movie) WHERE lower(m.title) CONTAINS $title
     RETURN m.uuid, m.title, m.released, m.tagline";

const SEARCH_MOVIES_BY_ACTOR: &str = "MATCH (m:Movie)-[:ACTED_IN]-(p:Person)
     WHERE lower(p.name) CONTAINS $actor
     RETURN m.uuid, m.title, m.released, m.tagline";

const SEARCH_MOVIES_BY_TITLE_AND_ACTOR: &str = "MATCH (m:Movie)-[:ACTED_IN]-(p:Person)
     WHERE lower(m.title) CONTAINS $title AND lower(p.name) CONTAINS $actor
     RETURN m.uuid, m.title, m.released, m.tagline";

const FIND_PARTICIPATIONS_BY_PERSON: &str = "MATCH (m:Movie)-[r]-(p:Person) WHERE p.uuid = $uuid
     RETURN m.uuid, m.title, m.released, m.tagline, type(r) AS role";

const FIND_DIRECTORS_BY_MOVIE: &str = "MATCH (p:Person)-[:DIRECTED]->(m:Movie) WHERE m.uuid = $uuid
     RETURN p.uuid, p.name, p.born";

const FIND_WRITERS_BY_MOVIE: &str = "MATCH (p:Person)-[:WROTE]->(m:Movie) WHERE m.uuid = $uuid
     RETURN p.uuid, p.name, p.born";

const FIND_CAST_BY_MOVIE: &str = "MATCH (p:Person)-[:ACTED_IN]->(m:Movie) WHERE m.uuid = $uuid
     RETURN p.uuid, p.name, p.born";

/// Picks the search query for the given combination of filters.
fn search_query(has_title: bool, has_actor: bool) -> &'static str {
    match (has_title, has_actor) {
        (false, false) => LIST_MOVIES,
        (true, false) => SEARCH_MOVIES_BY_TITLE,
        (false, true) => SEARCH_MOVIES_BY_ACTOR,
        (true, true) => SEARCH_MOVIES_BY_TITLE_AND_ACTOR,
    }
}

/// Fixed traversal query for each role. The edge type is part of the
/// template, never interpolated.
fn people_query(role: Role) -> &'static str {
    match role {
        Role::Directed => FIND_DIRECTORS_BY_MOVIE,
        Role::Wrote => FIND_WRITERS_BY_MOVIE,
        Role::ActedIn => FIND_CAST_BY_MOVIE,
    }
}

/// Lower-cases an optional filter, binding absent filters as `""`.
fn normalize(filter: Option<&str>) -> String {
    filter.map(str::to_lowercase).unwrap_or_default()
}

/// Repository for movie and person lookups.
#[derive(FromContext, Clone)]
pub struct MovieRepository {
    graph: Graph,
}

impl MovieRepository {
    /// Creates a repository over the given graph.
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// Find a movie by its uuid.
    ///
    /// Returns `None` when no movie matches.
    pub async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Movie>, AppError> {
        let rows = cypher!(self.graph, FIND_MOVIE_BY_UUID, uuid = uuid)
            .fetch_all()
            .await?;

        rows.first().map(Self::row_to_movie).transpose()
    }

    /// Find movies whose title and/or cast match the given substrings.
    ///
    /// Both filters are matched case-insensitively. Results keep the order
    /// the database returned them in.
    pub async fn search(
        &self,
        title: Option<&str>,
        actor: Option<&str>,
    ) -> Result<Vec<Movie>, AppError> {
        let rows = self
            .graph
            .query(search_query(title.is_some(), actor.is_some()))
            .param("title", normalize(title))
            .param("actor", normalize(actor))
            .fetch_all()
            .await?;

        rows.iter().map(Self::row_to_movie).collect()
    }

    /// Find every movie a person is connected to, one entry per edge.
    pub async fn find_participations_by_person(
        &self,
        uuid: &str,
    ) -> Result<Vec<Participation>, AppError> {
        let rows = cypher!(self.graph, FIND_PARTICIPATIONS_BY_PERSON, uuid = uuid)
            .fetch_all()
            .await?;

        rows.iter().map(Self::row_to_participation).collect()
    }

    /// Find people connected to a movie by an edge of the given role.
    ///
    /// Every returned person has `role` set to `role`.
    pub async fn find_people_by_movie(
        &self,
        role: Role,
        uuid: &str,
    ) -> Result<Vec<Person>, AppError> {
        let rows = cypher!(self.graph, people_query(role), uuid = uuid)
            .fetch_all()
            .await?;

        rows.iter()
            .map(|row| {
                let mut person: Person = decode_new(row, "p")?;
                person.role = Some(role);
                Ok(person)
            })
            .collect()
    }

    /// Convert a row to a Movie.
    fn row_to_movie(row: &Row) -> Result<Movie, AppError> {
        decode_new(row, "m")
    }

    /// Convert a row to a Participation.
    fn row_to_participation(row: &Row) -> Result<Participation, AppError> {
        Ok(Participation {
            movie: decode_new(row, "m")?,
            role: read_string(row, "role")?.unwrap_or_default(),
        })
    }
}
