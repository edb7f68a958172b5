//! Movie service: input validation and role-specific lookups.

use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{Movie, Participation, Person, Role};
use crate::repositories::MovieRepository;

/// Minimum length of a search term after trimming.
const MIN_SEARCH_TERM_LEN: usize = 3;

/// Service exposing the read operations available to callers.
#[derive(FromContext, Clone)]
pub struct MovieService {
    movie_repo: MovieRepository,
}

impl MovieService {
    /// Creates a service over the given repository.
    pub fn new(movie_repo: MovieRepository) -> Self {
        Self { movie_repo }
    }

    /// Find a movie by its uuid.
    pub async fn find_movie(&self, uuid: &str) -> Result<Option<Movie>, AppError> {
        if uuid.is_empty() {
            return Err(AppError::Validation("uuid must not be empty".to_string()));
        }
        self.movie_repo.find_by_uuid(uuid).await
    }

    /// Search movies by optional title and actor substrings.
    ///
    /// Present terms are validated before any query runs.
    pub async fn search_movies(
        &self,
        title: Option<&str>,
        actor: Option<&str>,
    ) -> Result<Vec<Movie>, AppError> {
        if let Some(title) = title {
            validate_search_term("title", title)?;
        }
        if let Some(actor) = actor {
            validate_search_term("actor", actor)?;
        }
        self.movie_repo.search(title, actor).await
    }

    /// Find people connected to a movie, by role label.
    ///
    /// The label must name one of the known [`Role`]s.
    pub async fn find_people(&self, role: &str, uuid: &str) -> Result<Vec<Person>, AppError> {
        let role: Role = role.parse()?;
        self.movie_repo.find_people_by_movie(role, uuid).await
    }

    /// Find the directors of a movie.
    pub async fn find_directors(&self, uuid: &str) -> Result<Vec<Person>, AppError> {
        self.movie_repo
            .find_people_by_movie(Role::Directed, uuid)
            .await
    }

    /// Find the writers of a movie.
    pub async fn find_writers(&self, uuid: &str) -> Result<Vec<Person>, AppError> {
        self.movie_repo.find_people_by_movie(Role::Wrote, uuid).await
    }

    /// Find the cast of a movie.
    pub async fn find_cast(&self, uuid: &str) -> Result<Vec<Person>, AppError> {
        self.movie_repo
            .find_people_by_movie(Role::ActedIn, uuid)
            .await
    }

    /// Find every movie a person participated in.
    pub async fn find_participations(&self, uuid: &str) -> Result<Vec<Participation>, AppError> {
        self.movie_repo.find_participations_by_person(uuid).await
    }
}

/// Search terms must be alphanumeric and at least three characters once
/// surrounding spaces are trimmed.
fn validate_search_term(field: &str, value: &str) -> Result<(), AppError> {
    let trimmed = value.trim_matches(' ');
    if trimmed.chars().count() < MIN_SEARCH_TERM_LEN {
        return Err(AppError::Validation(format!(
            "{} must be at least {} characters",
            field, MIN_SEARCH_TERM_LEN
        )));
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::Validation(format!(
            "{} must contain only ASCII letters and digits",
            field
        )));
    }
    Ok(())
}
