//! Dependency injection infrastructure.
//!
//! Dependencies are resolved at compile time through the `FromRef` trait and
//! the derive macros from `di-macros`:
//!
//! - `#[derive(Context)]` on the root [`Context`](crate::context::Context)
//!   makes every field extractable with `FromRef`
//! - `#[derive(FromContext)]` on a repository or service builds it by
//!   resolving each of its fields from the context
//!
//! # Example
//!
//! ```ignore
//! use cinegraph::context::Context;
//! use cinegraph::di::FromRef;
//! use cinegraph::services::MovieService;
//!
//! let ctx = Context::connect(config).await?;
//!
//! // MovieService -> MovieRepository -> Graph, all taken from ctx
//! let service = MovieService::from_ref(&ctx);
//! ```

/// Trait for extracting a value from a reference to another type.
///
/// Types that implement `FromRef<T>` can be built from `&T`.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Any Clone type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}

// Re-export derive macros
pub use di_macros::{Context, FromContext};
