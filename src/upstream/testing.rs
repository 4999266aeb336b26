//! Fixtures shared by tests that need a movie source.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::MovieSource;
use crate::error::{Result, TweetqlError};
use crate::model::Movie;

pub(crate) fn sample_movie_json() -> Value {
    json!({
        "id": 10,
        "url": "https://yts.mx/movies/example-2020",
        "imdb_code": "tt0000010",
        "title": "Example",
        "title_english": "Example",
        "title_long": "Example (2020)",
        "slug": "example-2020",
        "year": 2020,
        "rating": 7.5,
        "runtime": 101,
        "summary": "Short.",
        "description_full": "A film.",
        "synopsis": "A film.",
        "yt_trailer_code": "abc",
        "language": "en",
        "mpa_rating": "PG",
        "background_image": "bg.jpg",
        "background_image_original": "bg_orig.jpg",
        "small_cover_image": "s.jpg",
        "medium_cover_image": "m.jpg",
        "large_cover_image": "l.jpg",
        "state": "ok",
        "date_uploaded": "2020-01-01 00:00:00",
        "date_uploaded_unix": 1577836800,
        "torrents": [{
            "url": "https://yts.mx/torrent/download/ABC",
            "hash": "ABC",
            "quality": "1080p",
            "type": "web",
            "seeds": 12,
            "peers": 3,
            "size": "1.9 GB",
            "size_bytes": 2040109466,
            "date_uploaded": "2020-01-01 00:00:00",
            "date_uploaded_unix": 1577836800
        }],
        "genres": ["Drama", "Comedy"]
    })
}

/// Shaped like a `movie_details.json` record: no synopsis, summary or state.
pub(crate) fn details_movie_json() -> Value {
    let mut movie = sample_movie_json();
    let fields = movie.as_object_mut().expect("fixture is an object");
    for key in ["synopsis", "summary", "state"] {
        fields.remove(key);
    }
    movie
}

pub(crate) fn sample_movie() -> Movie {
    serde_json::from_value(sample_movie_json()).expect("fixture is a valid movie")
}

/// Serves a fixed set of movies.
pub(crate) struct StubMovieSource {
    pub movies: Vec<Movie>,
}

#[async_trait]
impl MovieSource for StubMovieSource {
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.clone())
    }

    async fn movie(&self, id: &str) -> Result<Option<Movie>> {
        Ok(self
            .movies
            .iter()
            .find(|m| matches!(m.int("id"), Ok(Some(n)) if n.to_string() == id))
            .cloned())
    }
}

/// Fails every call the way a malformed upstream body would.
pub(crate) struct FailingMovieSource;

fn malformed_body() -> TweetqlError {
    serde_json::from_str::<Value>("<html>bad gateway</html>")
        .expect_err("not json")
        .into()
}

#[async_trait]
impl MovieSource for FailingMovieSource {
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        Err(malformed_body())
    }

    async fn movie(&self, _id: &str) -> Result<Option<Movie>> {
        Err(malformed_body())
    }
}
