use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use super::MovieSource;
use crate::error::Result;
use crate::model::Movie;

const LIST_MOVIES: &str = "list_movies.json";
const MOVIE_DETAILS: &str = "movie_details.json";

/// Every YTS response wraps its payload in `data`.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct MovieList {
    // Omitted by the upstream when the listing is empty.
    #[serde(default)]
    movies: Vec<Movie>,
}

#[derive(Deserialize)]
struct MovieDetails {
    #[serde(default)]
    movie: Option<Movie>,
}

/// HTTP client for the YTS API.
pub struct YtsClient {
    client: reqwest::Client,
    base_url: Url,
}

impl YtsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        // Already installed is fine.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let mut base_url = Url::parse(base_url)?;
        // `Url::join` replaces the last segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("tweetql/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn list_url(&self) -> Result<Url> {
        Ok(self.base_url.join(LIST_MOVIES)?)
    }

    fn details_url(&self, id: &str) -> Result<Url> {
        let mut url = self.base_url.join(MOVIE_DETAILS)?;
        url.query_pairs_mut().append_pair("movie_id", id);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "Requesting upstream");
        let result = self.fetch_inner(url.clone()).await;
        if let Err(e) = &result {
            warn!(%url, error = %e, "Upstream request failed");
        }
        result
    }

    async fn fetch_inner<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&body)?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl MovieSource for YtsClient {
    #[instrument(skip(self))]
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        let list: MovieList = self.fetch(self.list_url()?).await?;
        debug!(count = list.movies.len(), "Fetched movie list");
        Ok(list.movies)
    }

    #[instrument(skip(self))]
    async fn movie(&self, id: &str) -> Result<Option<Movie>> {
        let details: MovieDetails = self.fetch(self.details_url(id)?).await?;
        Ok(details.movie)
    }
}
