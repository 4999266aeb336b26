use crate::model::{self, required};
use async_graphql::{Context, ID, Object};

use super::schema::app_state;

pub struct User(model::User);

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        User(u)
    }
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn username(&self) -> &str {
        &self.0.username
    }

    async fn last_name(&self) -> &str {
        &self.0.last_name
    }

    async fn first_name(&self) -> &str {
        &self.0.first_name
    }

    /// Is the sum of firstName + lastName as a string
    async fn full_name(&self) -> String {
        self.0.full_name()
    }
}

pub struct Tweet(model::Tweet);

impl From<model::Tweet> for Tweet {
    fn from(t: model::Tweet) -> Self {
        Tweet(t)
    }
}

/// Tweet object represents a resource for a Tweet
#[Object]
impl Tweet {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn text(&self) -> &str {
        &self.0.text
    }

    /// The user this tweet links to, if that user exists
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let Some(user_id) = self.0.user_id.as_deref() else {
            return Ok(None);
        };
        let state = app_state(ctx)?;
        Ok(state.store.find_user(user_id).map(User::from))
    }
}

pub struct Movie(model::Movie);

impl From<model::Movie> for Movie {
    fn from(m: model::Movie) -> Self {
        Movie(m)
    }
}

impl Movie {
    fn text(&self, key: &str) -> async_graphql::Result<String> {
        Ok(required(key, self.0.str(key))?.to_string())
    }

    fn int(&self, key: &str) -> async_graphql::Result<i64> {
        Ok(required(key, self.0.int(key))?)
    }
}

/// Each field reads its own key from the upstream record. A non-null field
/// errors only when it is selected and the upstream left it out.
#[Object(rename_fields = "snake_case")]
impl Movie {
    async fn id(&self) -> async_graphql::Result<i64> {
        self.int("id")
    }

    async fn url(&self) -> async_graphql::Result<String> {
        self.text("url")
    }

    async fn imdb_code(&self) -> async_graphql::Result<String> {
        self.text("imdb_code")
    }

    async fn title(&self) -> async_graphql::Result<String> {
        self.text("title")
    }

    async fn title_english(&self) -> async_graphql::Result<String> {
        self.text("title_english")
    }

    async fn title_long(&self) -> async_graphql::Result<String> {
        self.text("title_long")
    }

    async fn slug(&self) -> async_graphql::Result<String> {
        self.text("slug")
    }

    async fn year(&self) -> async_graphql::Result<i64> {
        self.int("year")
    }

    async fn rating(&self) -> async_graphql::Result<f64> {
        Ok(required("rating", self.0.float("rating"))?)
    }

    async fn runtime(&self) -> async_graphql::Result<i64> {
        self.int("runtime")
    }

    async fn summary(&self) -> async_graphql::Result<Option<String>> {
        Ok(self.0.str("summary")?.map(str::to_string))
    }

    async fn description_full(&self) -> async_graphql::Result<String> {
        self.text("description_full")
    }

    async fn synopsis(&self) -> async_graphql::Result<String> {
        self.text("synopsis")
    }

    async fn yt_trailer_code(&self) -> async_graphql::Result<String> {
        self.text("yt_trailer_code")
    }

    async fn language(&self) -> async_graphql::Result<String> {
        self.text("language")
    }

    async fn mpa_rating(&self) -> async_graphql::Result<String> {
        self.text("mpa_rating")
    }

    async fn background_image(&self) -> async_graphql::Result<String> {
        self.text("background_image")
    }

    async fn background_image_original(&self) -> async_graphql::Result<String> {
        self.text("background_image_original")
    }

    async fn small_cover_image(&self) -> async_graphql::Result<String> {
        self.text("small_cover_image")
    }

    async fn medium_cover_image(&self) -> async_graphql::Result<String> {
        self.text("medium_cover_image")
    }

    async fn large_cover_image(&self) -> async_graphql::Result<String> {
        self.text("large_cover_image")
    }

    async fn state(&self) -> async_graphql::Result<String> {
        self.text("state")
    }

    async fn date_uploaded(&self) -> async_graphql::Result<String> {
        self.text("date_uploaded")
    }

    async fn date_uploaded_unix(&self) -> async_graphql::Result<i64> {
        self.int("date_uploaded_unix")
    }

    async fn torrents(&self) -> async_graphql::Result<Vec<Torrents>> {
        let torrents = required("torrents", self.0.records("torrents"))?;
        Ok(torrents.into_iter().map(Torrents).collect())
    }

    async fn genres(&self) -> async_graphql::Result<Vec<String>> {
        Ok(required("genres", self.0.strings("genres"))?)
    }
}

pub struct Torrents(model::Torrent);

impl Torrents {
    fn text(&self, key: &str) -> async_graphql::Result<Option<String>> {
        Ok(self.0.str(key)?.map(str::to_string))
    }

    fn int(&self, key: &str) -> async_graphql::Result<Option<i64>> {
        Ok(self.0.int(key)?)
    }
}

#[Object(rename_fields = "snake_case")]
impl Torrents {
    async fn url(&self) -> async_graphql::Result<Option<String>> {
        self.text("url")
    }

    async fn hash(&self) -> async_graphql::Result<Option<String>> {
        self.text("hash")
    }

    async fn quality(&self) -> async_graphql::Result<Option<String>> {
        self.text("quality")
    }

    #[graphql(name = "type")]
    async fn torrent_type(&self) -> async_graphql::Result<Option<String>> {
        self.text("type")
    }

    async fn seeds(&self) -> async_graphql::Result<Option<i64>> {
        self.int("seeds")
    }

    async fn peers(&self) -> async_graphql::Result<Option<i64>> {
        self.int("peers")
    }

    async fn size(&self) -> async_graphql::Result<Option<String>> {
        self.text("size")
    }

    async fn size_bytes(&self) -> async_graphql::Result<Option<i64>> {
        self.int("size_bytes")
    }

    async fn date_uploaded(&self) -> async_graphql::Result<Option<String>> {
        self.text("date_uploaded")
    }

    async fn date_uploaded_unix(&self) -> async_graphql::Result<Option<i64>> {
        self.int("date_uploaded_unix")
    }
}
