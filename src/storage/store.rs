use crate::model::{Tweet, User};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct StoreState {
    tweets: Vec<Tweet>,
    users: Vec<User>,
    /// Next tweet id. Only ever grows, so deletions never free an id.
    next_tweet_id: u64,
}

/// Process-wide tweets and users.
///
/// Every method holds the lock for its own body only, so each call is atomic
/// with respect to the others. Callers get owned copies back and never see
/// the lock.
pub struct Store {
    state: RwLock<StoreState>,
}

impl Store {
    pub fn new(tweets: Vec<Tweet>, users: Vec<User>) -> Self {
        let next_tweet_id = tweets
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            state: RwLock::new(StoreState {
                tweets,
                users,
                next_tweet_id,
            }),
        }
    }

    /// The data every process starts with.
    pub fn seeded() -> Self {
        Self::new(
            vec![
                Tweet::new("1", "first one").with_user("1"),
                Tweet::new("2", "second one").with_user("2"),
            ],
            vec![
                User::new("1", "nochi", "nochi", "ai"),
                User::new("2", "noah", "noah", "ai"),
            ],
        )
    }

    // A panic while holding the lock cannot leave the vectors half-written,
    // so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn all_tweets(&self) -> Vec<Tweet> {
        self.read().tweets.clone()
    }

    pub fn find_tweet(&self, id: &str) -> Option<Tweet> {
        self.read().tweets.iter().find(|t| t.id == id).cloned()
    }

    /// Append a new tweet with a freshly assigned id and return it.
    pub fn append_tweet(&self, text: String, user_id: Option<String>) -> Tweet {
        let mut state = self.write();
        let id = state.next_tweet_id;
        state.next_tweet_id += 1;

        let tweet = Tweet {
            id: id.to_string(),
            text,
            user_id,
        };
        tracing::debug!(id = %tweet.id, "Appending tweet");
        state.tweets.push(tweet.clone());
        tweet
    }

    /// Remove every tweet with `id`. Returns false when none matched.
    pub fn remove_tweet(&self, id: &str) -> bool {
        let mut state = self.write();
        if !state.tweets.iter().any(|t| t.id == id) {
            return false;
        }

        let remaining: Vec<Tweet> = state
            .tweets
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        state.tweets = remaining;
        tracing::debug!(id = %id, "Removed tweet");
        true
    }

    pub fn all_users(&self) -> Vec<User> {
        self.read().users.clone()
    }

    pub fn find_user(&self, id: &str) -> Option<User> {
        self.read().users.iter().find(|u| u.id == id).cloned()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}
