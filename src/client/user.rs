//! Current-user endpoints: profile and listening history.

use std::collections::BTreeMap;

use crate::{
    client::DeezerClient,
    error::Result,
    types::{Fetch, SearchPage, User},
};

impl DeezerClient {
    /// Fetches the profile of the user the access token belongs to.
    ///
    /// # Example
    ///
    /// ```
    /// if let Fetch::Found(user) = client.me().await? {
    ///     println!("authorized as {}", user.name);
    /// }
    /// ```
    pub async fn me(&self) -> Result<Fetch<User>> {
        self.get_json("/user/me", BTreeMap::new()).await
    }

    /// Fetches the current user's listening history.
    pub async fn history(&self) -> Result<Fetch<SearchPage>> {
        self.get_json("/user/me/history", BTreeMap::new()).await
    }
}
