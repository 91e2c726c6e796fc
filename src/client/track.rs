//! Track endpoints: search and lookup by identifier.

use std::collections::BTreeMap;

use crate::{
    client::DeezerClient,
    error::Result,
    types::{Fetch, SearchPage, Track},
};

impl DeezerClient {
    /// Searches the catalog for tracks matching `query`.
    ///
    /// Extra filter parameters (for example `order` or `strict`) are merged
    /// into the request alongside `q`. Filters colliding with the reserved
    /// request keys are rejected.
    ///
    /// Returns [`Fetch::Empty`] when the server answers with an empty body,
    /// which is distinct from a transport or server failure.
    ///
    /// # Example
    ///
    /// ```
    /// let results = client.search_track("one more time", &[("order", "RANKING")]).await?;
    /// ```
    pub async fn search_track(
        &self,
        query: &str,
        filters: &[(&str, &str)],
    ) -> Result<Fetch<SearchPage>> {
        let mut params = BTreeMap::new();
        params.insert("q".to_string(), query.to_string());
        for (key, value) in filters {
            params.insert((*key).to_string(), (*value).to_string());
        }

        self.get_json("/search/track", params).await
    }

    /// Fetches a single track by its identifier.
    pub async fn track(&self, id: u64) -> Result<Fetch<Track>> {
        self.get_json(&format!("/track/{}", id), BTreeMap::new())
            .await
    }
}
