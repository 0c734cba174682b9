use serde::Deserialize;

/// Query string for the search endpoint.
#[derive(Deserialize, Debug)]
pub struct Search {
    /// Name fragment to look for.
    pub q: Option<String>,
}
