use serde::Deserialize;

/// Request body for posting or editing a review.
#[derive(Deserialize, Debug)]
pub struct ReviewBody {
    /// Star rating, expected to be 1 through 5.
    pub rating: i64,
    /// Body of the review.
    pub text: String,
}
