//! Product review entity and aggregate recomputation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single product review. One review per author per product.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review identifier, assigned at insertion time.
    pub id: Uuid,
    /// The reviewed product.
    pub product_id: Uuid,
    /// Reviewer identity.
    pub author: String,
    /// Star rating, 1–5.
    pub rating: i32,
    /// Free-text comment.
    pub comment: String,
    /// When the review was submitted.
    pub created_at: DateTime<Utc>,
}

/// Data required to submit a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    /// Reviewer identity.
    pub author: String,
    /// Star rating, 1–5.
    pub rating: i32,
    /// Free-text comment.
    pub comment: String,
}

/// Recompute a product's derived review fields from the live ratings.
///
/// Returns `(num_reviews, rating)` where `rating` is the arithmetic mean,
/// or 0 when there are no reviews left.
pub fn aggregate(ratings: &[i32]) -> (i32, f64) {
    if ratings.is_empty() {
        return (0, 0.0);
    }
    let sum: i64 = ratings.iter().map(|r| *r as i64).sum();
    (ratings.len() as i32, sum as f64 / ratings.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[]), (0, 0.0));
    }

    #[test]
    fn test_aggregate_mean() {
        assert_eq!(aggregate(&[5]), (1, 5.0));
        assert_eq!(aggregate(&[5, 3]), (2, 4.0));
        assert_eq!(aggregate(&[5, 3, 3]), (3, 11.0 / 3.0));
    }
}
