//! Facet-count metadata shown next to filter options.

use serde::{Deserialize, Serialize};

/// Dimension a bucket of counts belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationName {
    Color,
    DimensionRange,
    Gallery,
    Institution,
    MajorPeriod,
    Medium,
    PriceRange,
    FollowedArtists,
    Artist,
}

/// One facet value and the number of matching artworks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationCount {
    pub count: u64,
    pub value: String,
    pub name: String,
}

/// All counts for one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregation {
    pub slice: AggregationName,
    pub counts: Vec<AggregationCount>,
}

/// Ordered facet buckets, as delivered by the artwork query.
pub type Aggregations = Vec<Aggregation>;

/// Appends a followed-artists bucket when the viewer follows any artist
/// with matching works.
///
/// The artwork query reports the followed-artist count separately from its
/// aggregations; the filter UI expects it as one more bucket.
///
/// # Examples
///
/// ```
/// use artwork_filters::domain::aggregation::{aggregations_with_followed_artists, AggregationName};
///
/// let buckets = aggregations_with_followed_artists(3, vec![]);
/// assert_eq!(buckets[0].slice, AggregationName::FollowedArtists);
/// assert_eq!(buckets[0].counts[0].count, 3);
///
/// assert!(aggregations_with_followed_artists(0, vec![]).is_empty());
/// ```
#[must_use]
pub fn aggregations_with_followed_artists(followed_artist_count: u64, mut aggregations: Aggregations) -> Aggregations {
    if followed_artist_count > 0 {
        aggregations.push(Aggregation {
            slice: AggregationName::FollowedArtists,
            counts: vec![AggregationCount {
                count: followed_artist_count,
                value: "followed_artists".to_string(),
                name: "Followed Artist".to_string(),
            }],
        });
    }
    aggregations
}
