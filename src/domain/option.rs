//! Filter dimensions and candidate filter options.
//!
//! A [`FilterOption`] is one candidate setting for one dimension
//! ([`FilterParamName`]). Options flow through the reducer unchanged apart
//! from being kept, replaced, or dropped; `display_text` and `filter_key`
//! never influence reconciliation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named filter axis.
///
/// Each known dimension serializes as the request parameter it drives
/// (`"priceRange"`, `"artistIDs"`, ...). Several UI concepts share one
/// parameter: gallery and institution both map to [`Self::PartnerId`] and
/// are told apart by [`FilterOption::filter_key`].
///
/// Names outside the known set are preserved as [`Self::Unknown`] rather
/// than rejected. An absent name in a payload becomes `Unknown("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterParamName {
    Sort,
    Medium,
    PriceRange,
    DimensionRange,
    PartnerId,
    Color,
    MajorPeriods,
    Acquireable,
    Offerable,
    AtAuction,
    InquireableOnly,
    IncludeArtworksByFollowedArtists,
    /// The artist kind. Entries are independent per artist id.
    ArtistIds,
    /// A dimension this engine has no default for.
    Unknown(String),
}

impl FilterParamName {
    /// UI alias for [`Self::DimensionRange`].
    pub const SIZE: Self = Self::DimensionRange;
    /// UI alias for [`Self::PartnerId`] with `filter_key = "gallery"`.
    pub const GALLERY: Self = Self::PartnerId;
    /// UI alias for [`Self::PartnerId`] with `filter_key = "institution"`.
    pub const INSTITUTION: Self = Self::PartnerId;
    /// UI alias for [`Self::MajorPeriods`].
    pub const TIME_PERIOD: Self = Self::MajorPeriods;
    /// "Buy now" ways-to-buy flag.
    pub const WAYS_TO_BUY_BUY: Self = Self::Acquireable;
    /// "Make offer" ways-to-buy flag.
    pub const WAYS_TO_BUY_MAKE_OFFER: Self = Self::Offerable;
    /// "Bid" ways-to-buy flag.
    pub const WAYS_TO_BUY_BID: Self = Self::AtAuction;
    /// "Inquire" ways-to-buy flag.
    pub const WAYS_TO_BUY_INQUIRE: Self = Self::InquireableOnly;
    /// "All artists I follow" flag.
    pub const ARTISTS_I_FOLLOW: Self = Self::IncludeArtworksByFollowedArtists;
    /// Individual artist selection.
    pub const ARTIST: Self = Self::ArtistIds;

    /// Returns the request parameter name for this dimension.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sort => "sort",
            Self::Medium => "medium",
            Self::PriceRange => "priceRange",
            Self::DimensionRange => "dimensionRange",
            Self::PartnerId => "partnerID",
            Self::Color => "color",
            Self::MajorPeriods => "majorPeriods",
            Self::Acquireable => "acquireable",
            Self::Offerable => "offerable",
            Self::AtAuction => "atAuction",
            Self::InquireableOnly => "inquireableOnly",
            Self::IncludeArtworksByFollowedArtists => "includeArtworksByFollowedArtists",
            Self::ArtistIds => "artistIDs",
            Self::Unknown(name) => name,
        }
    }

    /// Returns `true` for the multi-select artist dimension.
    #[must_use]
    pub const fn is_artist(&self) -> bool {
        matches!(self, Self::ArtistIds)
    }

    /// Returns `true` for the boolean "ways to buy" and followed-artist flags.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(
            self,
            Self::Acquireable
                | Self::Offerable
                | Self::AtAuction
                | Self::InquireableOnly
                | Self::IncludeArtworksByFollowedArtists
        )
    }
}

impl Default for FilterParamName {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<&str> for FilterParamName {
    fn from(name: &str) -> Self {
        match name {
            "sort" => Self::Sort,
            "medium" => Self::Medium,
            "priceRange" => Self::PriceRange,
            "dimensionRange" => Self::DimensionRange,
            "partnerID" => Self::PartnerId,
            "color" => Self::Color,
            "majorPeriods" => Self::MajorPeriods,
            "acquireable" => Self::Acquireable,
            "offerable" => Self::Offerable,
            "atAuction" => Self::AtAuction,
            "inquireableOnly" => Self::InquireableOnly,
            "includeArtworksByFollowedArtists" => Self::IncludeArtworksByFollowedArtists,
            "artistIDs" => Self::ArtistIds,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for FilterParamName {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<FilterParamName> for String {
    fn from(name: FilterParamName) -> Self {
        match name {
            FilterParamName::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FilterParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value carried by a filter option.
///
/// Serialized untagged, so JSON `"Painting"` and `true` map directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Flag(bool),
    Text(String),
}

impl ParamValue {
    /// Returns the text value, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }

    /// Returns the boolean value, if this is a flag.
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Text(_) => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for ParamValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One candidate filter setting.
///
/// # Examples
///
/// ```
/// use artwork_filters::{FilterOption, FilterParamName};
///
/// let painting = FilterOption::new(FilterParamName::Medium, "Painting", "Painting");
/// assert_eq!(painting.param_value.as_ref().and_then(|v| v.as_text()), Some("Painting"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    /// Dimension this option belongs to.
    #[serde(default)]
    pub param_name: FilterParamName,

    /// Value for the dimension; `None` means "absent".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_value: Option<ParamValue>,

    /// Human label, carried through unchanged.
    #[serde(default)]
    pub display_text: String,

    /// Secondary discriminator for option kinds that share a `param_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_key: Option<String>,
}

impl FilterOption {
    /// Creates an option with a value and no filter key.
    pub fn new(
        param_name: FilterParamName,
        param_value: impl Into<ParamValue>,
        display_text: impl Into<String>,
    ) -> Self {
        Self {
            param_name,
            param_value: Some(param_value.into()),
            display_text: display_text.into(),
            filter_key: None,
        }
    }

    /// Creates an option whose value is absent.
    pub fn without_value(param_name: FilterParamName, display_text: impl Into<String>) -> Self {
        Self {
            param_name,
            param_value: None,
            display_text: display_text.into(),
            filter_key: None,
        }
    }

    /// Creates an artist selection for the given artist id.
    pub fn artist(artist_id: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self::new(FilterParamName::ArtistIds, artist_id.into(), display_text)
    }

    /// Sets the filter key.
    #[must_use]
    pub fn with_filter_key(mut self, filter_key: impl Into<String>) -> Self {
        self.filter_key = Some(filter_key.into());
        self
    }

    /// Returns `true` when this option belongs to the artist dimension.
    #[must_use]
    pub const fn is_artist(&self) -> bool {
        self.param_name.is_artist()
    }

    /// Returns `true` when both options name the same dimension and value.
    #[must_use]
    pub fn same_setting(&self, other: &Self) -> bool {
        self.param_name == other.param_name && self.param_value == other.param_value
    }
}

/// An ordered list of filter options.
pub type FilterArray = Vec<FilterOption>;
