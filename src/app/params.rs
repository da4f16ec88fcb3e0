//! Translation of the applied filter set into artwork query parameters.
//!
//! The data-fetch collaborator re-issues its query whenever a commit raises
//! the apply flag. [`FilterParams`] is what it sends: every dimension starts
//! at its query default and each applied option overrides one field.

use crate::domain::defaults::{DEFAULT_DIMENSION_RANGE, DEFAULT_MEDIUM, DEFAULT_PRICE_RANGE, DEFAULT_SORT};
use crate::domain::{FilterOption, FilterParamName, ParamValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query parameters derived from applied filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    pub sort: String,
    pub medium: String,
    pub price_range: String,
    pub dimension_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "partnerID", skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_periods: Option<Vec<String>>,
    pub inquireable_only: bool,
    pub offerable: bool,
    pub at_auction: bool,
    pub acquireable: bool,
    pub include_artworks_by_followed_artists: bool,
    #[serde(rename = "artistIDs")]
    pub artist_ids: Vec<String>,
    /// Dimensions this crate has no field for, passed through by name.
    #[serde(flatten)]
    pub extra: BTreeMap<String, ParamValue>,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            sort: DEFAULT_SORT.to_string(),
            medium: DEFAULT_MEDIUM.to_string(),
            price_range: DEFAULT_PRICE_RANGE.to_string(),
            dimension_range: DEFAULT_DIMENSION_RANGE.to_string(),
            color: None,
            partner_id: None,
            major_periods: None,
            inquireable_only: false,
            offerable: false,
            at_auction: false,
            acquireable: false,
            include_artworks_by_followed_artists: false,
            artist_ids: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl FilterParams {
    /// Builds query parameters from an applied filter set.
    ///
    /// Options whose value has the wrong shape for their dimension (a flag
    /// for `medium`, text for `atAuction`) are skipped with a warning.
    ///
    /// # Example
    ///
    /// ```rust
    /// use artwork_filters::app::FilterParams;
    /// use artwork_filters::{FilterOption, FilterParamName};
    ///
    /// let params = FilterParams::from_applied(&[
    ///     FilterOption::new(FilterParamName::Medium, "Painting", "Painting"),
    ///     FilterOption::artist("banksy", "Banksy"),
    ///     FilterOption::artist("kaws", "KAWS"),
    /// ]);
    ///
    /// assert_eq!(params.medium, "Painting");
    /// assert_eq!(params.artist_ids, ["banksy", "kaws"]);
    /// assert_eq!(params.sort, "-decayed_merch");
    /// ```
    #[must_use]
    pub fn from_applied(applied: &[FilterOption]) -> Self {
        applied.iter().fold(Self::default(), |mut params, option| {
            if !params.apply(option) {
                tracing::warn!(
                    param = %option.param_name,
                    value = ?option.param_value,
                    "skipping filter with mismatched value"
                );
            }
            params
        })
    }

    /// Applies one option. Returns `false` if its value was unusable.
    fn apply(&mut self, option: &FilterOption) -> bool {
        let value = option.param_value.as_ref();
        let text = value.and_then(ParamValue::as_text).map(str::to_string);
        let flag = value.and_then(ParamValue::as_flag);

        match &option.param_name {
            FilterParamName::Sort => set_text(&mut self.sort, text),
            FilterParamName::Medium => set_text(&mut self.medium, text),
            FilterParamName::PriceRange => set_text(&mut self.price_range, text),
            FilterParamName::DimensionRange => set_text(&mut self.dimension_range, text),
            FilterParamName::Color => set_optional_text(&mut self.color, value, text),
            FilterParamName::PartnerId => set_optional_text(&mut self.partner_id, value, text),
            FilterParamName::MajorPeriods => {
                let mut periods = None;
                let ok = set_optional_text(&mut periods, value, text);
                if ok {
                    self.major_periods = periods.map(|period| vec![period]);
                }
                ok
            }
            FilterParamName::InquireableOnly => set_flag(&mut self.inquireable_only, flag),
            FilterParamName::Offerable => set_flag(&mut self.offerable, flag),
            FilterParamName::AtAuction => set_flag(&mut self.at_auction, flag),
            FilterParamName::Acquireable => set_flag(&mut self.acquireable, flag),
            FilterParamName::IncludeArtworksByFollowedArtists => {
                set_flag(&mut self.include_artworks_by_followed_artists, flag)
            }
            FilterParamName::ArtistIds => text.map_or(false, |artist_id| {
                self.artist_ids.push(artist_id);
                true
            }),
            FilterParamName::Unknown(name) => match (name.is_empty(), value) {
                (false, Some(value)) => {
                    self.extra.insert(name.clone(), value.clone());
                    true
                }
                _ => false,
            },
        }
    }
}

fn set_text(field: &mut String, text: Option<String>) -> bool {
    text.map_or(false, |text| {
        *field = text;
        true
    })
}

fn set_optional_text(field: &mut Option<String>, value: Option<&ParamValue>, text: Option<String>) -> bool {
    match (value, text) {
        (None, _) => {
            *field = None;
            true
        }
        (Some(_), Some(text)) => {
            *field = Some(text);
            true
        }
        (Some(_), None) => false,
    }
}

fn set_flag(field: &mut bool, flag: Option<bool>) -> bool {
    flag.map_or(false, |flag| {
        *field = flag;
        true
    })
}
