//! Default ("unfiltered") values for every known dimension.
//!
//! Two tables live here. [`default_value`] is the authoritative table used by
//! every default comparison in the reducer. [`default_options`] is the list of
//! options the selection UI shows as checked when nothing else is chosen; it
//! is only consulted by the selected-options display view.

use super::option::{FilterOption, FilterParamName, ParamValue};

/// Default value of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// A text value such as `"*"`.
    Text(&'static str),
    /// A boolean flag value.
    Flag(bool),
    /// The value is absent.
    Absent,
    /// An empty list. No single option value ever equals it.
    EmptyList,
}

impl DefaultValue {
    /// Returns `true` when `value` is this default.
    #[must_use]
    pub fn matches(self, value: Option<&ParamValue>) -> bool {
        match (self, value) {
            (Self::Text(default), Some(ParamValue::Text(text))) => text == default,
            (Self::Flag(default), Some(ParamValue::Flag(flag))) => *flag == default,
            (Self::Absent, None) => true,
            _ => false,
        }
    }
}

/// Default sort order: merchandisability, decayed over time.
pub const DEFAULT_SORT: &str = "-decayed_merch";
/// Wildcard medium matching every medium.
pub const DEFAULT_MEDIUM: &str = "*";
/// Open-ended price range.
pub const DEFAULT_PRICE_RANGE: &str = "*-*";
/// Open-ended size range.
pub const DEFAULT_DIMENSION_RANGE: &str = "*-*";

/// Looks up the default value of a dimension.
///
/// Returns `None` for unknown dimensions, which have no default.
#[must_use]
pub const fn default_value(name: &FilterParamName) -> Option<DefaultValue> {
    let value = match name {
        FilterParamName::Sort => DefaultValue::Text(DEFAULT_SORT),
        FilterParamName::Medium => DefaultValue::Text(DEFAULT_MEDIUM),
        FilterParamName::PriceRange => DefaultValue::Text(DEFAULT_PRICE_RANGE),
        FilterParamName::DimensionRange => DefaultValue::Text(DEFAULT_DIMENSION_RANGE),
        FilterParamName::Color | FilterParamName::PartnerId | FilterParamName::MajorPeriods => {
            DefaultValue::Absent
        }
        FilterParamName::InquireableOnly
        | FilterParamName::Offerable
        | FilterParamName::AtAuction
        | FilterParamName::Acquireable
        | FilterParamName::IncludeArtworksByFollowedArtists => DefaultValue::Flag(false),
        FilterParamName::ArtistIds => DefaultValue::EmptyList,
        FilterParamName::Unknown(_) => return None,
    };
    Some(value)
}

/// Returns `true` when `value` is the documented default for `name`.
///
/// Unknown dimensions are never default, so options for them are never
/// dropped as redundant.
#[must_use]
pub fn is_default(name: &FilterParamName, value: Option<&ParamValue>) -> bool {
    default_value(name).is_some_and(|default| default.matches(value))
}

/// Returns `true` when `option` carries its dimension's default value.
#[must_use]
pub fn is_default_option(option: &FilterOption) -> bool {
    is_default(&option.param_name, option.param_value.as_ref())
}

/// Options rendered as checked when a dimension has no other selection.
///
/// Gallery and institution share `partnerID`; only the first of the two
/// survives a union keyed by dimension.
#[must_use]
pub fn default_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new(FilterParamName::Sort, DEFAULT_SORT, "Default"),
        FilterOption::new(FilterParamName::Medium, DEFAULT_MEDIUM, "All"),
        FilterOption::new(FilterParamName::PriceRange, DEFAULT_PRICE_RANGE, "All"),
        FilterOption::new(FilterParamName::SIZE, DEFAULT_DIMENSION_RANGE, "All"),
        FilterOption::without_value(FilterParamName::GALLERY, "All").with_filter_key("gallery"),
        FilterOption::without_value(FilterParamName::INSTITUTION, "All").with_filter_key("institution"),
        FilterOption::without_value(FilterParamName::Color, "All"),
        FilterOption::new(FilterParamName::TIME_PERIOD, "*-*", "All"),
        FilterOption::new(FilterParamName::WAYS_TO_BUY_BUY, false, "Buy now"),
        FilterOption::new(FilterParamName::WAYS_TO_BUY_INQUIRE, false, "Inquire"),
        FilterOption::new(FilterParamName::WAYS_TO_BUY_MAKE_OFFER, false, "Make offer"),
        FilterOption::new(FilterParamName::WAYS_TO_BUY_BID, false, "Bid"),
        FilterOption::new(FilterParamName::ARTISTS_I_FOLLOW, false, "All artists I follow"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_defaults_match_only_their_literal() {
        assert!(is_default(&FilterParamName::Sort, Some(&"-decayed_merch".into())));
        assert!(!is_default(&FilterParamName::Sort, Some(&"-published_at".into())));
        assert!(!is_default(&FilterParamName::Sort, None));
        assert!(is_default(&FilterParamName::PriceRange, Some(&"*-*".into())));
    }

    #[test]
    fn absent_defaults_match_missing_values() {
        assert!(is_default(&FilterParamName::Color, None));
        assert!(!is_default(&FilterParamName::Color, Some(&"red".into())));
    }

    #[test]
    fn flags_default_to_false() {
        assert!(is_default(&FilterParamName::AtAuction, Some(&false.into())));
        assert!(!is_default(&FilterParamName::AtAuction, Some(&true.into())));
        assert!(!is_default(&FilterParamName::AtAuction, None));
    }

    #[test]
    fn artists_and_unknown_dimensions_are_never_default() {
        assert!(!is_default(&FilterParamName::ArtistIds, None));
        assert!(!is_default(&FilterParamName::ArtistIds, Some(&"".into())));
        let unknown = FilterParamName::Unknown("edition".to_string());
        assert!(!is_default(&unknown, None));
    }

    #[test]
    fn display_defaults_cover_every_flag_dimension() {
        let options = default_options();
        let flags = options.iter().filter(|o| o.param_name.is_flag()).count();
        assert_eq!(flags, 5);
        assert!(options.iter().all(|o| !o.is_artist()));
    }
}
