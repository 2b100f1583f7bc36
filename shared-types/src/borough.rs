use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::incident::Incident;

pub const ALL_BOROUGHS: &str = "All";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Borough {
    Bronx,
    Manhattan,
    Brooklyn,
    Queens,
    StatenIsland,
}

impl Borough {
    pub const ALL: [Borough; 5] = [
        Borough::Bronx,
        Borough::Manhattan,
        Borough::Brooklyn,
        Borough::Queens,
        Borough::StatenIsland,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Borough::Bronx => "Bronx",
            Borough::Manhattan => "Manhattan",
            Borough::Brooklyn => "Brooklyn",
            Borough::Queens => "Queens",
            Borough::StatenIsland => "Staten Island",
        }
    }

    /// Exact, case-insensitive lookup; the dataset spells boroughs in caps.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }

    pub fn matches(self, borough_name: &str) -> bool {
        self.name().eq_ignore_ascii_case(borough_name.trim())
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown borough: {0}")]
pub struct BoroughParseError(pub String);

impl FromStr for Borough {
    type Err = BoroughParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| BoroughParseError(s.to_string()))
    }
}

/// Selection in the map's borough dropdown.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoroughFilter {
    #[default]
    All,
    Only(Borough),
}

impl BoroughFilter {
    pub fn options() -> impl Iterator<Item = BoroughFilter> {
        std::iter::once(BoroughFilter::All).chain(Borough::ALL.into_iter().map(BoroughFilter::Only))
    }

    pub fn borough(self) -> Option<Borough> {
        match self {
            BoroughFilter::All => None,
            BoroughFilter::Only(borough) => Some(borough),
        }
    }

    pub fn matches(self, incident: &Incident) -> bool {
        match self {
            BoroughFilter::All => true,
            BoroughFilter::Only(borough) => borough.matches(&incident.borough),
        }
    }
}

impl fmt::Display for BoroughFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoroughFilter::All => f.write_str(ALL_BOROUGHS),
            BoroughFilter::Only(borough) => borough.fmt(f),
        }
    }
}

impl FromStr for BoroughFilter {
    type Err = BoroughParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_BOROUGHS) {
            return Ok(BoroughFilter::All);
        }
        s.parse().map(BoroughFilter::Only)
    }
}

/// Keeps the incidents in the selected borough, in fetch order.
pub fn filter_incidents(incidents: &[Incident], filter: BoroughFilter) -> Vec<Incident> {
    incidents
        .iter()
        .filter(|incident| filter.matches(incident))
        .cloned()
        .collect()
}

/// How many fetched incidents each dropdown option would show.
pub fn count_for(incidents: &[Incident], filter: BoroughFilter) -> usize {
    incidents.iter().filter(|incident| filter.matches(incident)).count()
}

/// Area name a comment is filed under: the canonical borough name. `None`
/// for boroughs the comments panel cannot list, so nothing is filed where
/// it could never be read back.
pub fn comment_area(borough_name: &str) -> Option<&'static str> {
    Borough::from_name(borough_name).map(Borough::name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incident::{normalize_all, IncidentRecord};

    fn incidents(boroughs: &[Option<&str>]) -> Vec<Incident> {
        let records: Vec<IncidentRecord> = boroughs
            .iter()
            .enumerate()
            .map(|(i, b)| IncidentRecord {
                cmplnt_num: Some(i.to_string()),
                boro_nm: b.map(str::to_string),
                ..Default::default()
            })
            .collect();
        normalize_all(&records)
    }

    fn keys(incidents: &[Incident]) -> Vec<&str> {
        incidents.iter().map(|i| i.key.as_str()).collect()
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("STATEN ISLAND".parse::<Borough>(), Ok(Borough::StatenIsland));
        assert_eq!("bronx".parse::<Borough>(), Ok(Borough::Bronx));
        assert_eq!(" all ".parse::<BoroughFilter>(), Ok(BoroughFilter::All));
        assert_eq!(
            "queens".parse::<BoroughFilter>(),
            Ok(BoroughFilter::Only(Borough::Queens))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(
            "Jersey City".parse::<BoroughFilter>(),
            Err(BoroughParseError("Jersey City".to_string()))
        );
        // Exact match only, no prefixes.
        assert!("Staten".parse::<Borough>().is_err());
    }

    #[test]
    fn test_all_returns_unfiltered_set() {
        let set = incidents(&[Some("BRONX"), None, Some("QUEENS"), Some("somewhere")]);
        assert_eq!(filter_incidents(&set, BoroughFilter::All), set);
    }

    #[test]
    fn test_concrete_borough_keeps_only_matches_in_order() {
        let set = incidents(&[
            Some("BROOKLYN"),
            Some("QUEENS"),
            Some("Brooklyn"),
            None,
            Some("brooklyn "),
        ]);
        let filtered = filter_incidents(&set, BoroughFilter::Only(Borough::Brooklyn));
        assert_eq!(keys(&filtered), vec!["0", "2", "4"]);
    }

    #[test]
    fn test_unknown_borough_matches_nothing_concrete() {
        let set = incidents(&[None]);
        for borough in Borough::ALL {
            assert!(filter_incidents(&set, BoroughFilter::Only(borough)).is_empty());
        }
    }

    #[test]
    fn test_filter_is_idempotent_and_commutes_with_all() {
        let set = incidents(&[
            Some("MANHATTAN"),
            Some("STATEN ISLAND"),
            Some("MANHATTAN"),
            Some("BRONX"),
        ]);
        for filter in BoroughFilter::options() {
            let once = filter_incidents(&set, filter);
            assert_eq!(filter_incidents(&once, filter), once);
            assert_eq!(filter_incidents(&once, BoroughFilter::All), once);
            assert_eq!(
                filter_incidents(&filter_incidents(&set, BoroughFilter::All), filter),
                once
            );
        }
    }

    #[test]
    fn test_counts_cover_every_option() {
        let set = incidents(&[Some("QUEENS"), Some("QUEENS"), Some("BRONX"), None]);
        assert_eq!(count_for(&set, BoroughFilter::All), 4);
        assert_eq!(count_for(&set, BoroughFilter::Only(Borough::Queens)), 2);
        assert_eq!(count_for(&set, BoroughFilter::Only(Borough::Manhattan)), 0);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for filter in BoroughFilter::options() {
            assert_eq!(filter.to_string().parse::<BoroughFilter>(), Ok(filter));
        }
    }

    #[test]
    fn test_comment_area_canonicalizes_known_boroughs() {
        assert_eq!(comment_area("STATEN ISLAND"), Some("Staten Island"));
        assert_eq!(comment_area(" bronx "), Some("Bronx"));
    }

    #[test]
    fn test_comment_area_is_listable_by_the_panel() {
        // Every area a comment can be filed under is one a filter option reads back.
        for name in ["Unknown", "N/A", "NEWARK", ""] {
            assert_eq!(comment_area(name), None);
        }
        for option in BoroughFilter::options() {
            if let Some(borough) = option.borough() {
                let area = comment_area(&borough.name().to_ascii_uppercase());
                assert_eq!(area, Some(borough.name()));
            }
        }
    }
}
