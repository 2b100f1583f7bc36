//! Marker pins, built once per process and shared by every marker.

use std::sync::OnceLock;

use shared_types::Incident;

pub const ICON_SIZE: (f64, f64) = (28.0, 42.0);
pub const ICON_ANCHOR: (f64, f64) = (14.0, 42.0);

static MARKER_ICONS: OnceLock<MarkerIcons> = OnceLock::new();

#[derive(Debug)]
pub struct MarkerIcons {
    felony: String,
    misdemeanor: String,
    violation: String,
    other: String,
}

/// Legend entries: (css modifier, label).
pub const LEGEND: [(&str, &str); 4] = [
    ("felony", "Felony"),
    ("misdemeanor", "Misdemeanor"),
    ("violation", "Violation"),
    ("other", "Other / unknown"),
];

impl MarkerIcons {
    fn build() -> Self {
        Self {
            felony: pin_svg("%23dc2626"),
            misdemeanor: pin_svg("%23f97316"),
            violation: pin_svg("%23eab308"),
            other: pin_svg("%236b7280"),
        }
    }

    /// Pin for an incident, colored by law category.
    pub fn for_incident(&self, incident: &Incident) -> &str {
        match incident.law_category.to_ascii_uppercase().as_str() {
            "FELONY" => &self.felony,
            "MISDEMEANOR" => &self.misdemeanor,
            "VIOLATION" => &self.violation,
            _ => &self.other,
        }
    }
}

pub fn marker_icons() -> &'static MarkerIcons {
    MARKER_ICONS.get_or_init(MarkerIcons::build)
}

fn pin_svg(fill_color: &str) -> String {
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='28' height='42' viewBox='0 0 28 42'%3E%3Cdefs%3E%3Cfilter id='shadow' x='-50%25' y='-50%25' width='200%25' height='200%25'%3E%3CfeDropShadow dx='0' dy='1' stdDeviation='1.5' flood-color='%23000' flood-opacity='0.25'/%3E%3C/filter%3E%3C/defs%3E%3Cpath fill='{}' stroke='%23ffffff' stroke-width='1.5' filter='url(%23shadow)' d='M14 2C8.5 2 4 6.5 4 12c0 8.5 10 26 10 26s10-17.5 10-26c0-5.5-4.5-10-10-10zm0 13.5c-1.9 0-3.5-1.6-3.5-3.5s1.6-3.5 3.5-3.5 3.5 1.6 3.5 3.5-1.6 3.5-3.5 3.5z'/%3E%3C/svg%3E",
        fill_color
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::IncidentRecord;

    fn with_category(category: Option<&str>) -> Incident {
        Incident::from_record(
            0,
            &IncidentRecord {
                law_cat_cd: category.map(str::to_string),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_icons_are_built_once() {
        assert!(std::ptr::eq(marker_icons(), marker_icons()));
    }

    #[test]
    fn test_icon_follows_law_category() {
        let icons = marker_icons();

        assert!(icons.for_incident(&with_category(Some("FELONY"))).contains("%23dc2626"));
        assert!(icons
            .for_incident(&with_category(Some("misdemeanor")))
            .contains("%23f97316"));
        assert!(icons.for_incident(&with_category(None)).contains("%236b7280"));
    }
}
