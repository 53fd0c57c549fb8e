//! Tracked teams and their static profiles.

use crate::constants::{BILLS_ROUTE_COMPONENT, UNC_ROUTE_COMPONENT};

/// Stable identifier of a tracked team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamId {
    Bills,
    Unc,
}

/// Everything the feed layer needs to know about a team, keyed by [`TeamId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamProfile {
    pub id: TeamId,
    /// Route component under `/ics`.
    pub slug: &'static str,
    /// Short name used when rendering scores.
    pub short_name: &'static str,
    /// ESPN sport path segment (`football`, `basketball`).
    pub sport: &'static str,
    /// ESPN league path segment.
    pub league: &'static str,
    /// ESPN team abbreviation; the primary key for scoreboard matching.
    pub abbreviation: &'static str,
    /// Substrings of the ESPN display name, used only when no competitor
    /// carries the expected abbreviation.
    pub name_keywords: &'static [&'static str],
    /// Calendar color as a hex code.
    pub color: &'static str,
    pub game_hours: i64,
    /// Leading component of every event UID for this team.
    pub uid_prefix: &'static str,
}

const BILLS: TeamProfile = TeamProfile {
    id: TeamId::Bills,
    slug: BILLS_ROUTE_COMPONENT,
    short_name: "Bills",
    sport: "football",
    league: "nfl",
    abbreviation: "BUF",
    name_keywords: &["Buffalo", "Bills"],
    color: "#00338D",
    game_hours: 3,
    uid_prefix: "bills-2025",
};

const UNC: TeamProfile = TeamProfile {
    id: TeamId::Unc,
    slug: UNC_ROUTE_COMPONENT,
    short_name: "UNC",
    sport: "basketball",
    league: "mens-college-basketball",
    abbreviation: "UNC",
    name_keywords: &["North Carolina Tar Heels", "UNC"],
    color: "#7BAFD4",
    game_hours: 2,
    uid_prefix: "unc-2025",
};

impl TeamId {
    pub const ALL: [Self; 2] = [Self::Bills, Self::Unc];

    #[must_use]
    pub const fn profile(self) -> &'static TeamProfile {
        match self {
            Self::Bills => &BILLS,
            Self::Unc => &UNC,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.profile().slug
    }

    /// ## Summary
    /// Resolves a route slug back to its team.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == slug)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
