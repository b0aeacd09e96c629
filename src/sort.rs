use std::fmt;
use std::str::FromStr;

/// Listing order for a subreddit's front page.
///
/// Selection is fail-safe: an out-of-range menu choice or an unrecognized
/// name resolves to `Hot` instead of erroring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Best,
    New,
    Top,
    Rising,
    Hot,
}

impl SortOrder {
    /// Menu entries in prompt order, paired with their selection number.
    pub const MENU: [(u32, SortOrder); 5] = [
        (1, SortOrder::Best),
        (2, SortOrder::New),
        (3, SortOrder::Top),
        (4, SortOrder::Rising),
        (5, SortOrder::Hot),
    ];

    /// Map a menu choice to its order; anything outside 1..=5 is `Hot`.
    pub fn from_menu_choice(choice: u32) -> Self {
        Self::MENU
            .iter()
            .find(|(n, _)| *n == choice)
            .map(|(_, s)| *s)
            .unwrap_or(SortOrder::Hot)
    }

    /// Lowercase listing name as it appears in API paths.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Best => "best",
            SortOrder::New => "new",
            SortOrder::Top => "top",
            SortOrder::Rising => "rising",
            SortOrder::Hot => "hot",
        }
    }

    /// Capitalized label for the interactive menu.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Best => "Best",
            SortOrder::New => "New",
            SortOrder::Top => "Top",
            SortOrder::Rising => "Rising",
            SortOrder::Hot => "Hot",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "best" => SortOrder::Best,
            "new" => SortOrder::New,
            "top" => SortOrder::Top,
            "rising" => SortOrder::Rising,
            _ => SortOrder::Hot,
        })
    }
}
