use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of continents a destination card can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Continent {
    Africa,
    America,
    Asia,
    Europe,
    Oceania,
    Antarctica,
}

impl Continent {
    pub const ALL: [Continent; 6] = [
        Continent::Africa,
        Continent::America,
        Continent::Asia,
        Continent::Europe,
        Continent::Oceania,
        Continent::Antarctica,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Africa => "africa",
            Continent::America => "america",
            Continent::Asia => "asia",
            Continent::Europe => "europe",
            Continent::Oceania => "oceania",
            Continent::Antarctica => "antarctica",
        }
    }

    /// Label shown in the continent selector.
    pub fn label(&self) -> &'static str {
        match self {
            Continent::Africa => "África",
            Continent::America => "América",
            Continent::Asia => "Asia",
            Continent::Europe => "Europa",
            Continent::Oceania => "Oceanía",
            Continent::Antarctica => "Antártida",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContinent(pub String);

impl fmt::Display for UnknownContinent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown continent '{}'", self.0)
    }
}

impl std::error::Error for UnknownContinent {}

impl Continent {
    /// Accepts the id or the Spanish label (`Europa`, `Oceanía`, ...).
    /// Only configuration files are read this way; cards and the selector
    /// carry ids.
    pub fn from_label(value: &str) -> Result<Self, UnknownContinent> {
        if let Ok(continent) = value.parse() {
            return Ok(continent);
        }
        let folded = value.trim().to_lowercase();
        match folded.as_str() {
            "antartida" => Ok(Continent::Antarctica),
            _ => Continent::ALL
                .into_iter()
                .find(|c| c.label().to_lowercase() == folded)
                .ok_or_else(|| UnknownContinent(value.to_string())),
        }
    }
}

impl FromStr for Continent {
    type Err = UnknownContinent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase();
        Continent::ALL
            .into_iter()
            .find(|c| c.as_str() == folded)
            .ok_or_else(|| UnknownContinent(s.to_string()))
    }
}

/// A destination card as read from the page. Identity is its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationCard {
    pub continent: Option<Continent>,
    pub text: String,
}

impl DestinationCard {
    pub fn new(continent: Option<Continent>, text: impl Into<String>) -> Self {
        Self {
            continent,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContinentFilter {
    #[default]
    Any,
    Only(Continent),
    /// A selection outside the known continents; matches no card.
    Unrecognized(String),
}

impl ContinentFilter {
    pub fn from_selection(value: &str) -> Self {
        let folded = value.trim().to_lowercase();
        if folded.is_empty() || folded == "any" {
            return ContinentFilter::Any;
        }
        match folded.parse::<Continent>() {
            Ok(continent) => ContinentFilter::Only(continent),
            Err(_) => ContinentFilter::Unrecognized(folded),
        }
    }

    pub fn matches(&self, continent: Option<Continent>) -> bool {
        match self {
            ContinentFilter::Any => true,
            ContinentFilter::Only(selected) => continent == Some(*selected),
            ContinentFilter::Unrecognized(_) => false,
        }
    }
}

/// Normalised search inputs for one filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    query: String,
    continent: ContinentFilter,
}

impl FilterState {
    pub fn new(raw_query: &str, raw_continent: &str) -> Self {
        Self {
            query: raw_query.trim().to_lowercase(),
            continent: ContinentFilter::from_selection(raw_continent),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn continent(&self) -> &ContinentFilter {
        &self.continent
    }

    pub fn is_cleared(&self) -> bool {
        self.query.is_empty() && self.continent == ContinentFilter::Any
    }
}

/// How the presenter wants a card displayed after a filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisibility {
    Hidden,
    Shown,
    /// Shown after having been hidden; plays the entrance animation.
    Entering,
}

impl CardVisibility {
    pub fn is_visible(&self) -> bool {
        !matches!(self, CardVisibility::Hidden)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    pub visible: Vec<usize>,
    pub hidden: Vec<usize>,
}

impl Partition {
    pub fn total(&self) -> usize {
        self.visible.len() + self.hidden.len()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            visible: self.visible.len(),
            total: self.total(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub visible: usize,
    pub total: usize,
}

impl ResultSummary {
    pub fn all_shown(&self) -> bool {
        self.visible == self.total
    }

    pub fn none_shown(&self) -> bool {
        self.visible == 0
    }
}
