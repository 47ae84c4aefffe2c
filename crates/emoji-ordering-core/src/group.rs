// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Closed table of canonical emoji groups.
//!
//! The mapping from upstream display names is a `match`, not a runtime map:
//! adding a category is a code change. Declaration order is table order, which
//! is also the order range constants are emitted in.

use std::fmt;

/// One of the nine top-level emoji categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalGroup {
    /// `Smileys and emotions`
    SmileysAndEmotions,
    /// `People`
    People,
    /// `Animals and nature`
    AnimalsAndNature,
    /// `Food and drink`
    FoodAndDrink,
    /// `Travel and places`
    TravelAndPlaces,
    /// `Activities and events`
    ActivitiesAndEvents,
    /// `Objects`
    Objects,
    /// `Symbols`
    Symbols,
    /// `Flags`
    Flags,
}

impl CanonicalGroup {
    /// Every group, in table order.
    pub const ALL: [Self; 9] = [
        Self::SmileysAndEmotions,
        Self::People,
        Self::AnimalsAndNature,
        Self::FoodAndDrink,
        Self::TravelAndPlaces,
        Self::ActivitiesAndEvents,
        Self::Objects,
        Self::Symbols,
        Self::Flags,
    ];

    /// Exact, case-sensitive lookup of an upstream display name.
    pub fn from_display_name(name: &str) -> Option<Self> {
        match name {
            "Smileys and emotions" => Some(Self::SmileysAndEmotions),
            "People" => Some(Self::People),
            "Animals and nature" => Some(Self::AnimalsAndNature),
            "Food and drink" => Some(Self::FoodAndDrink),
            "Travel and places" => Some(Self::TravelAndPlaces),
            "Activities and events" => Some(Self::ActivitiesAndEvents),
            "Objects" => Some(Self::Objects),
            "Symbols" => Some(Self::Symbols),
            "Flags" => Some(Self::Flags),
            _ => None,
        }
    }

    /// Upstream display name for this group.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SmileysAndEmotions => "Smileys and emotions",
            Self::People => "People",
            Self::AnimalsAndNature => "Animals and nature",
            Self::FoodAndDrink => "Food and drink",
            Self::TravelAndPlaces => "Travel and places",
            Self::ActivitiesAndEvents => "Activities and events",
            Self::Objects => "Objects",
            Self::Symbols => "Symbols",
            Self::Flags => "Flags",
        }
    }

    /// Name of the generated `(start, count)` constant.
    pub const fn const_name(self) -> &'static str {
        match self {
            Self::SmileysAndEmotions => "SMILEYS_AND_EMOTIONS",
            Self::People => "PEOPLE",
            Self::AnimalsAndNature => "ANIMALS_AND_NATURE",
            Self::FoodAndDrink => "FOOD_AND_DRINK",
            Self::TravelAndPlaces => "TRAVEL_AND_PLACES",
            Self::ActivitiesAndEvents => "ACTIVITIES_AND_EVENTS",
            Self::Objects => "OBJECTS",
            Self::Symbols => "SYMBOLS",
            Self::Flags => "FLAGS",
        }
    }
}

impl fmt::Display for CanonicalGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.const_name())
    }
}

/// Resolve a display name; `None` means the group is not part of the ordering.
///
/// `None` is a normal outcome, not an error. Callers drop the group.
pub fn map_group_name(display_name: &str) -> Option<CanonicalGroup> {
    CanonicalGroup::from_display_name(display_name)
}
