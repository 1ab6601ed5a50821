//! The fixed service catalog: offerings, addons, time slots and visit
//! frequencies.
//!
//! Everything here is static configuration loaded once at startup. Screens
//! and the booking wizard render from these tables instead of embedding
//! literals, so prices and slot lists have exactly one home.

use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

/// One of the cleaning offerings shown on the services and booking pages.
#[derive(Debug, PartialEq, Eq)]
pub struct ServiceOption {
    pub id: &'static str,
    pub name_key: &'static str,
    /// Base price in whole CAD dollars, before addons and frequency discount.
    pub base_price: i64,
    pub duration_key: &'static str,
    pub feature_keys: &'static [&'static str],
    pub icon: &'static str,
    pub popular: bool,
}

pub const SERVICES: [ServiceOption; 3] = [
    ServiceOption {
        id: "residential",
        name_key: "service.residential",
        base_price: 120,
        duration_key: "service.residential.duration",
        feature_keys: &[
            "service.feature.dusting",
            "service.feature.floors",
            "service.feature.kitchen",
            "service.feature.bathrooms",
        ],
        icon: "🏠",
        popular: false,
    },
    ServiceOption {
        id: "deep",
        name_key: "service.deep",
        base_price: 180,
        duration_key: "service.deep.duration",
        feature_keys: &[
            "service.feature.everything_residential",
            "service.feature.baseboards",
            "service.feature.appliance_exteriors",
            "service.feature.light_fixtures",
        ],
        icon: "✨",
        popular: true,
    },
    ServiceOption {
        id: "commercial",
        name_key: "service.commercial",
        base_price: 200,
        duration_key: "service.commercial.duration",
        feature_keys: &[
            "service.feature.offices",
            "service.feature.common_areas",
            "service.feature.washrooms",
            "service.feature.after_hours",
        ],
        icon: "🏢",
        popular: false,
    },
];

/// A flat-priced extra the customer can attach to any offering.
#[derive(Debug, PartialEq, Eq)]
pub struct Addon {
    pub id: &'static str,
    pub name_key: &'static str,
    /// Flat price in whole CAD dollars.
    pub price: i64,
}

pub const ADDONS: [Addon; 6] = [
    Addon {
        id: "windows",
        name_key: "addon.windows",
        price: 30,
    },
    Addon {
        id: "fridge",
        name_key: "addon.fridge",
        price: 25,
    },
    Addon {
        id: "oven",
        name_key: "addon.oven",
        price: 25,
    },
    Addon {
        id: "cabinets",
        name_key: "addon.cabinets",
        price: 20,
    },
    Addon {
        id: "laundry",
        name_key: "addon.laundry",
        price: 20,
    },
    Addon {
        id: "balcony",
        name_key: "addon.balcony",
        price: 35,
    },
];

/// An hourly arrival window. Confirmation is manual and happens out-of-band,
/// so `available` is true for every slot today; the flag exists so a
/// rejected selection leaves the draft untouched.
#[derive(Debug, PartialEq, Eq)]
pub struct TimeSlot {
    pub time: &'static str,
    pub available: bool,
}

const fn slot_at(time: &'static str) -> TimeSlot {
    TimeSlot {
        time,
        available: true,
    }
}

pub const TIME_SLOTS: [TimeSlot; 10] = [
    slot_at("08:00"),
    slot_at("09:00"),
    slot_at("10:00"),
    slot_at("11:00"),
    slot_at("12:00"),
    slot_at("13:00"),
    slot_at("14:00"),
    slot_at("15:00"),
    slot_at("16:00"),
    slot_at("17:00"),
];

/// How often the customer wants the cleaning repeated. Recurring visits get
/// a fixed discount baked into the multiplier.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Frequency {
    #[default]
    OneTime,
    Weekly,
    BiWeekly,
    Monthly,
}

impl Frequency {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::OneTime => 1.0,
            Self::Weekly => 0.85,
            Self::BiWeekly => 0.90,
            Self::Monthly => 0.95,
        }
    }

    /// Discount shown next to the option, in whole percent.
    pub fn discount_percent(self) -> u8 {
        match self {
            Self::OneTime => 0,
            Self::Weekly => 15,
            Self::BiWeekly => 10,
            Self::Monthly => 5,
        }
    }

    pub fn name_key(self) -> &'static str {
        match self {
            Self::OneTime => "frequency.one_time",
            Self::Weekly => "frequency.weekly",
            Self::BiWeekly => "frequency.bi_weekly",
            Self::Monthly => "frequency.monthly",
        }
    }
}

/// Property types offered in the wizard's detail step.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PropertyType {
    Apartment,
    House,
    Townhouse,
    Office,
    Retail,
}

impl PropertyType {
    pub fn name_key(self) -> &'static str {
        match self {
            Self::Apartment => "property.apartment",
            Self::House => "property.house",
            Self::Townhouse => "property.townhouse",
            Self::Office => "property.office",
            Self::Retail => "property.retail",
        }
    }
}

pub fn services() -> &'static [ServiceOption] {
    &SERVICES
}

pub fn addons() -> &'static [Addon] {
    &ADDONS
}

pub fn time_slots() -> &'static [TimeSlot] {
    &TIME_SLOTS
}

pub fn service(id: &str) -> Option<&'static ServiceOption> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn addon(id: &str) -> Option<&'static Addon> {
    ADDONS.iter().find(|a| a.id == id)
}

pub fn slot(time: &str) -> Option<&'static TimeSlot> {
    TIME_SLOTS.iter().find(|s| s.time == time)
}

/// Parses a frequency from its wire form ("one-time", "weekly", ...).
pub fn frequency(s: &str) -> Option<Frequency> {
    Frequency::from_str(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn catalog_has_three_services_and_ten_slots() {
        assert_eq!(services().len(), 3);
        assert_eq!(time_slots().len(), 10);
        assert_eq!(time_slots().first().map(|s| s.time), Some("08:00"));
        assert_eq!(time_slots().last().map(|s| s.time), Some("17:00"));
    }

    #[test]
    fn lookups_hit_and_miss() {
        assert_eq!(service("commercial").map(|s| s.base_price), Some(200));
        assert!(service("industrial").is_none());
        assert_eq!(addon("windows").map(|a| a.price), Some(30));
        assert!(addon("chimney").is_none());
        assert!(slot("08:00").is_some());
        assert!(slot("07:00").is_none());
    }

    #[test]
    fn frequency_round_trips_through_wire_form() {
        for f in Frequency::iter() {
            assert_eq!(frequency(&f.to_string()), Some(f));
        }
        assert_eq!(frequency("bi-weekly"), Some(Frequency::BiWeekly));
        assert_eq!(frequency("fortnightly"), None);
    }

    #[test]
    fn discounts_match_multipliers() {
        for f in Frequency::iter() {
            let from_discount = 1.0 - f64::from(f.discount_percent()) / 100.0;
            assert!((f.multiplier() - from_discount).abs() < 1e-9);
        }
    }
}
