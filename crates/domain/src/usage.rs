//! Estimated annual usage hours per device kind.
//!
//! One configuration table consumed by one pure function, replacing the
//! per-category branching that used to be duplicated across display code.
//! Figures assume a four-person household; keywords match against the
//! device display name.

use crate::device::Category;

/// Fallback when neither a keyword nor a category default matches.
pub const DEFAULT_HOURS_PER_YEAR: u32 = 1200;

/// `(category, name keywords, hours/year)` — an empty keyword list marks
/// the category default. Keyword rows are consulted before the default.
const USAGE_TABLE: &[(Category, &[&str], u32)] = &[
    // Entertainment: TV runs evenings, the soundbar alongside it.
    (Category::Entertainment, &["Fernseher", "TV"], 2190),
    (Category::Entertainment, &["Konsole"], 912),
    (Category::Entertainment, &["Sound"], 1825),
    (Category::Entertainment, &[], 1460),
    // Cooling appliances never sleep.
    (Category::Cooling, &[], 8760),
    (Category::Heating, &["Boiler"], 2190),
    (Category::Heating, &["Dusche", "Bad"], 548),
    (Category::Heating, &[], 4380),
    (Category::Cleaning, &["Waschmaschine"], 208),
    (Category::Cleaning, &["Tumbler"], 156),
    (Category::Cleaning, &["Spülmaschine"], 365),
    (Category::Cleaning, &[], 200),
    (Category::Cooking, &["Herd"], 547),
    (Category::Cooking, &["Ofen", "Backofen"], 156),
    (Category::Cooking, &["Mikrowelle"], 146),
    (Category::Cooking, &[], 300),
    (Category::Network, &[], 8760),
    (Category::Electronics, &["PC"], 1825),
    (Category::Electronics, &["Smartphone"], 1460),
    (Category::Electronics, &[], 1200),
    (Category::PersonalCare, &["Haartrockner", "Föhn"], 146),
    (Category::PersonalCare, &["Zahnbürste"], 49),
    (Category::PersonalCare, &[], 80),
    (Category::Comfort, &["Ventilator"], 1460),
    (Category::Comfort, &["Luftbefeuchter"], 2920),
    (Category::Comfort, &[], 1200),
    (Category::Mobility, &["Auto"], 547),
    (Category::Mobility, &["Bike"], 156),
    (Category::Mobility, &["Scooter"], 104),
    (Category::Mobility, &[], 250),
    (Category::Lighting, &[], 2190),
    (Category::Ventilation, &[], 547),
];

/// Estimated hours per year a device of this kind actually runs.
///
/// Keyword rows for the category are checked in table order; the first
/// keyword contained in `name` wins. Otherwise the category default
/// applies, then [`DEFAULT_HOURS_PER_YEAR`].
#[must_use]
pub fn estimated_hours_per_year(category: Category, name: &str) -> u32 {
    let mut category_default = None;
    for (cat, keywords, hours) in USAGE_TABLE {
        if *cat != category {
            continue;
        }
        if keywords.is_empty() {
            category_default.get_or_insert(*hours);
        } else if keywords.iter().any(|kw| name.contains(kw)) {
            return *hours;
        }
    }
    category_default.unwrap_or(DEFAULT_HOURS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_match_keyword_before_category_default() {
        assert_eq!(
            estimated_hours_per_year(Category::Entertainment, "Fernseher"),
            2190
        );
        assert_eq!(
            estimated_hours_per_year(Category::Entertainment, "Videokonsole"),
            912
        );
    }

    #[test]
    fn should_fall_back_to_category_default() {
        assert_eq!(
            estimated_hours_per_year(Category::Entertainment, "Beamer"),
            1460
        );
        assert_eq!(estimated_hours_per_year(Category::Cleaning, "Roboter"), 200);
    }

    #[test]
    fn should_run_all_year_for_cooling_and_network() {
        assert_eq!(
            estimated_hours_per_year(Category::Cooling, "Kühlschrank"),
            8760
        );
        assert_eq!(estimated_hours_per_year(Category::Network, "Router"), 8760);
    }

    #[test]
    fn should_distinguish_heating_kinds_by_keyword() {
        assert_eq!(estimated_hours_per_year(Category::Heating, "Boiler"), 2190);
        assert_eq!(
            estimated_hours_per_year(Category::Heating, "Dusche/Bad"),
            548
        );
        assert_eq!(
            estimated_hours_per_year(Category::Heating, "Heizlüfter"),
            4380
        );
    }

    #[test]
    fn should_estimate_mobility_charging_hours() {
        assert_eq!(estimated_hours_per_year(Category::Mobility, "E-Auto"), 547);
        assert_eq!(estimated_hours_per_year(Category::Mobility, "E-Bike"), 156);
        assert_eq!(
            estimated_hours_per_year(Category::Mobility, "E-Scooter"),
            104
        );
    }
}
