//! Name-keyword category grouping for the suggestion panel.

use dimsheet_model::Formula;

/// A formula whose lowercased name contains any `any` keyword, and none of
/// the `none` keywords, lands in `name`.
struct CategoryRule {
    name: &'static str,
    any: &'static [&'static str],
    none: &'static [&'static str],
}

/// Rules in priority order; the first hit wins. "Voltage from Field" is an
/// Electric Field entry, "Inductive Reactance" is Induction, not AC.
const CATEGORY_RULES: [CategoryRule; 8] = [
    CategoryRule {
        name: "Electric Field",
        any: &["field"],
        none: &["magnetic"],
    },
    CategoryRule {
        name: "Electric Potential",
        any: &["voltage", "potential"],
        none: &[],
    },
    CategoryRule {
        name: "Capacitance",
        any: &["capacit"],
        none: &[],
    },
    CategoryRule {
        name: "Current & Resistance",
        any: &["current", "resistance", "ohm"],
        none: &[],
    },
    CategoryRule {
        name: "Power",
        any: &["power"],
        none: &[],
    },
    CategoryRule {
        name: "Magnetic Field",
        any: &["magnetic", "lorentz"],
        none: &[],
    },
    CategoryRule {
        name: "Induction",
        any: &["induct", "faraday", "emf"],
        none: &[],
    },
    CategoryRule {
        name: "AC Circuits",
        any: &["ac", "reactance", "impedance"],
        none: &[],
    },
];

/// Category for formulas no rule claims.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Category a formula's name sorts into.
#[must_use]
pub fn category_for(formula: &Formula) -> &'static str {
    let name = formula.name.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| {
            rule.any.iter().any(|keyword| name.contains(keyword))
                && !rule.none.iter().any(|keyword| name.contains(keyword))
        })
        .map_or(FALLBACK_CATEGORY, |rule| rule.name)
}

/// Groups formulas by category, keeping the fixed category order and
/// dropping categories nothing landed in.
#[must_use]
pub fn group_by_category<'a>(formulas: &'a [Formula]) -> Vec<(&'static str, Vec<&'a Formula>)> {
    let mut groups: Vec<(&'static str, Vec<&'a Formula>)> = CATEGORY_RULES
        .iter()
        .map(|rule| (rule.name, Vec::new()))
        .chain(std::iter::once((FALLBACK_CATEGORY, Vec::new())))
        .collect();

    for formula in formulas {
        let category = category_for(formula);
        if let Some((_, members)) = groups.iter_mut().find(|(name, _)| *name == category) {
            members.push(formula);
        }
    }

    groups.retain(|(_, members)| !members.is_empty());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FormulaCatalog;

    #[test]
    fn first_matching_rule_wins() {
        let catalog = FormulaCatalog::builtin();
        // field beats voltage; current beats magnetic.
        assert_eq!(
            category_for(catalog.get("voltage_field").unwrap()),
            "Electric Field"
        );
        assert_eq!(
            category_for(catalog.get("magnetic_force_current").unwrap()),
            "Current & Resistance"
        );
    }

    #[test]
    fn magnetic_field_formulas_stay_out_of_electric_field() {
        let catalog = FormulaCatalog::builtin();
        assert_eq!(
            category_for(catalog.get("magnetic_field_wire").unwrap()),
            "Magnetic Field"
        );
        assert_eq!(
            category_for(catalog.get("magnetic_energy_density").unwrap()),
            "Magnetic Field"
        );
    }

    #[test]
    fn reactance_entries_split_on_the_earlier_keywords() {
        let catalog = FormulaCatalog::builtin();
        assert_eq!(
            category_for(catalog.get("capacitive_reactance").unwrap()),
            "Capacitance"
        );
        assert_eq!(
            category_for(catalog.get("inductive_reactance").unwrap()),
            "Induction"
        );
        assert_eq!(category_for(catalog.get("impedance").unwrap()), "AC Circuits");
    }

    #[test]
    fn unclaimed_names_fall_back_to_other() {
        let catalog = FormulaCatalog::builtin();
        for id in [
            "coulomb_law",
            "rc_time_constant",
            "lc_period",
            "cyclotron_radius",
            "electric_energy_density",
            "resonance_frequency",
        ] {
            assert_eq!(
                category_for(catalog.get(id).unwrap()),
                FALLBACK_CATEGORY,
                "{id}"
            );
        }
    }

    #[test]
    fn grouping_partitions_the_catalog_in_category_order() {
        let catalog = FormulaCatalog::builtin();
        let groups = group_by_category(catalog.formulas());

        let names: Vec<&str> = groups.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "Electric Field",
                "Electric Potential",
                "Capacitance",
                "Current & Resistance",
                "Power",
                "Magnetic Field",
                "Induction",
                "AC Circuits",
                "Other",
            ]
        );

        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn empty_categories_are_dropped() {
        let catalog = FormulaCatalog::builtin();
        let only_coulomb = vec![catalog.get("coulomb_law").unwrap().clone()];
        let groups = group_by_category(&only_coulomb);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, FALLBACK_CATEGORY);
    }
}
