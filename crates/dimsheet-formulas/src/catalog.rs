//! Formula catalog: the builtin electromagnetism set plus TOML loading.
//!
//! A [`FormulaCatalog`] owns an ordered list of formulas with unique ids.
//! Catalog order is meaningful: matchers and scorers preserve it for ties,
//! so two catalogs with the same entries in a different order can rank
//! results differently.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use dimsheet_model::{Formula, FormulaVariable, UnitVec};
use dimsheet_units::catalog::{
    AMPERE, COULOMB, FARAD, HENRY, JOULE, METER, NEWTON, OHM, SECOND, TESLA, VOLT, WATT, WEBER,
};
use serde::Deserialize;

use crate::error::FormulaError;

/// Ordered, id-unique collection of formulas.
#[derive(Debug, Clone)]
pub struct FormulaCatalog {
    formulas: Vec<Formula>,
}

impl FormulaCatalog {
    /// Builds a catalog from an explicit formula list, rejecting duplicate ids.
    pub fn from_formulas(formulas: Vec<Formula>) -> Result<Self, FormulaError> {
        let mut seen = BTreeSet::new();
        for formula in &formulas {
            if !seen.insert(formula.id.clone()) {
                return Err(FormulaError::DuplicateId {
                    id: formula.id.clone(),
                });
            }
        }
        Ok(Self { formulas })
    }

    /// The electromagnetism formula set shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        // Ids are assigned by hand below and checked unique in tests, so the
        // duplicate scan in `from_formulas` is skipped here.
        Self {
            formulas: builtin_formulas(),
        }
    }

    /// Parses a catalog from TOML text using `[[formula]]` tables.
    pub fn from_toml_str(input: &str) -> Result<Self, FormulaError> {
        let file: CatalogFile = toml::from_str(input)?;
        Self::from_formulas(file.formulas)
    }

    /// Reads and parses a TOML catalog file.
    pub fn load_from_path(path: &Path) -> Result<Self, FormulaError> {
        let raw = fs::read_to_string(path).map_err(|source| FormulaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    #[must_use]
    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Formula> {
        self.formulas.iter().find(|formula| formula.id == id)
    }
}

/// On-disk shape of a TOML catalog: a list of `[[formula]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "formula")]
    formulas: Vec<Formula>,
}

fn formula(
    id: &str,
    name: &str,
    latex: &str,
    variables: &[(&str, UnitVec)],
    result_unit: UnitVec,
    description: &str,
) -> Formula {
    Formula {
        id: id.to_owned(),
        name: name.to_owned(),
        latex: latex.to_owned(),
        variables: variables
            .iter()
            .map(|&(name, unit)| FormulaVariable {
                name: name.to_owned(),
                unit,
            })
            .collect(),
        result_unit,
        description: Some(description.to_owned()),
    }
}

/// The introductory electromagnetism formula table, in presentation order.
#[allow(clippy::too_many_lines)]
fn builtin_formulas() -> Vec<Formula> {
    let newton_per_coulomb = NEWTON.divide(COULOMB);
    let volt_per_meter = VOLT.divide(METER);
    let square_meter = METER.power(2);
    let meter_per_second = METER.divide(SECOND);
    let per_meter = UnitVec::DIMENSIONLESS.divide(METER);
    let per_cubic_meter = UnitVec::DIMENSIONLESS.divide(METER.power(3));
    let per_second = UnitVec::DIMENSIONLESS.divide(SECOND);
    let joule_per_cubic_meter = JOULE.divide(METER.power(3));

    vec![
        formula(
            "coulomb_law",
            "Coulomb's Law",
            "F = k \\frac{q_1 q_2}{r^2}",
            &[("q_1", COULOMB), ("q_2", COULOMB), ("r", METER)],
            NEWTON,
            "Force between two point charges",
        ),
        formula(
            "coulomb_law_vector",
            "Coulomb's Law (Vector Form)",
            "\\vec{F} = k \\frac{q_1 q_2}{r^2} \\hat{r}",
            &[("q_1", COULOMB), ("q_2", COULOMB), ("r", METER)],
            NEWTON,
            "Vector form of Coulomb force",
        ),
        formula(
            "electric_field_force",
            "Electric Field from Force",
            "E = \\frac{F}{q}",
            &[("F", NEWTON), ("q", COULOMB)],
            newton_per_coulomb,
            "Electric field strength",
        ),
        formula(
            "electric_field_point_charge",
            "Electric Field (Point Charge)",
            "E = k \\frac{q}{r^2}",
            &[("q", COULOMB), ("r", METER)],
            newton_per_coulomb,
            "Electric field from point charge",
        ),
        formula(
            "electric_field_voltage",
            "Electric Field from Voltage",
            "E = \\frac{V}{d}",
            &[("V", VOLT), ("d", METER)],
            volt_per_meter,
            "Uniform electric field",
        ),
        formula(
            "electric_potential_energy",
            "Electric Potential Energy",
            "U = k \\frac{q_1 q_2}{r}",
            &[("q_1", COULOMB), ("q_2", COULOMB), ("r", METER)],
            JOULE,
            "Potential energy of two charges",
        ),
        formula(
            "potential_energy_voltage",
            "Potential Energy from Voltage",
            "U = qV",
            &[("q", COULOMB), ("V", VOLT)],
            JOULE,
            "Potential energy of charge in field",
        ),
        formula(
            "voltage_point_charge",
            "Voltage (Point Charge)",
            "V = k \\frac{q}{r}",
            &[("q", COULOMB), ("r", METER)],
            VOLT,
            "Electric potential from point charge",
        ),
        formula(
            "voltage_energy",
            "Voltage from Energy",
            "V = \\frac{U}{q}",
            &[("U", JOULE), ("q", COULOMB)],
            VOLT,
            "Electric potential",
        ),
        formula(
            "voltage_field",
            "Voltage from Field",
            "V = Ed",
            &[("E", volt_per_meter), ("d", METER)],
            VOLT,
            "Voltage in uniform field",
        ),
        formula(
            "capacitance_def",
            "Capacitance Definition",
            "C = \\frac{Q}{V}",
            &[("Q", COULOMB), ("V", VOLT)],
            FARAD,
            "Capacitance",
        ),
        formula(
            "parallel_plate_capacitor",
            "Parallel Plate Capacitor",
            "C = \\epsilon_0 \\frac{A}{d}",
            &[("A", square_meter), ("d", METER)],
            FARAD,
            "Capacitance of parallel plates",
        ),
        formula(
            "capacitor_energy",
            "Capacitor Energy",
            "U = \\frac{1}{2}CV^2",
            &[("C", FARAD), ("V", VOLT)],
            JOULE,
            "Energy stored in capacitor",
        ),
        formula(
            "capacitor_energy_charge",
            "Capacitor Energy (Charge)",
            "U = \\frac{Q^2}{2C}",
            &[("Q", COULOMB), ("C", FARAD)],
            JOULE,
            "Energy in terms of charge",
        ),
        formula(
            "capacitor_energy_qv",
            "Capacitor Energy (Q-V)",
            "U = \\frac{1}{2}QV",
            &[("Q", COULOMB), ("V", VOLT)],
            JOULE,
            "Energy in terms of Q and V",
        ),
        formula(
            "capacitors_series",
            "Capacitors in Series",
            "\\frac{1}{C_{eq}} = \\frac{1}{C_1} + \\frac{1}{C_2}",
            &[("C_1", FARAD), ("C_2", FARAD)],
            FARAD,
            "Equivalent capacitance (series)",
        ),
        formula(
            "capacitors_parallel",
            "Capacitors in Parallel",
            "C_{eq} = C_1 + C_2",
            &[("C_1", FARAD), ("C_2", FARAD)],
            FARAD,
            "Equivalent capacitance (parallel)",
        ),
        formula(
            "current_def",
            "Current Definition",
            "I = \\frac{Q}{t}",
            &[("Q", COULOMB), ("t", SECOND)],
            AMPERE,
            "Electric current",
        ),
        formula(
            "current_drift",
            "Current (Drift Velocity)",
            "I = nqv_d A",
            &[
                ("n", per_cubic_meter),
                ("q", COULOMB),
                ("v_d", meter_per_second),
                ("A", square_meter),
            ],
            AMPERE,
            "Current from drift velocity",
        ),
        formula(
            "ohms_law",
            "Ohm's Law",
            "V = IR",
            &[("I", AMPERE), ("R", OHM)],
            VOLT,
            "Ohm's law",
        ),
        formula(
            "resistance_def",
            "Resistance",
            "R = \\frac{V}{I}",
            &[("V", VOLT), ("I", AMPERE)],
            OHM,
            "Electrical resistance",
        ),
        formula(
            "resistance_material",
            "Resistance (Material)",
            "R = \\rho \\frac{L}{A}",
            &[("L", METER), ("A", square_meter)],
            OHM,
            "Resistance from geometry",
        ),
        formula(
            "power_vi",
            "Electric Power (V-I)",
            "P = VI",
            &[("V", VOLT), ("I", AMPERE)],
            WATT,
            "Electrical power",
        ),
        formula(
            "power_i2r",
            "Electric Power (I\u{b2}R)",
            "P = I^2 R",
            &[("I", AMPERE), ("R", OHM)],
            WATT,
            "Power dissipation",
        ),
        formula(
            "power_v2r",
            "Electric Power (V\u{b2}/R)",
            "P = \\frac{V^2}{R}",
            &[("V", VOLT), ("R", OHM)],
            WATT,
            "Power from voltage",
        ),
        formula(
            "resistors_series",
            "Resistors in Series",
            "R_{eq} = R_1 + R_2",
            &[("R_1", OHM), ("R_2", OHM)],
            OHM,
            "Equivalent resistance (series)",
        ),
        formula(
            "resistors_parallel",
            "Resistors in Parallel",
            "\\frac{1}{R_{eq}} = \\frac{1}{R_1} + \\frac{1}{R_2}",
            &[("R_1", OHM), ("R_2", OHM)],
            OHM,
            "Equivalent resistance (parallel)",
        ),
        formula(
            "rc_time_constant",
            "RC Time Constant",
            "\\tau = RC",
            &[("R", OHM), ("C", FARAD)],
            SECOND,
            "Time constant for RC circuit",
        ),
        formula(
            "rc_charge",
            "RC Circuit Charging",
            "Q(t) = Q_0(1 - e^{-t/RC})",
            &[("Q_0", COULOMB), ("t", SECOND), ("R", OHM), ("C", FARAD)],
            COULOMB,
            "Charge vs time (charging)",
        ),
        formula(
            "rc_discharge",
            "RC Circuit Discharging",
            "Q(t) = Q_0 e^{-t/RC}",
            &[("Q_0", COULOMB), ("t", SECOND), ("R", OHM), ("C", FARAD)],
            COULOMB,
            "Charge vs time (discharging)",
        ),
        formula(
            "magnetic_force_charge",
            "Magnetic Force on Charge",
            "F = qvB\\sin\\theta",
            &[("q", COULOMB), ("v", meter_per_second), ("B", TESLA)],
            NEWTON,
            "Lorentz force",
        ),
        formula(
            "magnetic_force_current",
            "Magnetic Force on Current",
            "F = ILB\\sin\\theta",
            &[("I", AMPERE), ("L", METER), ("B", TESLA)],
            NEWTON,
            "Force on current-carrying wire",
        ),
        formula(
            "cyclotron_radius",
            "Cyclotron Radius",
            "r = \\frac{mv}{qB}",
            // known defect: the mass variable carries no dimensions
            &[
                ("m", METER.power(0)),
                ("v", meter_per_second),
                ("q", COULOMB),
                ("B", TESLA),
            ],
            METER,
            "Radius of charged particle in B field",
        ),
        formula(
            "magnetic_field_wire",
            "Magnetic Field (Long Wire)",
            "B = \\frac{\\mu_0 I}{2\\pi r}",
            &[("I", AMPERE), ("r", METER)],
            TESLA,
            "B field from straight wire",
        ),
        formula(
            "magnetic_field_solenoid",
            "Magnetic Field (Solenoid)",
            "B = \\mu_0 n I",
            &[("n", per_meter), ("I", AMPERE)],
            TESLA,
            "B field inside solenoid",
        ),
        formula(
            "magnetic_field_loop",
            "Magnetic Field (Loop Center)",
            "B = \\frac{\\mu_0 I}{2R}",
            &[("I", AMPERE), ("R", METER)],
            TESLA,
            "B field at center of current loop",
        ),
        formula(
            "magnetic_flux",
            "Magnetic Flux",
            "\\Phi_B = BA\\cos\\theta",
            &[("B", TESLA), ("A", square_meter)],
            WEBER,
            "Magnetic flux",
        ),
        formula(
            "faraday_law",
            "Faraday's Law",
            "\\mathcal{E} = -\\frac{d\\Phi_B}{dt}",
            &[("Phi_B", WEBER), ("t", SECOND)],
            VOLT,
            "Induced EMF",
        ),
        formula(
            "motional_emf",
            "Motional EMF",
            "\\mathcal{E} = BLv",
            &[("B", TESLA), ("L", METER), ("v", meter_per_second)],
            VOLT,
            "EMF from moving conductor",
        ),
        formula(
            "inductance_def",
            "Inductance Definition",
            "L = \\frac{\\Phi_B}{I}",
            &[("Phi_B", WEBER), ("I", AMPERE)],
            HENRY,
            "Self-inductance",
        ),
        formula(
            "solenoid_inductance",
            "Solenoid Inductance",
            "L = \\mu_0 n^2 A l",
            &[("n", per_meter), ("A", square_meter), ("l", METER)],
            HENRY,
            "Inductance of solenoid",
        ),
        formula(
            "inductor_emf",
            "Inductor EMF",
            "\\mathcal{E} = -L\\frac{dI}{dt}",
            &[("L", HENRY), ("I", AMPERE), ("t", SECOND)],
            VOLT,
            "EMF across inductor",
        ),
        formula(
            "inductor_energy",
            "Inductor Energy",
            "U = \\frac{1}{2}LI^2",
            &[("L", HENRY), ("I", AMPERE)],
            JOULE,
            "Energy stored in inductor",
        ),
        formula(
            "rl_time_constant",
            "RL Time Constant",
            "\\tau = \\frac{L}{R}",
            &[("L", HENRY), ("R", OHM)],
            SECOND,
            "Time constant for RL circuit",
        ),
        formula(
            "rl_current_growth",
            "RL Circuit (Current Growth)",
            "I(t) = I_0(1 - e^{-Rt/L})",
            &[("I_0", AMPERE), ("t", SECOND), ("R", OHM), ("L", HENRY)],
            AMPERE,
            "Current growth in RL circuit",
        ),
        formula(
            "rl_current_decay",
            "RL Circuit (Current Decay)",
            "I(t) = I_0 e^{-Rt/L}",
            &[("I_0", AMPERE), ("t", SECOND), ("R", OHM), ("L", HENRY)],
            AMPERE,
            "Current decay in RL circuit",
        ),
        formula(
            "lc_frequency",
            "LC Oscillation Frequency",
            "\\omega = \\frac{1}{\\sqrt{LC}}",
            &[("L", HENRY), ("C", FARAD)],
            per_second,
            "Angular frequency of LC circuit",
        ),
        formula(
            "lc_period",
            "LC Oscillation Period",
            "T = 2\\pi\\sqrt{LC}",
            &[("L", HENRY), ("C", FARAD)],
            SECOND,
            "Period of LC oscillation",
        ),
        formula(
            "capacitive_reactance",
            "Capacitive Reactance",
            "X_C = \\frac{1}{\\omega C}",
            &[("omega", per_second), ("C", FARAD)],
            OHM,
            "Capacitive reactance",
        ),
        formula(
            "inductive_reactance",
            "Inductive Reactance",
            "X_L = \\omega L",
            &[("omega", per_second), ("L", HENRY)],
            OHM,
            "Inductive reactance",
        ),
        formula(
            "impedance",
            "AC Impedance",
            "Z = \\sqrt{R^2 + (X_L - X_C)^2}",
            &[("R", OHM), ("X_L", OHM), ("X_C", OHM)],
            OHM,
            "Impedance in RLC circuit",
        ),
        formula(
            "resonance_frequency",
            "Resonance Frequency",
            "\\omega_0 = \\frac{1}{\\sqrt{LC}}",
            &[("L", HENRY), ("C", FARAD)],
            per_second,
            "Resonance frequency",
        ),
        formula(
            "electric_energy_density",
            "Electric Energy Density",
            "u_E = \\frac{1}{2}\\epsilon_0 E^2",
            &[("E", volt_per_meter)],
            joule_per_cubic_meter,
            "Energy density in electric field",
        ),
        formula(
            "magnetic_energy_density",
            "Magnetic Energy Density",
            "u_B = \\frac{B^2}{2\\mu_0}",
            &[("B", TESLA)],
            joule_per_cubic_meter,
            "Energy density in magnetic field",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = FormulaCatalog::builtin();
        let ids: BTreeSet<&str> = catalog
            .formulas()
            .iter()
            .map(|formula| formula.id.as_str())
            .collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn builtin_covers_the_full_electromagnetism_table() {
        assert_eq!(FormulaCatalog::builtin().len(), 54);
    }

    #[test]
    fn ohms_law_entry_is_well_formed() {
        let catalog = FormulaCatalog::builtin();
        let ohms = catalog.get("ohms_law").unwrap();
        assert_eq!(ohms.name, "Ohm's Law");
        assert_eq!(ohms.variable_count(), 2);
        assert_eq!(ohms.variables[0].unit, AMPERE);
        assert_eq!(ohms.variables[1].unit, OHM);
        assert_eq!(ohms.result_unit, VOLT);
    }

    #[test]
    fn cyclotron_radius_mass_has_no_dimensions() {
        let catalog = FormulaCatalog::builtin();
        let cyclotron = catalog.get("cyclotron_radius").unwrap();
        let mass = cyclotron
            .variables
            .iter()
            .find(|variable| variable.name == "m")
            .unwrap();
        assert!(mass.unit.is_dimensionless());
    }

    #[test]
    fn unknown_id_lookup_returns_none() {
        assert!(FormulaCatalog::builtin().get("perpetual_motion").is_none());
    }

    #[test]
    fn toml_catalog_parses() {
        let catalog = FormulaCatalog::from_toml_str(
            r#"
            [[formula]]
            id = "hookes_law"
            name = "Hooke's Law"
            latex = "F = -kx"
            result_unit = [1, -2, 1, 0, 0, 0, 0]

            [[formula.variables]]
            name = "x"
            unit = [1, 0, 0, 0, 0, 0, 0]
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        let hooke = catalog.get("hookes_law").unwrap();
        assert_eq!(hooke.variables[0].unit, METER);
        assert_eq!(hooke.result_unit, NEWTON);
        assert!(hooke.description.is_none());
    }

    #[test]
    fn empty_toml_is_an_empty_catalog() {
        let catalog = FormulaCatalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = FormulaCatalog::from_toml_str("[[formula]]\nid = 3\n").unwrap_err();
        assert!(matches!(err, FormulaError::Parse { .. }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let duplicate = formula("twice", "Twice", "x", &[], METER, "");
        let err = FormulaCatalog::from_formulas(vec![duplicate.clone(), duplicate]).unwrap_err();
        assert!(matches!(err, FormulaError::DuplicateId { id } if id == "twice"));
    }
}
