//! Reference tables for SI base units, named derived units, and the token
//! vocabulary used by the normalizer.
//!
//! Slot order everywhere is m, s, kg, A, K, mol, cd.

use dimsheet_model::UnitVec;

pub const METER: UnitVec = UnitVec::new([1, 0, 0, 0, 0, 0, 0]);
pub const SECOND: UnitVec = UnitVec::new([0, 1, 0, 0, 0, 0, 0]);
pub const KILOGRAM: UnitVec = UnitVec::new([0, 0, 1, 0, 0, 0, 0]);
pub const AMPERE: UnitVec = UnitVec::new([0, 0, 0, 1, 0, 0, 0]);
pub const KELVIN: UnitVec = UnitVec::new([0, 0, 0, 0, 1, 0, 0]);
pub const MOLE: UnitVec = UnitVec::new([0, 0, 0, 0, 0, 1, 0]);
pub const CANDELA: UnitVec = UnitVec::new([0, 0, 0, 0, 0, 0, 1]);

pub const HERTZ: UnitVec = UnitVec::new([0, -1, 0, 0, 0, 0, 0]);
pub const NEWTON: UnitVec = UnitVec::new([1, -2, 1, 0, 0, 0, 0]);
pub const PASCAL: UnitVec = UnitVec::new([-1, -2, 1, 0, 0, 0, 0]);
pub const JOULE: UnitVec = UnitVec::new([2, -2, 1, 0, 0, 0, 0]);
pub const WATT: UnitVec = UnitVec::new([2, -3, 1, 0, 0, 0, 0]);
pub const COULOMB: UnitVec = UnitVec::new([0, 1, 0, 1, 0, 0, 0]);
pub const VOLT: UnitVec = UnitVec::new([2, -3, 1, -1, 0, 0, 0]);
pub const FARAD: UnitVec = UnitVec::new([-2, 4, -1, 2, 0, 0, 0]);
pub const OHM: UnitVec = UnitVec::new([2, -3, 1, -2, 0, 0, 0]);
pub const SIEMENS: UnitVec = UnitVec::new([-2, 3, -1, 2, 0, 0, 0]);
pub const WEBER: UnitVec = UnitVec::new([2, -2, 1, -1, 0, 0, 0]);
pub const TESLA: UnitVec = UnitVec::new([0, -2, 1, -1, 0, 0, 0]);
pub const HENRY: UnitVec = UnitVec::new([2, -2, 1, -2, 0, 0, 0]);

/// One SI base unit.
#[derive(Debug, Clone, Copy)]
pub struct BaseUnitDef {
    pub symbol: &'static str,
    pub dimension: &'static str,
    pub unit: UnitVec,
}

/// The seven base units, in slot order.
pub const BASE_UNITS: [BaseUnitDef; 7] = [
    BaseUnitDef {
        symbol: "m",
        dimension: "length",
        unit: METER,
    },
    BaseUnitDef {
        symbol: "s",
        dimension: "time",
        unit: SECOND,
    },
    BaseUnitDef {
        symbol: "kg",
        dimension: "mass",
        unit: KILOGRAM,
    },
    BaseUnitDef {
        symbol: "A",
        dimension: "electric current",
        unit: AMPERE,
    },
    BaseUnitDef {
        symbol: "K",
        dimension: "temperature",
        unit: KELVIN,
    },
    BaseUnitDef {
        symbol: "mol",
        dimension: "amount of substance",
        unit: MOLE,
    },
    BaseUnitDef {
        symbol: "cd",
        dimension: "luminous intensity",
        unit: CANDELA,
    },
];

/// A named derived unit the renderer may substitute for a base-unit product.
#[derive(Debug, Clone, Copy)]
pub struct DerivedUnitDef {
    pub symbol: &'static str,
    pub unit: UnitVec,
    /// Notational complexity of the symbol relative to its base expansion.
    /// Catalog metadata; candidate selection during rendering scores factor
    /// counts and keeps the earliest catalog entry on ties.
    pub complexity: u8,
}

/// Named derived units, in the canonical catalog order the renderer and the
/// plain-text formatter search.
pub const DERIVED_UNITS: [DerivedUnitDef; 13] = [
    DerivedUnitDef {
        symbol: "Hz",
        unit: HERTZ,
        complexity: 1,
    },
    DerivedUnitDef {
        symbol: "N",
        unit: NEWTON,
        complexity: 3,
    },
    DerivedUnitDef {
        symbol: "Pa",
        unit: PASCAL,
        complexity: 3,
    },
    DerivedUnitDef {
        symbol: "J",
        unit: JOULE,
        complexity: 3,
    },
    DerivedUnitDef {
        symbol: "W",
        unit: WATT,
        complexity: 4,
    },
    DerivedUnitDef {
        symbol: "C",
        unit: COULOMB,
        complexity: 2,
    },
    DerivedUnitDef {
        symbol: "V",
        unit: VOLT,
        complexity: 4,
    },
    DerivedUnitDef {
        symbol: "F",
        unit: FARAD,
        complexity: 4,
    },
    DerivedUnitDef {
        symbol: "Ω",
        unit: OHM,
        complexity: 5,
    },
    DerivedUnitDef {
        symbol: "S",
        unit: SIEMENS,
        complexity: 5,
    },
    DerivedUnitDef {
        symbol: "Wb",
        unit: WEBER,
        complexity: 4,
    },
    DerivedUnitDef {
        symbol: "T",
        unit: TESLA,
        complexity: 3,
    },
    DerivedUnitDef {
        symbol: "H",
        unit: HENRY,
        complexity: 5,
    },
];

/// SI prefixes accepted in front of unit tokens, magnitude order.
///
/// The micro prefix appears only in its Unicode spelling; the `\mu` escape
/// form is recognized by the normalizer's escape handling instead of the
/// token table.
pub const SI_PREFIXES: [&str; 20] = [
    "Y", "Z", "E", "P", "T", "G", "M", "k", "h", "da", "d", "c", "m", "μ", "n", "p", "f", "a",
    "z", "y",
];

/// Non-SI tokens the normalizer escapes but the algebra never sees.
pub const NON_SI_TOKENS: [&str; 8] = ["in", "ft", "yd", "mi", "lb", "min", "h", "atm"];

/// Resolve a unit symbol to its dimensional signature.
///
/// Covers the seven base units and the named derived units; `Ohm` is
/// accepted for `Ω` so queries can be typed on any keyboard.
#[must_use]
pub fn lookup_symbol(symbol: &str) -> Option<UnitVec> {
    if symbol == "Ohm" {
        return Some(OHM);
    }
    BASE_UNITS
        .iter()
        .find(|base| base.symbol == symbol)
        .map(|base| base.unit)
        .or_else(|| {
            DERIVED_UNITS
                .iter()
                .find(|derived| derived.symbol == symbol)
                .map(|derived| derived.unit)
        })
}
