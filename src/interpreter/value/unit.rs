use std::{
    f64::consts::PI,
    fmt::{self, Display},
};

use crate::{
    interpreter::value::core::format_number,
    util::num::{DISPLAY_DIGITS, round_significant},
};

/// The physical dimension a unit measures. Only units of equal base can be
/// added, compared, or converted into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// Metres.
    Length,
    /// Square metres.
    Surface,
    /// Cubic metres.
    Volume,
    /// Kilograms.
    Mass,
    /// Seconds.
    Time,
    /// Radians.
    Angle,
    /// Amperes.
    Current,
}

impl Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Length => "length",
            Self::Surface => "surface",
            Self::Volume => "volume",
            Self::Mass => "mass",
            Self::Time => "time",
            Self::Angle => "angle",
            Self::Current => "current",
        };
        write!(f, "{name}")
    }
}

/// A named unit and its size in SI units of its base.
#[derive(Debug, PartialEq)]
pub struct UnitDef {
    /// The name used in expressions.
    pub name:   &'static str,
    /// The dimension measured.
    pub base:   Base,
    /// How many SI units one of this unit is.
    pub factor: f64,
}

const fn def(name: &'static str, base: Base, factor: f64) -> UnitDef {
    UnitDef { name, base, factor }
}

/// Every unit known to the engine.
pub static UNITS: &[UnitDef] = &[def("m", Base::Length, 1.0),
                                 def("cm", Base::Length, 0.01),
                                 def("mm", Base::Length, 0.001),
                                 def("km", Base::Length, 1000.0),
                                 def("inch", Base::Length, 0.0254),
                                 def("ft", Base::Length, 0.3048),
                                 def("yd", Base::Length, 0.9144),
                                 def("mi", Base::Length, 1609.344),
                                 def("m2", Base::Surface, 1.0),
                                 def("cm2", Base::Surface, 1e-4),
                                 def("km2", Base::Surface, 1e6),
                                 def("sqft", Base::Surface, 0.092_903_04),
                                 def("acre", Base::Surface, 4_046.856_422_4),
                                 def("ha", Base::Surface, 10_000.0),
                                 def("m3", Base::Volume, 1.0),
                                 def("l", Base::Volume, 0.001),
                                 def("ml", Base::Volume, 1e-6),
                                 def("gallon", Base::Volume, 0.003_785_411_784),
                                 def("kg", Base::Mass, 1.0),
                                 def("g", Base::Mass, 0.001),
                                 def("mg", Base::Mass, 1e-6),
                                 def("ton", Base::Mass, 1000.0),
                                 def("lb", Base::Mass, 0.453_592_37),
                                 def("oz", Base::Mass, 0.028_349_523_125),
                                 def("s", Base::Time, 1.0),
                                 def("ms", Base::Time, 0.001),
                                 def("min", Base::Time, 60.0),
                                 def("h", Base::Time, 3600.0),
                                 def("day", Base::Time, 86_400.0),
                                 def("week", Base::Time, 604_800.0),
                                 def("rad", Base::Angle, 1.0),
                                 def("deg", Base::Angle, PI / 180.0),
                                 def("grad", Base::Angle, PI / 200.0),
                                 def("cycle", Base::Angle, 2.0 * PI),
                                 def("A", Base::Current, 1.0),
                                 def("mA", Base::Current, 0.001)];

/// A quantity such as `5 cm`, or a bare unit such as `cm`.
///
/// The quantity is stored in SI units of the base; a bare unit has no value
/// and acts as one of itself in arithmetic.
///
/// # Example
/// ```
/// use mathexpr::interpreter::value::unit::Unit;
///
/// let inch = Unit::parse("inch").unwrap();
/// let two_inches = inch.with_si_value(2.0 * inch.si_value());
/// let cm = Unit::parse("cm").unwrap();
///
/// assert_eq!(two_inches.to(&cm).unwrap().to_string(), "5.08 cm");
/// assert!(two_inches.to(&Unit::parse("kg").unwrap()).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    value: Option<f64>,
    def:   &'static UnitDef,
}

impl Unit {
    /// Looks up a bare unit by name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        UNITS.iter()
             .find(|def| def.name == name)
             .map(|def| Self { value: None, def })
    }

    /// The unit's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.def.name
    }

    /// The unit's base dimension.
    #[must_use]
    pub const fn base(&self) -> Base {
        self.def.base
    }

    /// Returns `true` for a quantity, `false` for a bare unit.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// The quantity in SI units; a bare unit counts as one of itself.
    #[must_use]
    pub fn si_value(&self) -> f64 {
        self.value.unwrap_or(self.def.factor)
    }

    /// The quantity expressed in this unit.
    #[must_use]
    pub fn scaled_value(&self) -> f64 {
        self.si_value() / self.def.factor
    }

    /// The same unit holding a different SI quantity.
    #[must_use]
    pub const fn with_si_value(&self, value: f64) -> Self {
        Self { value: Some(value),
               def:   self.def, }
    }

    /// Returns `true` when both units measure the same dimension.
    #[must_use]
    pub fn equal_base(&self, other: &Self) -> bool {
        self.def.base == other.def.base
    }

    /// Expresses this quantity in the target unit, or `None` when the bases
    /// differ.
    #[must_use]
    pub fn to(&self, target: &Self) -> Option<Self> {
        self.equal_base(target).then(|| Self { value: Some(self.si_value()),
                                               def:   target.def, })
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_none() {
            return write!(f, "{}", self.def.name);
        }
        let shown = round_significant(self.scaled_value(), DISPLAY_DIGITS);
        write!(f, "{} {}", format_number(shown), self.def.name)
    }
}
