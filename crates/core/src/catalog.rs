//! The thirteen standard NFFL fuel models.
//!
//! Each entry carries the stylized loadings, surface-to-volume ratios,
//! dead extinction moisture and bed depth published for the Northern
//! Forest Fire Laboratory models. [`StandardFuelModel::build`] turns an
//! entry into a ready [`FuelComplex`]; only moisture inputs remain to be
//! supplied before evaluation.

use serde::{Deserialize, Serialize};

use crate::complex::FuelComplex;
use crate::core_types::{Category, FuelParticle, SizeClass};
use crate::physics::WeightingMethod;

/// One particle slot of a catalog entry: σ (1/ft) and loading (lb/ft²).
struct ClassSpec {
    category: Category,
    size_class: SizeClass,
    sigma: f64,
    loading: f64,
}

struct ModelSpec {
    classes: &'static [ClassSpec],
    dead_extinction_moisture: f64,
    depth: f64,
}

const fn dead(size_class: SizeClass, sigma: f64, loading: f64) -> ClassSpec {
    ClassSpec {
        category: Category::Dead,
        size_class,
        sigma,
        loading,
    }
}

const fn live(sigma: f64, loading: f64) -> ClassSpec {
    ClassSpec {
        category: Category::Live,
        size_class: SizeClass::OneHour,
        sigma,
        loading,
    }
}

static SPECS: [ModelSpec; 13] = [
    // 1: short grass
    ModelSpec {
        classes: &[dead(SizeClass::OneHour, 3500.0, 0.034)],
        dead_extinction_moisture: 0.12,
        depth: 1.0,
    },
    // 2: timber grass and understory
    ModelSpec {
        classes: &[
            dead(SizeClass::OneHour, 3000.0, 0.092),
            dead(SizeClass::TenHour, 109.0, 0.046),
            dead(SizeClass::HundredHour, 30.0, 0.023),
            live(1500.0, 0.023),
        ],
        dead_extinction_moisture: 0.15,
        depth: 1.0,
    },
    // 3: tall grass
    ModelSpec {
        classes: &[dead(SizeClass::OneHour, 1500.0, 0.138)],
        dead_extinction_moisture: 0.25,
        depth: 2.5,
    },
    // 4: chaparral
    ModelSpec {
        classes: &[
            dead(SizeClass::OneHour, 2000.0, 0.230),
            dead(SizeClass::TenHour, 109.0, 0.184),
            dead(SizeClass::HundredHour, 30.0, 0.092),
            live(1500.0, 0.230),
        ],
        dead_extinction_moisture: 0.20,
        depth: 6.0,
    },
    // 5: brush
    ModelSpec {
        classes: &[
            dead(SizeClass::OneHour, 2000.0, 0.046),
            dead(SizeClass::TenHour, 109.0, 0.023),
            live(1500.0, 0.092),
        ],
        dead_extinction_moisture: 0.20,
        depth: 2.0,
    },
    // 6: dormant brush
    ModelSpec {
        classes: &[
            dead(SizeClass::OneHour, 1750.0, 0.069),
            dead(SizeClass::TenHour, 109.0, 0.115),
            dead(SizeClass::HundredHour, 30.0, 0.092),
        ],
        dead_extinction_moisture: 0.25,
        depth: 2.5,
    },
    // 7: southern rough
    ModelSpec {
        classes: &[
            dead(SizeClass::OneHour, 1750.0, 0.052),
            dead(SizeClass::TenHour, 109.0, 0.086),
            dead(SizeClass::HundredHour, 30.0, 0.069),
            live(1550.0, 0.017),
        ],
        dead_extinction_moisture: 0.40,
        depth: 2.5,
    },
    // 8: closed timber litter
    ModelSpec {
        classes: &[
            dead(SizeClass::OneHour, 2000.0, 0.069),
            dead(SizeClass::TenHour, 109.0, 0.046),
            dead(SizeClass::HundredHour, 30.0, 0.115),
        ],
        dead_extinction_moisture: 0.30,
        depth: 0.2,
    },
    // 9: hardwood litter
    ModelSpec {
        classes: &[
            dead(SizeClass::OneHour, 2500.0, 0.134),
            dead(SizeClass::TenHour, 109.0, 0.019),
            dead(SizeClass::HundredHour, 30.0, 0.007),
        ],
        dead_extinction_moisture: 0.25,
        depth: 0.2,
    },
    // 10: timber litter and understory
    ModelSpec {
        classes: &[
            dead(SizeClass::OneHour, 2000.0, 0.138),
            dead(SizeClass::TenHour, 109.0, 0.092),
            dead(SizeClass::HundredHour, 30.0, 0.230),
            live(1500.0, 0.092),
        ],
        dead_extinction_moisture: 0.25,
        depth: 1.0,
    },
    // 11: light logging slash
    ModelSpec {
        classes: &[
            dead(SizeClass::OneHour, 1500.0, 0.069),
            dead(SizeClass::TenHour, 109.0, 0.207),
            dead(SizeClass::HundredHour, 30.0, 0.253),
        ],
        dead_extinction_moisture: 0.15,
        depth: 1.0,
    },
    // 12: medium logging slash
    ModelSpec {
        classes: &[
            dead(SizeClass::OneHour, 1500.0, 0.184),
            dead(SizeClass::TenHour, 109.0, 0.644),
            dead(SizeClass::HundredHour, 30.0, 0.759),
        ],
        dead_extinction_moisture: 0.20,
        depth: 2.3,
    },
    // 13: heavy logging slash
    ModelSpec {
        classes: &[
            dead(SizeClass::OneHour, 1500.0, 0.322),
            dead(SizeClass::TenHour, 109.0, 1.058),
            dead(SizeClass::HundredHour, 30.0, 1.288),
        ],
        dead_extinction_moisture: 0.25,
        depth: 3.0,
    },
];

/// A standard NFFL fuel model, numbered 1 through 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StandardFuelModel {
    /// Model 1, short grass (1 ft).
    ShortGrass,
    /// Model 2, timber with a grass understory.
    TimberGrassUnderstory,
    /// Model 3, tall grass (2.5 ft).
    TallGrass,
    /// Model 4, chaparral (6 ft).
    Chaparral,
    /// Model 5, brush (2 ft).
    Brush,
    /// Model 6, dormant brush and hardwood slash.
    DormantBrush,
    /// Model 7, southern rough.
    SouthernRough,
    /// Model 8, closed timber litter.
    ClosedTimberLitter,
    /// Model 9, hardwood litter.
    HardwoodLitter,
    /// Model 10, timber litter with understory.
    TimberLitterUnderstory,
    /// Model 11, light logging slash.
    LightLoggingSlash,
    /// Model 12, medium logging slash.
    MediumLoggingSlash,
    /// Model 13, heavy logging slash.
    HeavyLoggingSlash,
}

impl StandardFuelModel {
    /// All thirteen models in catalog order.
    pub const ALL: [StandardFuelModel; 13] = [
        Self::ShortGrass,
        Self::TimberGrassUnderstory,
        Self::TallGrass,
        Self::Chaparral,
        Self::Brush,
        Self::DormantBrush,
        Self::SouthernRough,
        Self::ClosedTimberLitter,
        Self::HardwoodLitter,
        Self::TimberLitterUnderstory,
        Self::LightLoggingSlash,
        Self::MediumLoggingSlash,
        Self::HeavyLoggingSlash,
    ];

    /// Look up a model by its catalog number (1 through 13).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=13 => Some(Self::ALL[usize::from(number) - 1]),
            _ => None,
        }
    }

    /// The catalog number, 1 through 13.
    pub fn number(self) -> u8 {
        match self {
            Self::ShortGrass => 1,
            Self::TimberGrassUnderstory => 2,
            Self::TallGrass => 3,
            Self::Chaparral => 4,
            Self::Brush => 5,
            Self::DormantBrush => 6,
            Self::SouthernRough => 7,
            Self::ClosedTimberLitter => 8,
            Self::HardwoodLitter => 9,
            Self::TimberLitterUnderstory => 10,
            Self::LightLoggingSlash => 11,
            Self::MediumLoggingSlash => 12,
            Self::HeavyLoggingSlash => 13,
        }
    }

    /// The conventional descriptive name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ShortGrass => "short grass",
            Self::TimberGrassUnderstory => "timber grass and understory",
            Self::TallGrass => "tall grass",
            Self::Chaparral => "chaparral",
            Self::Brush => "brush",
            Self::DormantBrush => "dormant brush, hardwood slash",
            Self::SouthernRough => "southern rough",
            Self::ClosedTimberLitter => "closed timber litter",
            Self::HardwoodLitter => "hardwood litter",
            Self::TimberLitterUnderstory => "timber litter and understory",
            Self::LightLoggingSlash => "light logging slash",
            Self::MediumLoggingSlash => "medium logging slash",
            Self::HeavyLoggingSlash => "heavy logging slash",
        }
    }

    /// Assemble the catalog entry into a fuel complex under the given
    /// weighting method.
    ///
    /// Moistures are left unset; callers supply them before evaluation.
    ///
    /// # Panics
    ///
    /// Never panics in practice: the catalog constants are all strictly
    /// positive.
    pub fn build(self, method: WeightingMethod) -> FuelComplex {
        let spec = self.spec();
        let mut fuel = FuelComplex::new(method);
        for class in spec.classes {
            let particle = FuelParticle::new(method, class.sigma, class.loading)
                .expect("catalog constants are valid");
            fuel.set_particle(class.category, class.size_class, particle)
                .expect("catalog particles share the complex method");
        }
        fuel.set_extinction_moisture(Category::Dead, spec.dead_extinction_moisture)
            .expect("catalog extinction moistures are positive");
        fuel.set_depth(spec.depth)
            .expect("catalog depths are positive");
        fuel
    }

    fn spec(self) -> &'static ModelSpec {
        &SPECS[usize::from(self.number()) - 1]
    }
}

impl std::fmt::Display for StandardFuelModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NFFL {} ({})", self.number(), self.name())
    }
}
