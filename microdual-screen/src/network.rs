//! Read-only nuclide tables: names, charge and mass numbers.

/// One nuclide of a reaction network.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesInfo {
    /// Full name, e.g. `"helium-4"`.
    pub name: &'static str,
    /// Short name used in plot variable names, e.g. `"He4"`.
    pub short_name: &'static str,
    /// Charge number Z.
    pub z: f64,
    /// Mass number A.
    pub a: f64,
}

impl SpeciesInfo {
    pub const fn new(name: &'static str, short_name: &'static str, z: f64, a: f64) -> Self {
        SpeciesInfo {
            name,
            short_name,
            z,
            a,
        }
    }
}

const APROX21: [SpeciesInfo; 21] = [
    SpeciesInfo::new("hydrogen-1", "H1", 1.0, 1.0),
    SpeciesInfo::new("helium-3", "He3", 2.0, 3.0),
    SpeciesInfo::new("helium-4", "He4", 2.0, 4.0),
    SpeciesInfo::new("carbon-12", "C12", 6.0, 12.0),
    SpeciesInfo::new("nitrogen-14", "N14", 7.0, 14.0),
    SpeciesInfo::new("oxygen-16", "O16", 8.0, 16.0),
    SpeciesInfo::new("neon-20", "Ne20", 10.0, 20.0),
    SpeciesInfo::new("magnesium-24", "Mg24", 12.0, 24.0),
    SpeciesInfo::new("silicon-28", "Si28", 14.0, 28.0),
    SpeciesInfo::new("sulfur-32", "S32", 16.0, 32.0),
    SpeciesInfo::new("argon-36", "Ar36", 18.0, 36.0),
    SpeciesInfo::new("calcium-40", "Ca40", 20.0, 40.0),
    SpeciesInfo::new("titanium-44", "Ti44", 22.0, 44.0),
    SpeciesInfo::new("chromium-48", "Cr48", 24.0, 48.0),
    SpeciesInfo::new("iron-52", "Fe52", 26.0, 52.0),
    SpeciesInfo::new("iron-54", "Fe54", 26.0, 54.0),
    SpeciesInfo::new("nickel-56", "Ni56", 28.0, 56.0),
    SpeciesInfo::new("neutron", "n", 0.0, 1.0),
    SpeciesInfo::new("proton", "p", 1.0, 1.0),
    SpeciesInfo::new("chromium-56", "Cr56", 24.0, 56.0),
    SpeciesInfo::new("iron-56", "Fe56", 26.0, 56.0),
];

/// A reaction network's species table.
///
/// Built once before any evaluation and only read afterwards, so it can be
/// shared between worker threads by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    name: String,
    species: Vec<SpeciesInfo>,
}

impl Network {
    pub fn new(name: impl Into<String>, species: Vec<SpeciesInfo>) -> Self {
        Network {
            name: name.into(),
            species,
        }
    }

    /// The 21-isotope alpha chain network with hydrogen burning and iron-group
    /// neutronisation.
    pub fn aprox21() -> Self {
        Network::new("aprox21", APROX21.to_vec())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn num_species(&self) -> usize {
        self.species.len()
    }

    pub fn species(&self) -> &[SpeciesInfo] {
        &self.species
    }

    /// Charge number of species `i` (zero-based).
    #[inline]
    pub fn zion(&self, i: usize) -> f64 {
        self.species[i].z
    }

    /// Mass number of species `i` (zero-based).
    #[inline]
    pub fn aion(&self, i: usize) -> f64 {
        self.species[i].a
    }

    /// Zero-based index of the species called `name`, if present.
    pub fn spec_index(&self, name: &str) -> Option<usize> {
        self.species.iter().position(|s| s.name == name)
    }

    pub fn short_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.species.iter().map(|s| s.short_name)
    }
}
