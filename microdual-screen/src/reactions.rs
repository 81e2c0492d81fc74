//! The fixed catalogue of screened reactions and the species they need.

use crate::error::ScreeningError;
use crate::network::Network;

macro_rules! required_species {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Network species the reaction table refers to by name.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RequiredSpecies {
            $($variant,)*
        }

        impl RequiredSpecies {
            /// Every required species, in the order they are resolved.
            pub const ALL: [RequiredSpecies; [$($name),*].len()] = [$(RequiredSpecies::$variant),*];

            /// Full network name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(RequiredSpecies::$variant => $name,)*
                }
            }
        }
    };
}

required_species! {
    H1 => "hydrogen-1",
    He3 => "helium-3",
    He4 => "helium-4",
    C12 => "carbon-12",
    N14 => "nitrogen-14",
    O16 => "oxygen-16",
    Ne20 => "neon-20",
    Mg24 => "magnesium-24",
    Si28 => "silicon-28",
    S32 => "sulfur-32",
    Ar36 => "argon-36",
    Ca40 => "calcium-40",
    Ti44 => "titanium-44",
    Cr48 => "chromium-48",
    Fe52 => "iron-52",
    Fe54 => "iron-54",
    Fe56 => "iron-56",
}

/// Network indices of every [`RequiredSpecies`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpecies {
    index: [usize; RequiredSpecies::ALL.len()],
}

impl ResolvedSpecies {
    /// Look up every required species, stopping at the first one missing.
    pub fn resolve(network: &Network) -> Result<Self, ScreeningError> {
        let mut index = [0; RequiredSpecies::ALL.len()];
        for (slot, species) in index.iter_mut().zip(RequiredSpecies::ALL) {
            *slot = network
                .spec_index(species.name())
                .ok_or(ScreeningError::MissingSpecies {
                    name: species.name(),
                })?;
        }
        Ok(ResolvedSpecies { index })
    }

    #[inline]
    pub fn index(&self, species: RequiredSpecies) -> usize {
        self.index[species as usize]
    }
}

/// One side of a screened pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nuclide {
    /// A species of the network; Z and A come from the network table.
    Species(RequiredSpecies),
    /// An isotope the network does not evolve, given by its (Z, A).
    Literal { z: f64, a: f64 },
}

impl Nuclide {
    const fn lit(z: f64, a: f64) -> Self {
        Nuclide::Literal { z, a }
    }

    /// Charge and mass number.
    pub fn za(self, network: &Network, resolved: &ResolvedSpecies) -> (f64, f64) {
        match self {
            Nuclide::Species(s) => {
                let i = resolved.index(s);
                (network.zion(i), network.aion(i))
            }
            Nuclide::Literal { z, a } => (z, a),
        }
    }
}

macro_rules! reactions {
    ($($variant:ident => $name:literal: ($n1:expr, $n2:expr)),* $(,)?) => {
        /// Screened reactions, in plot-layout order.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Reaction {
            $($variant,)*
        }

        impl Reaction {
            pub const ALL: [Reaction; [$($name),*].len()] = [$(Reaction::$variant),*];

            /// Short name used in plot variables, e.g. `"c12_he4"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Reaction::$variant => $name,)*
                }
            }

            /// The two nuclides whose mutual screening is evaluated.
            pub const fn partners(self) -> (Nuclide, Nuclide) {
                match self {
                    $(Reaction::$variant => ($n1, $n2),)*
                }
            }
        }
    };
}

use Nuclide::Species as S;
use RequiredSpecies::*;

reactions! {
    He4He4 => "he4_he4": (S(He4), S(He4)),
    He4Be8 => "he4_be8": (S(He4), Nuclide::lit(4.0, 8.0)),
    C12He4 => "c12_he4": (S(C12), S(He4)),
    C12C12 => "c12_c12": (S(C12), S(C12)),
    C12O16 => "c12_o16": (S(C12), S(O16)),
    O16O16 => "o16_o16": (S(O16), S(O16)),
    O16He4 => "o16_he4": (S(O16), S(He4)),
    Ne20He4 => "ne20_he4": (S(Ne20), S(He4)),
    Mg24He4 => "mg24_he4": (S(Mg24), S(He4)),
    Al27P => "al27_p": (Nuclide::lit(13.0, 27.0), S(H1)),
    Si28He4 => "si28_he4": (S(Si28), S(He4)),
    P31P => "p31_p": (Nuclide::lit(15.0, 31.0), S(H1)),
    S32He4 => "s32_he4": (S(S32), S(He4)),
    Cl35P => "cl35_p": (Nuclide::lit(17.0, 35.0), S(H1)),
    Ar36He4 => "ar36_he4": (S(Ar36), S(He4)),
    K39P => "k39_p": (Nuclide::lit(19.0, 39.0), S(H1)),
    Ca40He4 => "ca40_he4": (S(Ca40), S(He4)),
    Sc43P => "sc43_p": (Nuclide::lit(21.0, 43.0), S(H1)),
    Ti44He4 => "ti44_he4": (S(Ti44), S(He4)),
    V47P => "v47_p": (Nuclide::lit(23.0, 47.0), S(H1)),
    Cr48He4 => "cr48_he4": (S(Cr48), S(He4)),
    Mn51P => "mn51_p": (Nuclide::lit(25.0, 51.0), S(H1)),
    Fe52He4 => "fe52_he4": (S(Fe52), S(He4)),
    Co55P => "co55_p": (Nuclide::lit(27.0, 55.0), S(H1)),
    Fe54P => "fe54_p": (S(Fe54), S(H1)),
    Fe54He4 => "fe54_he4": (S(Fe54), S(He4)),
    Fe56P => "fe56_p": (S(Fe56), S(H1)),
    DP => "d_p": (Nuclide::lit(1.0, 2.0), S(H1)),
    PP => "p_p": (S(H1), S(H1)),
    He3He3 => "he3_he3": (S(He3), S(He3)),
    He3He4 => "he3_he4": (S(He3), S(He4)),
    C12P => "c12_p": (S(C12), S(H1)),
    N14P => "n14_p": (S(N14), S(H1)),
    O16P => "o16_p": (S(O16), S(H1)),
    N14He4 => "n14_he4": (S(N14), S(He4)),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::SpeciesInfo;

    #[test]
    fn catalogue_size() {
        assert_eq!(RequiredSpecies::ALL.len(), 17);
        assert_eq!(Reaction::ALL.len(), 35);
    }

    #[test]
    fn resolve_reports_first_missing_species() {
        let species = Network::aprox21()
            .species()
            .iter()
            .filter(|s| s.name != "oxygen-16" && s.name != "iron-54")
            .cloned()
            .collect::<Vec<SpeciesInfo>>();
        let net = Network::new("partial", species);
        match ResolvedSpecies::resolve(&net) {
            Err(ScreeningError::MissingSpecies { name }) => assert_eq!(name, "oxygen-16"),
            other => panic!("expected MissingSpecies, got {:?}", other),
        }
    }

    #[test]
    fn literal_partners_ignore_network() {
        let net = Network::aprox21();
        let resolved = ResolvedSpecies::resolve(&net).unwrap();
        let (lit, proton) = Reaction::Co55P.partners();
        assert_eq!(lit.za(&net, &resolved), (27.0, 55.0));
        assert_eq!(proton.za(&net, &resolved), (1.0, 1.0));
    }
}
