//! Component indices of the output array.

use crate::network::Network;
use crate::reactions::Reaction;

/// Output components of one screened reaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReactionSlot {
    /// Component holding `ln S`.
    pub value: usize,
    /// Component holding `d ln S / dT`.
    pub dt: usize,
}

/// Allocates consecutive component indices of the output array and
/// remembers which quantity lives where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotLayout {
    n_plot_comps: usize,
    /// Density component.
    pub irho: usize,
    /// Temperature component.
    pub itemp: usize,
    /// First of `num_spec` mass-fraction components.
    pub ispec: usize,
    num_spec: usize,
    scn: [ReactionSlot; Reaction::ALL.len()],
}

impl PlotLayout {
    fn empty() -> Self {
        PlotLayout {
            n_plot_comps: 0,
            irho: 0,
            itemp: 0,
            ispec: 0,
            num_spec: 0,
            scn: [ReactionSlot::default(); Reaction::ALL.len()],
        }
    }

    /// Reserve `n` components and return the first of them.
    pub fn next_index(&mut self, n: usize) -> usize {
        let start = self.n_plot_comps;
        self.n_plot_comps += n;
        start
    }

    /// Lay out density, temperature, `num_spec` mass fractions, every
    /// reaction's `value` component and then every reaction's `dt` component.
    pub fn init_variables(num_spec: usize) -> Self {
        let mut p = PlotLayout::empty();
        p.irho = p.next_index(1);
        p.itemp = p.next_index(1);
        p.ispec = p.next_index(num_spec);
        p.num_spec = num_spec;
        for r in Reaction::ALL {
            p.scn[r as usize].value = p.next_index(1);
        }
        for r in Reaction::ALL {
            p.scn[r as usize].dt = p.next_index(1);
        }
        p
    }

    #[inline]
    pub fn slot(&self, reaction: Reaction) -> ReactionSlot {
        self.scn[reaction as usize]
    }

    #[inline]
    pub fn n_plot_comps(&self) -> usize {
        self.n_plot_comps
    }

    #[inline]
    pub fn num_spec(&self) -> usize {
        self.num_spec
    }

    /// Name of every component, indexed by component.
    ///
    /// # Panics
    /// If `network` does not have the species count this layout was built for.
    pub fn varnames(&self, network: &Network) -> Vec<String> {
        assert_eq!(
            network.num_species(),
            self.num_spec,
            "layout built for {} species, network '{}' has {}",
            self.num_spec,
            network.name(),
            network.num_species()
        );
        let mut names = vec![String::new(); self.n_plot_comps];
        names[self.irho] = "density".to_string();
        names[self.itemp] = "temperature".to_string();
        for (n, short) in network.short_names().enumerate() {
            names[self.ispec + n] = format!("X_{}", short);
        }
        for r in Reaction::ALL {
            let slot = self.slot(r);
            names[slot.value] = format!("scn_{}", r.name());
            names[slot.dt] = format!("scn_{}_dt", r.name());
        }
        names
    }
}
