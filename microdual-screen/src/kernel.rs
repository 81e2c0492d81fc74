//! Grid evaluation of screening factors and their temperature derivatives.

use std::collections::BTreeMap;

use microdual::{seed, Dual64};
use ndarray::{ArrayViewMut1, ArrayViewMut3, ArrayViewMut4, Axis};

use crate::error::ScreeningError;
use crate::layout::{PlotLayout, ReactionSlot};
use crate::models::ScreeningModel;
use crate::network::Network;
use crate::plasma::fill_plasma_state;
use crate::reactions::{Reaction, RequiredSpecies, ResolvedSpecies};
use crate::screen_factors::{calculate_screen_factor, ScreenFactors};

/// Inclusive index range of the cells to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexBox {
    pub lo: [i32; 3],
    pub hi: [i32; 3],
}

impl IndexBox {
    pub fn new(lo: [i32; 3], hi: [i32; 3]) -> Self {
        IndexBox { lo, hi }
    }

    /// Cells along each axis; zero for an empty axis.
    pub fn shape(&self) -> [usize; 3] {
        std::array::from_fn(|d| (self.hi[d] as i64 - self.lo[d] as i64 + 1).max(0) as usize)
    }

    pub fn num_cells(&self) -> usize {
        self.shape().iter().product()
    }
}

/// Increments between neighbouring cells: `log10 ρ` along the first axis,
/// `log10 T` along the second, metal mass fraction along the third.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridSpacing {
    pub dlogrho: f64,
    pub dlogt: f64,
    pub dmetal: f64,
}

/// Density and temperature at index zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridOrigin {
    pub dens_min: f64,
    pub temp_min: f64,
}

/// Working storage of one worker, reused from cell to cell.
struct CellScratch {
    xn: Vec<f64>,
    ymass: Vec<Dual64>,
}

impl CellScratch {
    fn new(num_spec: usize) -> Self {
        CellScratch {
            xn: vec![0.0; num_spec],
            ymass: vec![Dual64::default(); num_spec],
        }
    }
}

/// Evaluates every reaction of the screening table on a grid of
/// density, temperature and metallicity.
///
/// Everything the cells share (network, layout, descriptor table) is
/// resolved in [`new`](Self::new) and only read afterwards.
pub struct ScreeningKernel<'a, M> {
    network: &'a Network,
    layout: &'a PlotLayout,
    model: M,
    origin: GridOrigin,
    ih1: usize,
    ihe4: usize,
    table: BTreeMap<ReactionSlot, ScreenFactors>,
}

impl<'a, M: ScreeningModel> ScreeningKernel<'a, M> {
    /// Resolve the required species and build the descriptor table.
    ///
    /// # Panics
    /// If `layout` was built for a different species count than `network`.
    pub fn new(
        network: &'a Network,
        model: M,
        layout: &'a PlotLayout,
        origin: GridOrigin,
    ) -> Result<Self, ScreeningError> {
        assert_eq!(
            layout.num_spec(),
            network.num_species(),
            "layout and network disagree on the species count"
        );

        let resolved = ResolvedSpecies::resolve(network).map_err(|e| {
            log::error!("{}", e);
            e
        })?;
        log::debug!(
            "resolved {} required species in network '{}'",
            RequiredSpecies::ALL.len(),
            network.name()
        );

        let table: BTreeMap<_, _> = Reaction::ALL
            .iter()
            .map(|&r| {
                let (n1, n2) = r.partners();
                let (z1, a1) = n1.za(network, &resolved);
                let (z2, a2) = n2.za(network, &resolved);
                (layout.slot(r), calculate_screen_factor(z1, a1, z2, a2))
            })
            .collect();
        log::debug!(
            "built {} screening descriptors for model '{}'",
            table.len(),
            model.name()
        );

        Ok(ScreeningKernel {
            network,
            layout,
            model,
            origin,
            ih1: resolved.index(RequiredSpecies::H1),
            ihe4: resolved.index(RequiredSpecies::He4),
            table,
        })
    }

    /// Descriptor of every reaction, keyed by its output components.
    pub fn table(&self) -> &BTreeMap<ReactionSlot, ScreenFactors> {
        &self.table
    }

    /// Fill `sp` for every cell of `bx`.
    ///
    /// `sp` covers exactly the box: element `[i - lo₀, j - lo₁, k - lo₂, c]`
    /// receives component `c` of cell `(i, j, k)`.
    ///
    /// # Panics
    /// If the shape of `sp` does not match the box and the layout.
    pub fn evaluate(&self, bx: &IndexBox, spacing: &GridSpacing, mut sp: ArrayViewMut4<'_, f64>) {
        let [nx, ny, nz] = bx.shape();
        assert_eq!(
            sp.shape(),
            &[nx, ny, nz, self.layout.n_plot_comps()],
            "output array does not match box {:?} with {} components",
            bx,
            self.layout.n_plot_comps()
        );
        log::info!(
            "evaluating {} cells x {} reactions with {}",
            bx.num_cells(),
            self.table.len(),
            self.model.name()
        );

        let num_spec = self.network.num_species();

        #[cfg(feature = "parallel")]
        {
            use ndarray::parallel::prelude::*;

            sp.axis_iter_mut(Axis(0))
                .into_par_iter()
                .enumerate()
                .for_each_init(
                    || CellScratch::new(num_spec),
                    |scratch, (di, plane)| {
                        self.evaluate_plane(bx.lo[0] + di as i32, bx, spacing, scratch, plane)
                    },
                );
        }

        #[cfg(not(feature = "parallel"))]
        {
            let mut scratch = CellScratch::new(num_spec);
            for (di, plane) in sp.axis_iter_mut(Axis(0)).enumerate() {
                self.evaluate_plane(bx.lo[0] + di as i32, bx, spacing, &mut scratch, plane);
            }
        }
    }

    fn evaluate_plane(
        &self,
        i: i32,
        bx: &IndexBox,
        spacing: &GridSpacing,
        scratch: &mut CellScratch,
        mut plane: ArrayViewMut3<'_, f64>,
    ) {
        for (dj, mut row) in plane.axis_iter_mut(Axis(0)).enumerate() {
            let j = bx.lo[1] + dj as i32;
            for (dk, out) in row.axis_iter_mut(Axis(0)).enumerate() {
                let k = bx.lo[2] + dk as i32;
                self.evaluate_cell([i, j, k], spacing, scratch, out);
            }
        }
    }

    fn evaluate_cell(
        &self,
        [i, j, k]: [i32; 3],
        spacing: &GridSpacing,
        scratch: &mut CellScratch,
        mut out: ArrayViewMut1<'_, f64>,
    ) {
        // Metals spread evenly over everything but H1 and He4.
        let metalicity = 0.0 + k as f64 * spacing.dmetal;
        let num_spec = scratch.xn.len();
        scratch.xn.fill(metalicity / (num_spec - 2) as f64);
        scratch.xn[self.ih1] = 0.75 - 0.5 * metalicity;
        scratch.xn[self.ihe4] = 0.25 - 0.5 * metalicity;

        for (n, (y, &x)) in scratch.ymass.iter_mut().zip(&scratch.xn).enumerate() {
            *y = Dual64::constant(x / self.network.aion(n));
        }

        let mut temp =
            Dual64::constant(10f64.powf(self.origin.temp_min.log10() + j as f64 * spacing.dlogt));
        seed(&mut temp);

        let dens = 10f64.powf(self.origin.dens_min.log10() + i as f64 * spacing.dlogrho);

        out[self.layout.irho] = dens;
        out[self.layout.itemp] = temp.val;
        for (n, &x) in scratch.xn.iter().enumerate() {
            out[self.layout.ispec + n] = x;
        }

        let pstate = fill_plasma_state(temp, dens, &scratch.ymass, self.network);

        for (slot, factors) in &self.table {
            let s = self.model.screen(&pstate, factors);
            out[slot.value] = s.val.ln();
            out[slot.dt] = s.grad / s.val;
        }
    }
}

/// Evaluate the full reaction table over `bx` in one call.
///
/// Fails before writing anything if the network lacks a required species.
#[allow(clippy::too_many_arguments)]
pub fn screen_test<M: ScreeningModel>(
    bx: &IndexBox,
    dlogrho: f64,
    dlogt: f64,
    dmetal: f64,
    layout: &PlotLayout,
    network: &Network,
    model: M,
    origin: GridOrigin,
    sp: ArrayViewMut4<'_, f64>,
) -> Result<(), ScreeningError> {
    let kernel = ScreeningKernel::new(network, model, layout, origin)?;
    let spacing = GridSpacing {
        dlogrho,
        dlogt,
        dmetal,
    };
    kernel.evaluate(bx, &spacing, sp);
    Ok(())
}
