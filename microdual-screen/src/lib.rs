//! Electron screening factors of nuclear reactions on a density, temperature
//! and metallicity grid, together with their logarithmic temperature
//! derivatives obtained with [`microdual`] dual numbers.
//!
//! ```
//! use microdual_screen::{
//!     screen_test, GridOrigin, IndexBox, Network, PlotLayout, Reaction, Screen5,
//! };
//! use ndarray::Array4;
//!
//! let network = Network::aprox21();
//! let layout = PlotLayout::init_variables(network.num_species());
//! let bx = IndexBox::new([0, 0, 0], [0, 0, 0]);
//! let mut sp = Array4::zeros((1, 1, 1, layout.n_plot_comps()));
//! let origin = GridOrigin { dens_min: 1e3, temp_min: 1e8 };
//!
//! screen_test(&bx, 0.0, 0.0, 0.0, &layout, &network, Screen5, origin, sp.view_mut())?;
//!
//! let slot = layout.slot(Reaction::He4He4);
//! assert!(sp[[0, 0, 0, slot.value]] > 0.0);
//! assert!(sp[[0, 0, 0, slot.dt]] < 0.0);
//! # Ok::<(), microdual_screen::ScreeningError>(())
//! ```

pub mod config;
pub mod error;
pub mod kernel;
pub mod layout;
pub mod models;
pub mod network;
pub mod plasma;
pub mod reactions;
pub mod screen_factors;

pub use config::ScreeningConfig;
pub use error::ScreeningError;
pub use kernel::{screen_test, GridOrigin, GridSpacing, IndexBox, ScreeningKernel};
pub use layout::{PlotLayout, ReactionSlot};
pub use models::{Screen5, ScreeningModel, WeakScreening};
pub use network::{Network, SpeciesInfo};
pub use plasma::{fill_plasma_state, PlasmaState};
pub use reactions::{Nuclide, Reaction, RequiredSpecies, ResolvedSpecies};
pub use screen_factors::{calculate_screen_factor, ScreenFactors};
