use bl_core::BiasModel;
use tracing::info;

pub mod mock;

pub use mock::MockBiasModel;

use crate::SimulatorConfig;

/// Build the bias model described by `config`.
pub fn create_model(config: &SimulatorConfig) -> Box<dyn BiasModel> {
    let model = MockBiasModel::new(config.seed);
    match config.seed {
        Some(seed) => info!("🎲 Using {} bias model (seed {})", model.name(), seed),
        None => info!("🎲 Using {} bias model", model.name()),
    }
    Box::new(model)
}
