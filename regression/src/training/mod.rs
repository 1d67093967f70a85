mod descent;

pub use descent::{DescentTrainer, LinearModel};
