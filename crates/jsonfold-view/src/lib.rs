// View module - the interaction state machine over rendered documents
// Discovers structure through typed markers only; no dependency on the engine

mod controller;
mod state;

pub use controller::{Controller, Effect, Input, Key};
pub use state::{FoldingMode, Fullscreen, InteractionState};
