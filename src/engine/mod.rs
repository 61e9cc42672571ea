pub mod utils;
pub mod systems;
pub mod components;
pub mod rendering;
pub mod gpu;
pub mod config;
pub mod error;
pub mod logging;

// Re-export the items the binary wires together
pub use config::AppConfig;
pub use error::EngineError;
pub use gpu::GraphicsDevice;
