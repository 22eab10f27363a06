mod atmosphere;
mod builder;

pub use atmosphere::AtmosphereConfig;
pub use builder::AtmosphereConfigBuilder;
