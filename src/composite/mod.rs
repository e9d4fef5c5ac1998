pub mod builder;
pub mod media;
pub mod metrics;
pub mod model;
