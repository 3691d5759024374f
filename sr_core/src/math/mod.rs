pub mod extrema;
pub mod sma;
pub mod trend;
