pub mod math_ops;
pub mod outliers;
pub mod statistics;
