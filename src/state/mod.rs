pub mod component;
pub mod data_series;
