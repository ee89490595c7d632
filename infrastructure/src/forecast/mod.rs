//! Forecast gateway adapters

pub mod heuristic;

pub use heuristic::HeuristicForecastGateway;
