pub mod contours;
pub mod engine;
pub mod enhance;
pub mod processor;
pub mod quad;
pub mod rectify;
