// Model inputs
pub mod features;

// Classes, predictions and panel outcomes
pub mod prediction;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
