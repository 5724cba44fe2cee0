// Model implementations behind the classifier port
pub mod ml;

// Form submission to prediction
pub mod inference;
