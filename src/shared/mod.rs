// Shared kernel for the search aggregator

pub mod errors; // Shared error types
