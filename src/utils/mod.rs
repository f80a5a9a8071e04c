// Utility functions
pub mod error;
pub mod object_id;
