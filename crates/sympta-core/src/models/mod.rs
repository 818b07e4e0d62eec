pub mod diagnosis;
pub mod patient;
pub mod prediction;
pub mod stats;
pub mod symptoms;
