pub mod scenarios;
pub mod sectors;
