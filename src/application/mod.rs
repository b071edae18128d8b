/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the discovery domain and talks to
/// infrastructure only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
