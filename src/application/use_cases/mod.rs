/// Use cases module containing application business logic orchestration
mod discover_certificates;

pub use discover_certificates::DiscoverCertificatesUseCase;
