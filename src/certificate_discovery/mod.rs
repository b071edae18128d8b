/// Certificate discovery domain - pure logic with no I/O
///
/// Holds the value objects produced by one discovery pass and the
/// services that split bundles and aggregate decoded output.
pub mod domain;
pub mod services;
