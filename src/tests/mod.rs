//! Crate-level test suites
//!
//! Orchestrator scenarios run against a mocked transport; HTTP transport
//! tests run against a wiremock server.
