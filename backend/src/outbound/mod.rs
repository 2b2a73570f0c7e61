//! Outbound adapters implementing domain ports for external services.
//!
//! Adapters are thin translators between domain calls and provider wire
//! formats. They contain no business logic: prompt construction and reply
//! parsing stay in the domain.

pub mod provider;
