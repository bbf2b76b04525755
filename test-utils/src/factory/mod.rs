//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let host = factory::host::create_host(&db).await?;
//!     let profile = factory::profile::create_profile(&db, user_id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let host = factory::host::HostFactory::new(&db)
//!     .name("EU Frankfurt")
//!     .domain("https://panel.example.com")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `host` - Create host entities (remote Pterodactyl deployments)
//! - `profile` - Create user profile entities
//! - `helpers` - Shared ID generation utilities

pub mod helpers;
pub mod host;
pub mod profile;

// Re-export commonly used factory functions for concise usage
pub use host::create_host;
pub use profile::create_profile;
