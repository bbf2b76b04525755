//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including the provisioning API, business logic, data access, and infrastructure
//! services. The backend uses Axum as the web framework, SeaORM for database
//! operations, and reqwest for calls to the remote control-panel and identity
//! services.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token extraction and identity verification
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, etc.)
//! - **Startup** (`startup`) - Initialization of database and HTTP clients
//! - **Router** (`router`) - Axum route configuration, CORS, and API documentation
//!
//! # Request Flow
//!
//! A provisioning request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes to the controller
//! 2. **Middleware** extracts the bearer token and verifies it against the identity service
//! 3. **Controller** converts the DTO to params, calls the provisioning service
//! 4. **Service** runs the pipeline: host lookup, remote user resolve, remote
//!    server create, panel persist, usage counter update
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** converts the outcome to a DTO, returns the HTTP response
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
