//! Application Layer - Use Cases and Services
//!
//! This layer orchestrates domain entities and defines application-specific workflows.
//! It contains:
//! - **Use Cases**: Single-purpose operations (load entries, launch elevated)
//! - **Ports**: Interfaces for the OS and host shell (elevation, notifications, icons)
//! - **Services**: Long-lived components (Notifier, IconLoader)
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer
//! - Defines ports that the platform layer implements
//! - Contains no framework-specific code

pub mod ports;
pub mod services;
pub mod use_cases;

// Re-export commonly used types
pub use ports::*;
pub use services::*;
pub use use_cases::*;
