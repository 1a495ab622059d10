//! Action subsystem: describing operations and executing calls.
//!
//! # Data Flow
//! ```text
//! ApiActionDescriptor (static: method, path template, parameters)
//!     + argument values
//!     → parameter.rs (bind → ApiParameterDescriptor per parameter)
//!     → context.rs (ApiActionContext: request + shared config)
//!     → executor.rs (hooks → transport → hooks → ApiResponse / T)
//! ```

pub mod context;
pub mod descriptor;
pub mod executor;
pub mod parameter;

pub use context::ApiActionContext;
pub use descriptor::ApiActionDescriptor;
pub use executor::HttpApiClient;
pub use parameter::{ApiParameterDescriptor, ParameterDefinition};
