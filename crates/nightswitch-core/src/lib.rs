//! # nightswitch-core - Core Domain Types
//!
//! Foundation crate for nightswitch. Provides the theme state machine, error
//! handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Theme (`theme`)
//! - [`ThemeMode`] - Light/Dark two-state machine
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use nightswitch_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod theme;

pub use error::{Error, Result, ResultExt};
pub use theme::ThemeMode;
