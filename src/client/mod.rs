//! # Mealie HTTP Client
//!
//! The request-dispatch core every resource service is built on.
//!
//! ## Modules
//!
//! - [`client`] - [`MealieClient`], URL building, auth header and response handling
//! - [`config`] - [`ClientConfig`] and environment loading
//! - [`error`] - [`MealieError`] and the crate-wide [`Error`]
//! - [`query`] - query string flattening and key translation
//! - [`types`] - binary bodies and the pagination envelope
//!
//! ## Quick Start
//!
//! ```no_run
//! use mealie_client::client::{ClientConfig, MealieClient};
//!
//! # async fn example() -> mealie_client::Result<()> {
//! let mut client = MealieClient::new(ClientConfig::new("http://localhost:9000"));
//! client.login("changeme@example.com", "MyPassword").await?;
//!
//! let foods = client.foods().list(&Default::default()).await?;
//! println!("{} foods", foods.total);
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod types;

pub use client::MealieClient;
pub use config::ClientConfig;
pub use error::{Error, MealieError, Result};
pub use types::*;
