//! # Mealie Client Library
//!
//! A typed async client for the [Mealie](https://mealie.io) recipe manager
//! REST API. It consists of two layers:
//!
//! ## Client Module
//!
//! The [`client`] module holds [`MealieClient`], the request dispatcher that
//! builds URLs, attaches the bearer token, sends requests and turns every
//! non-2xx response into a [`MealieError`].
//!
//! ## Services Module
//!
//! The [`services`] module maps Mealie's endpoint groups (foods, units,
//! organizers, recipes, shared recipes, media, households) onto the client's
//! verbs. Services borrow the client; get them from its accessors.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mealie_client::{ClientConfig, MealieClient};
//!
//! # async fn example() -> mealie_client::Result<()> {
//! let client = MealieClient::new(
//!     ClientConfig::new("http://localhost:9000").with_token("my-api-token"),
//! );
//!
//! let shares = client.shared_recipes().list(Some("recipe-id")).await?;
//! println!("{} share links", shares.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod services;

pub use client::{ClientConfig, Error, MealieClient, MealieError, Result};
