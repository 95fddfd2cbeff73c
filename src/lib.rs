//! Developer "wrap" cards built from public GitHub activity.
//!
//! [`github::GithubClient::fetch_profile`] aggregates a handle's activity into
//! a [`profile::Profile`], [`card::Card`] holds the editable card and its rank
//! label, and [`svg::render_card`] draws it in one of the themes.

pub mod card;
pub mod error;
pub mod github;
pub mod heatmap;
pub mod languages;
pub mod personality;
pub mod profile;
pub mod stats;
pub mod svg;

pub use card::{Beverage, Card};
pub use error::{Error, Result};
pub use github::{ClientConfig, GithubClient};
pub use personality::{RankLabel, classify};
pub use profile::Profile;
pub use stats::StatEntry;
pub use svg::{Theme, render_card};
