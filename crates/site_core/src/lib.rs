//! Core of the Kongu × GUVI site: hash router, navigation shell, feature
//! highlight ticker, and pure rendering of every page through askama templates.
//!
//! Nothing here touches a browser. Adapters feed [`shared::protocol::BrowserEvent`]s
//! into a [`shell::SiteShell`] and apply the [`shared::protocol::HostEffect`]s it
//! returns through a [`host::BrowserHost`].

pub mod config;
pub mod content;
pub mod highlight;
pub mod host;
pub mod nav;
pub mod router;
pub mod shell;
pub mod subscriptions;
pub mod view;

pub use config::{load_settings, SiteSettings};
pub use host::{apply_effects, BrowserHost, HeadlessHost};
pub use shell::{Redraw, SiteShell, Update};
pub use view::ViewModel;
