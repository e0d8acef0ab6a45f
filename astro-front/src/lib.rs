//! Astro Ciater booking front-end
//!
//! Routing shell, screens, form models and notifications on top of
//! [`astro_client`]. The `astro-front` binary drives them from the terminal.

pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod logger;
pub mod notify;
pub mod render;
pub mod routing;
pub mod screens;

pub use config::FrontConfig;
pub use error::{FrontError, FrontResult};
pub use notify::{AutoConfirm, ConsoleNotifier, Notice, NoticeLevel, Notifier, RecordingNotifier};
pub use routing::{Chrome, Route};
