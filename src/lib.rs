#[macro_use]
extern crate tracing;

pub mod api;
pub mod client;
pub mod clock;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod schemas;
pub mod session;
pub mod state;
pub mod view;

pub use client::ApiClient;
pub use clock::SlotTime;
pub use config::Config;
pub use error::Error;
pub use session::{Session, SessionStore};
pub use view::ViewState;
