#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod display;
pub mod event;

pub use display::DisplayItem;
pub use event::{ActivityEvent, Commit, CommitAuthor, EventPayload, EventRepo};
