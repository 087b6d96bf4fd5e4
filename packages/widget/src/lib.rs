#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod escape;
pub mod inject;
pub mod render;

pub use escape::escape_html;
pub use inject::{ContainerNotFound, append_to_container};
pub use render::{CONTAINER_ID, render_items};
