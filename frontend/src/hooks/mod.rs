pub mod use_resource;

pub use use_resource::{use_resource, UseResourceHandle};
