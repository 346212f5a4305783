pub mod api;
pub mod controller;
pub mod model;
pub mod view;

pub use api::LoadError;
pub use controller::{
    build_links, ApplyOutcome, CascadeLink, CascadeLinks, CascadeSettings, PendingLoad, Tracked,
};
pub use model::{plan_change, render_options, CascadeLevel, CascadeStep, RequestGeneration};
pub use view::{mount_cascade, CascadeMount};
