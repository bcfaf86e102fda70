use crate::di::Container;
use crate::error::Result;
use crate::module::{AppState, Module};
use axum::{Router, routing::get};

pub mod controller;

pub use controller::read_home;

pub struct HomeModule;

impl Module for HomeModule {
    fn register(_container: &mut Container) -> Result<()> {
        Ok(())
    }

    fn routes() -> Router<AppState> {
        Router::new().route("/", get(read_home))
    }
}
