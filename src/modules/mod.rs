mod app_module;
pub mod home;
pub mod user;

pub use app_module::AppModule;
