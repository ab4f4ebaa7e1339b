//! Top-level screens.

pub mod login;

pub use login::LoginView;
