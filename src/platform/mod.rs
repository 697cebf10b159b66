#[cfg(feature = "desktop")]
pub mod desktop;
#[cfg(all(feature = "web", not(feature = "desktop")))]
pub mod web;
