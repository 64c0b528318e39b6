pub mod contact;
pub mod i18n;
pub mod motion;
pub mod router;
pub mod typing;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;

#[cfg(target_arch = "wasm32")]
pub mod controller;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod frontend;
#[cfg(target_arch = "wasm32")]
pub mod mailer;
#[cfg(target_arch = "wasm32")]
pub mod notify;
#[cfg(target_arch = "wasm32")]
pub mod showcase;
#[cfg(target_arch = "wasm32")]
pub mod translator;
