//! Event types and observers used by the engine.
//!
//! Events provide a decoupled way for systems to communicate: a system
//! triggers an event and the observers registered for it react.
//!
//! Submodules:
//! - [`collision`] – overlap notifications from the collision detector
//! - [`particles`] – particle bursts (explosion, smoke, sparkles)
//! - [`scene`] – scene transitions and their enter/exit hooks
//! - [`switchdebug`] – toggle the hitbox overlay and FPS counter
pub mod collision;
pub mod particles;
pub mod scene;
pub mod switchdebug;
