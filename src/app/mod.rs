//! Demo application shell.
//!
//! | Sub-module   | Responsibility |
//! | ------------ | -------------- |
//! | [`demo_app`] | [`DemoApp`]: tab bar, theme switch, single chart or dashboard |
//! | [`run`]      | [`run_demo()`] entry point |

mod demo_app;
mod run;

pub use demo_app::{DemoApp, ViewMode};
pub use run::run_demo;
