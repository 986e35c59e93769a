//! # marketplace
//!
//! Terminal front end for a Marketplace contract: connects to the user's wallet, lists the
//! products the contract holds and submits `createProduct` / `purchaseProduct` transactions.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate marketplace_common;
#[macro_use]
extern crate tracing;

pub mod app;
pub mod args;
pub mod cmd;
pub mod handler;
pub mod notify;
pub mod opts;
pub mod utils;
pub mod view;

pub use app::{App, NO_DEPLOYMENT_ALERT, NO_WALLET_ALERT, Phase, ViewState};
pub use notify::{Notifier, ShellNotifier};
