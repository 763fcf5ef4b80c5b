//! Chancery — embassy administration console.
//!
//! Every domain module (citizens, assets, accounts, ...) is configuration
//! over the generic engines in `chancery_schema`: a schema, reference
//! lists, filter specs, and seed records. The [`controller`] owns one
//! collection per module and the List ⇄ Form state machine; [`cli`] hosts
//! the terminal UI and the headless commands.

pub mod cli;
pub mod config;
pub mod controller;
pub mod modules;
