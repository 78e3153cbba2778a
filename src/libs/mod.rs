//! Domain types, derived views and supporting utilities.
//!
//! - [`task`], [`goal`], [`event`]: the three stored record kinds
//! - [`entity`]: what the record kinds have in common
//! - [`context`]: the in-process owner of all records
//! - [`productivity`], [`calendar`], [`activity`], [`summary`]: read-only
//!   views computed from a snapshot and an explicit `now`
//! - [`config`], [`data_storage`], [`messages`], [`view`]: configuration,
//!   file locations, user-facing text and terminal tables

pub mod activity;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod context;
pub mod data_storage;
pub mod entity;
pub mod event;
pub mod goal;
pub mod messages;
pub mod productivity;
pub mod summary;
pub mod task;
pub mod transfer;
pub mod view;
