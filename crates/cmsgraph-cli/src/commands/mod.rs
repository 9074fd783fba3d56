pub mod check;
pub mod fragments;
pub mod manifest_loader;
pub mod query;
