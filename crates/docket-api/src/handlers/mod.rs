//! Route handlers organized by domain.

pub mod auth;
pub mod document;
pub mod download;
pub mod health;
pub mod pages;
pub mod trash;
