pub mod config;
pub mod google;
pub mod i18n;
pub mod provider;
pub mod session;
pub mod translation;
pub mod web;
