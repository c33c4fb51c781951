pub mod config;
pub mod site_profile;
pub mod web;
