//! `SeaORM` entities for the Press tables.

pub mod press_settings;
pub mod root_domain;
