// src/models/mod.rs

pub mod question;
pub mod ranking;
pub mod session;
