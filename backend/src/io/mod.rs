//! # IO Module
//!
//! Interface layer exposing the domain services to clients. The only
//! interface is the JSON REST API under `/api`.

pub mod rest;
