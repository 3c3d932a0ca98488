//! HTTP transport for the token pair service
//!
//! Exposes `POST /auth`, `POST /refresh` and `GET /health` over actix-web and
//! maps domain errors onto status codes.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod telemetry;
