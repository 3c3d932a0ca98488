//! Issuance and rotation of access/refresh token pairs

mod service;


pub use service::RotationService;
