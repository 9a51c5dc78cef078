//! Types shared between the frontend shell and the backend API.

pub mod shared;
pub mod system;
