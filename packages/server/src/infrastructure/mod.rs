//! Infrastructure layer: concrete registry, outbound lanes and wire DTOs.

pub mod dto;
pub mod registry;
pub mod sink;
