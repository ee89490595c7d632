//! Room session types
//!
//! A room is the unit of moderation: one admin owns it, participants join it
//! by code, and every vote belongs to exactly one room.

pub mod code;
pub mod entities;
pub mod options;

pub use code::RoomCode;
pub use entities::Room;
pub use options::VotingOptions;
