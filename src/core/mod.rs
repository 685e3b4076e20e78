pub mod controller;
pub mod engine;
pub mod error;
pub mod game;
pub mod scores;
pub mod tier;
