pub mod entities;
pub mod sample;
