pub mod entities;
pub mod grid;
pub mod requests;
pub mod responses;
