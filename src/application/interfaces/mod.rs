/// Application creation interface
pub mod application;
