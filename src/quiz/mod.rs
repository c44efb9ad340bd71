pub mod bank;
pub mod scorer;
