pub mod analyze;
pub mod health;
pub mod init;
pub mod team;
