pub mod error;
pub mod jwt;
pub mod logger;
pub mod money;
pub mod password;
pub mod pricing;
