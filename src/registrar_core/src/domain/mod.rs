pub mod account;
pub mod password;
pub mod role;
pub mod violation;
