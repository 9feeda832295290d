pub mod health;
pub mod minecraft;
pub mod router;
pub mod types;
pub mod webtext;
