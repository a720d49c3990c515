pub mod health;
pub mod auth;
pub mod admin;
pub mod cases;
pub mod users;
pub mod donations;
pub mod mosques;
pub mod metrics;
pub mod swagger;
