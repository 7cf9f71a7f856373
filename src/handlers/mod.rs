pub mod guidance;
pub mod health;
