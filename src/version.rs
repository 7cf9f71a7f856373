pub const VERSION: &str = env!("FITDECK_VERSION");
