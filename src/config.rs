use std::env;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub signin_delay: Duration,
    pub otp_delay: Duration,
    pub seed_demo_data: bool,
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://festhive.db?mode=rwc".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            signin_delay: Duration::from_millis(millis_from_env("SIGNIN_DELAY_MS", 1000)),
            otp_delay: Duration::from_millis(millis_from_env("OTP_DELAY_MS", 1500)),
            seed_demo_data: flag_from_env("SEED_DEMO_DATA", true),
            secure_cookies: flag_from_env("SECURE_COOKIES", false),
        }
    }
}

fn millis_from_env(name: &str, default: u64) -> u64 {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| panic!("{} must be a number of milliseconds", name)),
        Err(_) => default,
    }
}

fn flag_from_env(name: &str, default: bool) -> bool {
    match env::var(name).as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => default,
    }
}
