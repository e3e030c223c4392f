use log::Level;

pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

// Header is fully opaque once 5% of the page has been scrolled.
pub const HEADER_FADE_PROGRESS: f64 = 0.05;

pub const SHOWCASE_URL: &str = "https://showcase.race3d.store";
pub const SHOWCASE_DELAY_MS: u32 = 300;

pub fn get_form_endpoint() -> &'static str {
    option_env!("RACE3D_FORM_ENDPOINT").unwrap_or("https://api.web3forms.com/submit")
}

pub fn get_form_access_key() -> &'static str {
    option_env!("RACE3D_FORM_ACCESS_KEY").unwrap_or("ff7146a1-3e2f-464d-8fcd-4b3230d6eeb8")
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
