use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Show rejected gallery and tab transitions while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const COMPANY_NAME: &str = "BHPL Housing Pvt Ltd";
pub const SITE_NAME: &str = "BHPL.CLUB";
pub const PHONE: &str = "+91 99646 66544";
pub const EMAIL: &str = "support@bhpl.club";
pub const CITY: &str = "Bangalore, India";
pub const HEADQUARTERS: &str = "BHPL PVT LTD #12,15th cross, Outer Ring Rd, next to sri sai motors, sarakki village, J. P. Nagar, Bengaluru, Karnataka 560078";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/bhpl.club";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/profile.php?id=61573969246784";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps?q=12.9066174,77.5744505&output=embed";

pub fn page_title(page: &str) -> String {
    format!("{} | {}", page, SITE_NAME)
}
