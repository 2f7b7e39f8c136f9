
#[cfg(debug_assertions)]
pub fn is_dev_mode() -> bool {
    true  // Local trunk serve builds
}

#[cfg(not(debug_assertions))]
pub fn is_dev_mode() -> bool {
    false
}

pub const BUSINESS_NAME: &str = "NANO GRIT";
pub const BUSINESS_TAGLINE: &str = "Advanced Paint Protection Coatings";
pub const CONTACT_PHONE: &str = "+91XXXXXXXXXX";

// Booking wizard
pub const SUBMISSION_DELAY_MS: u32 = 2500;
pub const OFFER_NOTICE_DELAY_MS: u32 = 1000;

// Notifications
pub const SUCCESS_NOTICE_MS: u32 = 8000;
pub const DEFAULT_NOTICE_MS: u32 = 5000;

// Counters and live stats
pub const COUNTER_TICK_MS: u32 = 20;
pub const COUNTER_STEPS: u32 = 100;
pub const LIVE_STATS_INTERVAL_MS: u32 = 30_000;

// Social proof
pub const TESTIMONIAL_FIRST_MS: u32 = 3000;
pub const TESTIMONIAL_INTERVAL_MS: u32 = 8000;
pub const TESTIMONIAL_VISIBLE_MS: u32 = 4000;
pub const AVAILABILITY_FIRST_MS: u32 = 5000;
pub const AVAILABILITY_INTERVAL_MS: u32 = 15_000;
pub const AVAILABILITY_VISIBLE_MS: u32 = 5000;

pub const EXIT_INTENT_FALLBACK_MS: u32 = 120_000;
pub const CONTACT_SUCCESS_MS: u32 = 5000;

/// Mobile breakpoint shared by the navbar and exit-intent logic.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Opening hours as (open_hour, close_hour), close exclusive.
pub const WEEKDAY_HOURS: (u32, u32) = (9, 19);
pub const SUNDAY_HOURS: (u32, u32) = (9, 13);
