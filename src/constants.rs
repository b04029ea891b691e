use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const API_URL_ENV: &str = "CSQUARE_API_URL";

pub const CONFIG_FILE: &str = ".csquare-cli-config.json";
pub const SESSION_FILE: &str = ".csquare-session.json";
/// Key the bearer token is stored under inside the session file.
pub const TOKEN_KEY: &str = "adminToken";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Login lockout
pub const MAX_LOGIN_ATTEMPTS: u32 = 3;
pub const LOCKOUT_DURATION: Duration = Duration::from_secs(5 * 60);
pub const MAX_USERNAME_LEN: usize = 50;
pub const MAX_PASSWORD_LEN: usize = 100;

pub const MAX_INITIALS_LEN: usize = 3;

// REST paths
pub const EVENTS_PATH: &str = "/events";
pub const TEAM_PATH: &str = "/team";
pub const GALLERY_PATH: &str = "/gallery";
pub const CONTACT_PATH: &str = "/contact";
pub const LOGIN_PATH: &str = "/auth/login";
pub const VERIFY_PATH: &str = "/auth/verify";

// Drag-to-scroll: pointer delta is amplified before it moves the track.
pub const DRAG_SCROLL_MULTIPLIER: i32 = 2;

// TUI carousels, in terminal columns. Arrow keys move one card.
pub const CARD_WIDTH: u16 = 32;
pub const CARD_GAP: u16 = 2;
pub const CAROUSEL_STEP: i32 = (CARD_WIDTH + CARD_GAP) as i32;

/// Success and info notices disappear after this long; errors stay.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);
pub const TICK_RATE_MS: u64 = 100;
