pub mod site;
pub mod utils;

pub use site::{
    print_dashboard, print_events, print_faculty, print_gallery, print_status, print_team,
    OutputFormat,
};
pub use utils::{format_event_date, format_event_time, format_tags, or_dash, preview, truncate};
