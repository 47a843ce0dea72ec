mod error;
mod operations;
mod requests;
mod types;

pub use error::CalendarError;
pub use operations::validate_calendar_name;
pub use requests::{CreateCalendarRequest, UpdateCalendarRequest};
pub use types::{Calendar, CalendarId, OwnerId};
