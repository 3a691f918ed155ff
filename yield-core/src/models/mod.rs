mod input;
mod schedule;
mod view_mode;

pub use input::{InputField, InputFieldId, InputModel};
pub use schedule::{SchedulePoint, YieldSchedule};
pub use view_mode::ViewMode;
