pub mod off;
pub mod settings;
pub mod summary;
pub mod work_day;

pub use off::{DateRange, OffAnnotation, OffKind, OffSource, RecurringHoliday, TimeOff, TimeOffKind};
pub use settings::Targets;
pub use summary::{
    DailyTargets, DayEntry, DayStatus, DaySummary, Status, WeekStatus, WeekSummary, WeekTargets,
    YearCalendar,
};
pub use work_day::WorkDay;
