use super::schedule::Schedule;
use crate::error::Result;

/// Presentation seam for schedules.
///
/// The engine only produces data; whoever owns the output surface implements
/// this and is handed the full schedule again after every change.
pub trait ScheduleRenderer {
    fn render(&mut self, schedule: &Schedule) -> Result<()>;
}

pub type ScheduleRendererBox<'a> = Box<dyn ScheduleRenderer + 'a>;
