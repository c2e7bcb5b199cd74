use bevy::{
    app::App,
    ecs::schedule::{ExecutorKind, ScheduleLabel},
};

/// Runs exactly once, on the frame after the first XR frame was seen.
/// Head and hand poses are trustworthy from here on.
#[derive(Debug, ScheduleLabel, Clone, Copy, Hash, PartialEq, Eq)]
pub struct XrSessionStable;

pub(super) fn add_schedules(app: &mut App) {
    // systems may already have been added to the label by an earlier plugin, which
    // creates the schedule with the default executor
    app.edit_schedule(XrSessionStable, |schedule| {
        schedule
            .set_executor_kind(ExecutorKind::SingleThreaded)
            .set_apply_final_deferred(true);
    });
}
