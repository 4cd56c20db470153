use crate::models::summary::{ContextSummary, MajorEntry};

/// Group major entries by context, summing original and adjusted time.
/// Contexts and their task lists both keep first-seen order, so the
/// summary is reproducible run to run.
pub fn aggregate_contexts(majors: &[MajorEntry]) -> Vec<ContextSummary> {
    let mut contexts: Vec<ContextSummary> = Vec::new();

    for major in majors {
        match contexts.iter_mut().find(|c| c.context == major.context) {
            Some(ctx) => {
                ctx.original_minutes += major.original_minutes;
                ctx.minutes += major.minutes;
                ctx.hours += major.hours;
                if !ctx.tasks.contains(&major.description) {
                    ctx.tasks.push(major.description.clone());
                }
            }
            None => contexts.push(ContextSummary {
                context: major.context.clone(),
                original_minutes: major.original_minutes,
                minutes: major.minutes,
                hours: major.hours,
                tasks: vec![major.description.clone()],
            }),
        }
    }

    contexts
}
