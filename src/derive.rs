//! Derived display facts for tasks.
//!
//! Pure, side-effect-free functions mapping a task's stored state to the
//! booleans and numbers the dashboard renders: overdue and due-today flags,
//! progress, and subtask completion. All date logic is calendar-day based;
//! callers pass "today" explicitly so the functions stay deterministic and
//! testable.
//!
//! The overdue rule is uniform: a task is overdue iff its due date is strictly
//! before today and its status is not terminal. A task due today is due-today,
//! never overdue, so the two flags are mutually exclusive by construction.

use chrono::NaiveDate;

use crate::fields::Status;
use crate::task::Task;

/// True iff the task has a due date strictly before `today` and is not in a
/// terminal status. Done and cancelled tasks are never overdue.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    if task.status.is_terminal() {
        return false;
    }
    match task.due {
        Some(due) => due < today,
        None => false,
    }
}

/// True iff the task's due date falls on `today`, independent of time of day.
pub fn is_due_today(task: &Task, today: NaiveDate) -> bool {
    task.due == Some(today)
}

/// True iff the task is due within the next `horizon_days` days, exclusive of
/// today itself and of anything already overdue or terminal.
pub fn is_due_soon(task: &Task, today: NaiveDate, horizon_days: i64) -> bool {
    if task.status.is_terminal() {
        return false;
    }
    match task.due {
        Some(due) => {
            let delta = (due - today).num_days();
            delta > 0 && delta <= horizon_days
        }
        None => false,
    }
}

/// Coarse progress heuristic from status alone.
///
/// This is a display hint, not a measured value; `effective_progress` prefers
/// an explicit progress field when the record carries one.
pub fn progress_estimate(status: Status) -> u8 {
    match status {
        Status::Done => 100,
        Status::Todo => 0,
        Status::InProgress => 50,
        Status::Review => 75,
        Status::Testing => 85,
        Status::Blocked | Status::Cancelled => 25,
    }
}

/// Progress percentage in [0, 100]: the explicit field when present (clamped),
/// otherwise the status-based estimate.
pub fn effective_progress(task: &Task) -> u8 {
    match task.progress {
        Some(p) => p.min(100),
        None => progress_estimate(task.status),
    }
}

/// Completion ratio of a task's direct subtasks as (done, total).
/// Returns None when the task has no subtasks.
pub fn subtask_ratio(task: &Task, tasks: &[Task]) -> Option<(usize, usize)> {
    let mut total = 0;
    let mut done = 0;
    for t in tasks.iter().filter(|t| t.parent == Some(task.id)) {
        total += 1;
        if t.status == Status::Done {
            done += 1;
        }
    }
    if total == 0 {
        None
    } else {
        Some((done, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn task_due(status: Status, due: Option<NaiveDate>) -> Task {
        let mut t = Task::new(1, "t");
        t.status = status;
        t.due = due;
        t
    }

    #[test]
    fn test_overdue_yesterday_but_not_when_done() {
        let yesterday = today() - Duration::days(1);
        let t = task_due(Status::InProgress, Some(yesterday));
        assert!(is_overdue(&t, today()));
        assert!(!is_due_today(&t, today()));

        let done = task_due(Status::Done, Some(yesterday));
        assert!(!is_overdue(&done, today()));
        let cancelled = task_due(Status::Cancelled, Some(yesterday));
        assert!(!is_overdue(&cancelled, today()));
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let t = task_due(Status::Todo, Some(today()));
        assert!(is_due_today(&t, today()));
        assert!(!is_overdue(&t, today()));
    }

    #[test]
    fn test_overdue_and_due_today_never_both() {
        let dates = [
            None,
            Some(today() - Duration::days(3)),
            Some(today()),
            Some(today() + Duration::days(3)),
        ];
        for status in Status::ALL {
            for due in dates {
                let t = task_due(status, due);
                assert!(
                    !(is_overdue(&t, today()) && is_due_today(&t, today())),
                    "both flags set for {status:?} due {due:?}"
                );
            }
        }
    }

    #[test]
    fn test_no_due_date_means_neither_flag() {
        let t = task_due(Status::Todo, None);
        assert!(!is_overdue(&t, today()));
        assert!(!is_due_today(&t, today()));
        assert!(!is_due_soon(&t, today(), 7));
    }

    #[test]
    fn test_due_soon_window() {
        let t = task_due(Status::Todo, Some(today() + Duration::days(3)));
        assert!(is_due_soon(&t, today(), 7));
        assert!(!is_due_soon(&t, today(), 2));
        // Today and past dates are not "soon".
        assert!(!is_due_soon(&task_due(Status::Todo, Some(today())), today(), 7));
        let past = task_due(Status::Todo, Some(today() - Duration::days(1)));
        assert!(!is_due_soon(&past, today(), 7));
    }

    #[test]
    fn test_progress_estimate_table() {
        assert_eq!(progress_estimate(Status::Done), 100);
        assert_eq!(progress_estimate(Status::Todo), 0);
        assert_eq!(progress_estimate(Status::InProgress), 50);
        assert_eq!(progress_estimate(Status::Review), 75);
        assert_eq!(progress_estimate(Status::Testing), 85);
        assert_eq!(progress_estimate(Status::Blocked), 25);
        assert_eq!(progress_estimate(Status::Cancelled), 25);
    }

    #[test]
    fn test_explicit_progress_wins() {
        let mut t = task_due(Status::Review, None);
        assert_eq!(effective_progress(&t), 75);
        t.progress = Some(30);
        assert_eq!(effective_progress(&t), 30);
        t.progress = Some(130);
        assert_eq!(effective_progress(&t), 100);
    }

    #[test]
    fn test_subtask_ratio() {
        let mut parent = Task::new(1, "parent");
        parent.status = Status::InProgress;
        let mut a = Task::new(2, "a");
        a.parent = Some(1);
        a.status = Status::Done;
        let mut b = Task::new(3, "b");
        b.parent = Some(1);
        let unrelated = Task::new(4, "c");
        let tasks = vec![parent.clone(), a, b, unrelated];

        assert_eq!(subtask_ratio(&parent, &tasks), Some((1, 2)));
        assert_eq!(subtask_ratio(&tasks[3], &tasks), None);
    }
}
