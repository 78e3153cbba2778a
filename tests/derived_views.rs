#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
    use studymate::db::collections::MemoryStore;
    use studymate::libs::activity::{recent_activity, ActivityKind, ACTIVITY_LIMIT};
    use studymate::libs::clock::FixedClock;
    use studymate::libs::context::DataContext;
    use studymate::libs::event::NewEvent;
    use studymate::libs::goal::{GoalPatch, NewGoal};
    use studymate::libs::productivity::{
        average_goal_progress, completion_rate, due_soon, filter_tasks, goals_by_target_date, overdue_count,
        upcoming_deadlines, upcoming_events,
    };
    use studymate::libs::summary::DashboardSummary;
    use studymate::libs::task::{NewTask, Priority, StatusFilter, Task, TaskFilter, TaskPatch};
    use test_context::{test_context, TestContext};

    struct ViewTestContext {
        data: DataContext,
    }

    impl TestContext for ViewTestContext {
        fn setup() -> Self {
            let start = Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap();
            let clock = FixedClock::ticking(start, Duration::minutes(1));
            ViewTestContext {
                data: DataContext::with_clock(Box::new(MemoryStore::new()), Box::new(clock)),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
    }

    fn task(title: &str, due: NaiveDate, priority: Priority) -> NewTask {
        NewTask {
            priority,
            ..NewTask::new(title, due)
        }
    }

    #[test_context(ViewTestContext)]
    #[test]
    fn test_completion_rate_bounds(ctx: &mut ViewTestContext) {
        assert_eq!(completion_rate(ctx.data.tasks()), 0.0);

        let a = ctx.data.add(NewTask::new("Essay", date(2025, 8, 1)));
        let b = ctx.data.add(NewTask::new("Lab report", date(2025, 8, 3)));
        ctx.data.update(&a.id, TaskPatch::completed(true));
        assert_eq!(completion_rate(ctx.data.tasks()), 50.0);

        ctx.data.update(&b.id, TaskPatch::completed(true));
        assert_eq!(completion_rate(ctx.data.tasks()), 100.0);
    }

    #[test_context(ViewTestContext)]
    #[test]
    fn test_essay_overdue_scenario(ctx: &mut ViewTestContext) {
        ctx.data.add(NewTask::new("Old", date(2025, 6, 1)));
        let before_due = at(2025, 7, 31, 18);
        let after_due = at(2025, 8, 1, 12);
        let baseline = overdue_count(ctx.data.tasks(), after_due);

        let essay = ctx.data.add(task("Essay", date(2025, 8, 1), Priority::High));
        assert_eq!(overdue_count(ctx.data.tasks(), before_due), baseline);
        assert_eq!(overdue_count(ctx.data.tasks(), after_due), baseline + 1);

        ctx.data.delete::<Task>(&essay.id);
        assert_eq!(overdue_count(ctx.data.tasks(), after_due), baseline);
    }

    #[test_context(ViewTestContext)]
    #[test]
    fn test_upcoming_deadlines_sorted_and_capped(ctx: &mut ViewTestContext) {
        for day in [9, 3, 7, 5, 4, 8, 6] {
            ctx.data.add(NewTask::new(&format!("Due {}", day), date(2025, 8, day)));
        }
        let done = ctx.data.add(NewTask::new("Done", date(2025, 8, 2)));
        ctx.data.update(&done.id, TaskPatch::completed(true));
        ctx.data.add(NewTask::new("Past", date(2025, 7, 1)));

        let now = at(2025, 8, 1, 10);
        let upcoming = upcoming_deadlines(ctx.data.tasks(), now, 5);
        let days: Vec<u32> = upcoming.iter().map(|t| chrono::Datelike::day(&t.due_date)).collect();
        assert_eq!(days, vec![3, 4, 5, 6, 7]);
    }

    #[test_context(ViewTestContext)]
    #[test]
    fn test_due_soon_window(ctx: &mut ViewTestContext) {
        ctx.data.add(NewTask::new("Tomorrow", date(2025, 8, 1)));
        ctx.data.add(NewTask::new("In two days", date(2025, 8, 2)));
        ctx.data.add(NewTask::new("Today", date(2025, 7, 31)));

        let reminders = due_soon(ctx.data.tasks(), at(2025, 7, 31, 18));
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].task.title, "Tomorrow");
        assert_eq!(reminders[0].hours_left, 6);
    }

    #[test_context(ViewTestContext)]
    #[test]
    fn test_task_filter(ctx: &mut ViewTestContext) {
        let high = ctx.data.add(task("Essay", date(2025, 8, 1), Priority::High));
        ctx.data.add(task("Reading", date(2025, 8, 2), Priority::Low));
        ctx.data.add(task("Slides", date(2025, 8, 3), Priority::High));
        ctx.data.update(&high.id, TaskPatch::completed(true));

        let pending_high = TaskFilter {
            status: StatusFilter::Pending,
            priority: Some(Priority::High),
        };
        let titles: Vec<&str> = filter_tasks(ctx.data.tasks(), &pending_high).iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Slides"]);

        let completed = TaskFilter {
            status: StatusFilter::Completed,
            priority: None,
        };
        assert_eq!(filter_tasks(ctx.data.tasks(), &completed).len(), 1);
        assert_eq!(filter_tasks(ctx.data.tasks(), &TaskFilter::default()).len(), 3);
    }

    #[test_context(ViewTestContext)]
    #[test]
    fn test_goals_progress_and_order(ctx: &mut ViewTestContext) {
        assert_eq!(average_goal_progress(ctx.data.goals()), 0.0);

        let late = ctx.data.add(NewGoal::new("Late", date(2025, 12, 31)));
        let early = ctx.data.add(NewGoal::new("Early", date(2025, 7, 15)));
        ctx.data.update(&late.id, GoalPatch::progress(100));
        ctx.data.update(&early.id, GoalPatch::progress(50));

        assert_eq!(average_goal_progress(ctx.data.goals()), 75.0);
        let ordered: Vec<&str> = goals_by_target_date(ctx.data.goals()).iter().map(|g| g.title.as_str()).collect();
        assert_eq!(ordered, vec!["Early", "Late"]);

        let now = at(2025, 8, 1, 0);
        assert!(ctx.data.goal(&early.id).unwrap().is_overdue(now));
        assert!(!ctx.data.goal(&late.id).unwrap().is_overdue(now));
    }

    #[test_context(ViewTestContext)]
    #[test]
    fn test_upcoming_events_include_today(ctx: &mut ViewTestContext) {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        ctx.data.add(NewEvent::new("Yesterday", date(2025, 7, 30), nine));
        ctx.data.add(NewEvent::new("Later", date(2025, 8, 10), nine));
        ctx.data.add(NewEvent::new("Today", date(2025, 7, 31), nine));
        ctx.data.add(NewEvent::new("Soon", date(2025, 8, 2), nine));
        ctx.data.add(NewEvent::new("Far", date(2025, 9, 1), nine));

        let now = at(2025, 7, 31, 18);
        let titles: Vec<&str> = upcoming_events(ctx.data.events(), now, 3).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Today", "Soon", "Later"]);
    }

    #[test_context(ViewTestContext)]
    #[test]
    fn test_dashboard_summary(ctx: &mut ViewTestContext) {
        let essay = ctx.data.add(NewTask::new("Essay", date(2025, 8, 1)));
        ctx.data.add(NewTask::new("Overdue", date(2025, 7, 20)));
        ctx.data.update(&essay.id, TaskPatch::completed(true));
        let goal = ctx.data.add(NewGoal::new("Read", date(2025, 12, 31)));
        ctx.data.update(&goal.id, GoalPatch::progress(100));
        ctx.data.add(NewEvent::new("Exam", date(2025, 8, 5), NaiveTime::from_hms_opt(9, 0, 0).unwrap()));

        let summary = DashboardSummary::compute(ctx.data.snapshot(), at(2025, 7, 31, 18));
        assert_eq!(summary.total_tasks, 2);
        assert_eq!(summary.completed_tasks, 1);
        assert_eq!(summary.completion_rate, 50.0);
        assert_eq!(summary.total_goals, 1);
        assert_eq!(summary.completed_goals, 1);
        assert_eq!(summary.average_goal_progress, 100.0);
        assert_eq!(summary.upcoming_events, 1);
        assert_eq!(summary.overdue_tasks, 1);
    }

    #[test_context(ViewTestContext)]
    #[test]
    fn test_recent_activity_feed(ctx: &mut ViewTestContext) {
        for i in 0..7 {
            ctx.data.add(NewTask::new(&format!("Task {}", i), date(2025, 8, 1)));
        }
        let last = ctx.data.tasks().last().unwrap().id.clone();
        ctx.data.update(&last, TaskPatch::completed(true));
        for i in 0..4 {
            ctx.data.add(NewGoal::new(&format!("Goal {}", i), date(2025, 12, 31)));
        }
        ctx.data.add(NewEvent::new("Exam", date(2025, 8, 5), NaiveTime::from_hms_opt(9, 0, 0).unwrap()));

        let feed = recent_activity(ctx.data.snapshot(), ACTIVITY_LIMIT);
        assert_eq!(feed.len(), ACTIVITY_LIMIT);
        assert_eq!(feed[0].kind, ActivityKind::Event);
        assert_eq!(feed[0].summary, "Event: Exam");
        assert_eq!(feed[1].summary, "Goal: Goal 3 (0%)");
        assert!(feed.iter().any(|a| a.summary == "Completed: Task 6"));
        assert!(feed.windows(2).all(|pair| pair[0].at >= pair[1].at));
        // Only the last five tasks are considered
        assert!(!feed.iter().any(|a| a.summary == "Created: Task 1"));
    }
}
