//! End-to-end routine optimization scenarios.

use u_routine::aco::{AntColonyConfig, AntColonySolver};
use u_routine::ga::{GeneticConfig, GeneticSolver};
use u_routine::schedule::{Course, EventKind, ScheduleConfig, SlotGrid};
use u_routine::{optimize_routine, Algorithm, FitnessEvaluator, OptimizedRoutine, RoutineOptimizer};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn two_courses() -> Vec<Course> {
    vec![Course::new("CSE110", 5.0), Course::new("MAT120", 3.0)]
}

fn monday() -> ScheduleConfig {
    ScheduleConfig::default()
        .with_days(["Monday"])
        .with_dinner_hour(8)
}

fn assert_valid(result: &OptimizedRoutine, schedule: &ScheduleConfig, codes: &[&str]) {
    let grid = SlotGrid::new(schedule);
    assert!(result.len() <= grid.len());
    for (key, code) in &result.routine {
        assert!(grid.keys().any(|k| k == key), "unknown slot {key}");
        assert!(codes.contains(&code.as_str()), "unknown course {code}");
    }
}

// ---- small week ----

#[test]
fn genetic_small_week() {
    init_logger();
    let schedule = monday();
    let solver = GeneticSolver::new(two_courses(), schedule.clone());
    let result = solver.optimize(10, 5).unwrap();

    assert!(result.fitness >= 0.0);
    assert_valid(&result, &schedule, &["CSE110", "MAT120"]);
    assert!(result.course_at("Monday", 8).is_none());
}

#[test]
fn ant_colony_small_week() {
    init_logger();
    let schedule = monday();
    let solver = AntColonySolver::new(two_courses(), schedule.clone());
    let result = solver.optimize(10).unwrap();

    assert!(result.fitness.is_finite());
    assert_valid(&result, &schedule, &["CSE110", "MAT120"]);
}

// ---- degenerate input ----

#[test]
fn no_courses_gives_empty_routine() {
    init_logger();
    let courses: Vec<Course> = Vec::new();
    let ga = GeneticSolver::new(&courses, ScheduleConfig::default());
    let aco = AntColonySolver::new(&courses, ScheduleConfig::default());

    assert_eq!(ga.optimize_routine().unwrap(), OptimizedRoutine::empty());
    assert_eq!(aco.optimize_routine().unwrap(), OptimizedRoutine::empty());
}

// ---- full week ----

#[test]
fn full_week_reported_fitness_matches_routine() {
    init_logger();
    let mut courses = vec![
        Course::new("CSE110", 3.0),
        Course::new("MAT120", 3.0),
        Course::new("PHY111", 2.0),
        Course::new("ENG101", 1.0),
    ];
    courses[0].register_event(EventKind::Midterm);
    courses[2].register_event(EventKind::Quiz);

    let schedule = ScheduleConfig::default();
    let grid = SlotGrid::new(&schedule);
    assert_eq!(grid.len(), 30);

    let ga = GeneticSolver::new(&courses, schedule.clone())
        .with_config(GeneticConfig::default().with_seed(2024));
    let aco = AntColonySolver::new(&courses, schedule.clone())
        .with_config(AntColonyConfig::default().with_seed(2024));

    for result in [ga.optimize_routine().unwrap(), aco.optimize_routine().unwrap()] {
        assert_valid(&result, &schedule, &["CSE110", "MAT120", "PHY111", "ENG101"]);

        // Rebuild the gene vector from the routine and rescore it.
        let domain = ga.domain();
        let genes: Vec<_> = grid
            .keys()
            .map(|key| {
                result
                    .routine
                    .get(key)
                    .and_then(|code| domain.course_codes().iter().position(|c| c == code))
            })
            .collect();
        let rescored = FitnessEvaluator::new(&domain).score(&genes);
        assert_eq!(rescored, result.fitness);
    }
}

#[test]
fn event_pressure_changes_next_run() {
    init_logger();
    let mut solver = GeneticSolver::new(vec![Course::new("CSE110", 2.0)], monday())
        .with_config(GeneticConfig::default().with_empty_slots(true).with_seed(8));

    let before = solver.optimize(50, 40).unwrap();
    solver.courses_mut()[0].register_event(EventKind::Final);
    let after = solver.optimize(50, 40).unwrap();

    assert_eq!(before.fitness, 2.0);
    assert_eq!(after.fitness, 6.0);
}

// ---- dispatch ----

#[test]
fn dispatch_by_name() {
    init_logger();
    let courses = two_courses();
    let schedule = ScheduleConfig::default().with_days(["Monday", "Wednesday"]);
    for name in ["genetic", "ant_colony"] {
        let algorithm: Algorithm = name.parse().unwrap();
        let result = optimize_routine(algorithm, &courses, &schedule).unwrap();
        assert_valid(&result, &schedule, &["CSE110", "MAT120"]);
    }
}
