use std::sync::{Arc, Mutex};

use planner_app::{
    Service as AppService, Settings, SettingsService, WeightUnit, format,
    log::{self as app_log, Service as _},
};
use planner_domain::{Service, UpdateError, WorkoutService, sample_workout};
use planner_storage::{json_file::JsonFile, memory::Memory};
use pretty_assertions::assert_eq;

#[test]
fn test_workout_session() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFile::new(dir.path());
    let app = AppService::new(storage.clone());
    app.set_settings(Settings {
        weight_unit: WeightUnit::Kilograms,
        log_level: log::LevelFilter::Debug,
    })
    .unwrap();

    let settings = app.get_settings().unwrap();
    app_log::init(Arc::new(Mutex::new(storage)), settings.log_level).unwrap();

    let mut service = Service::new(Memory::new(sample_workout()));
    let exercises = service.get_exercises().unwrap();
    let curls = &exercises[0];

    assert_eq!(
        curls
            .sets
            .iter()
            .map(|s| format::set_line(s, settings.weight_unit))
            .collect::<Vec<_>>(),
        vec!["10 kg x 10 reps", "20 kg x 10 reps"]
    );

    service.toggle_completed(curls.id, curls.sets[0].id).unwrap();
    service
        .toggle_completed(exercises[1].id, exercises[1].sets[0].id)
        .unwrap();
    assert_eq!(
        format::progress_line(&service.get_summary().unwrap()),
        "2/4 sets (50%)"
    );

    service.remove_set(curls.id, 1).unwrap();
    assert!(matches!(
        service.remove_set(curls.id, 0),
        Err(UpdateError::MinimumSetViolation)
    ));
    assert_eq!(service.get_exercise(curls.id).unwrap().sets, vec![{
        let mut set = curls.sets[0].clone();
        set.toggle_completed();
        set
    }]);

    let entries = app.get_log_entries().unwrap();
    assert!(
        entries
            .iter()
            .any(|e| e.message == "failed to remove set: an exercise must keep at least one set")
    );
}
