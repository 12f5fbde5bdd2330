//! Custom assertion helpers over run sequences.

use df_protocol::{PipelineRun, RunStatus};

/// Assert that every finished run comes before every running one.
#[allow(dead_code)]
pub fn assert_running_last(runs: &[&PipelineRun]) {
    if let Some(first_running) = runs.iter().position(|r| r.status == RunStatus::Running) {
        assert!(
            runs[first_running..]
                .iter()
                .all(|r| r.status == RunStatus::Running),
            "finished run found after a running one"
        );
    }
}

/// Assert the per-run field invariants.
#[allow(dead_code)]
pub fn assert_run_invariants(run: &PipelineRun, sla_threshold_ms: u64) {
    assert!(
        run.processed_rows <= run.total_rows,
        "{}: processed {} > total {}",
        run.name,
        run.processed_rows,
        run.total_rows
    );

    match run.status {
        RunStatus::Running => {
            assert!(run.end_time.is_none(), "{}: running with end time", run.name);
            assert!(run.duration_ms.is_none(), "{}: running with duration", run.name);
            assert!(run.sla_outcome().is_none());
            assert!(!run.sla_met);
        }
        RunStatus::Succeeded | RunStatus::Failed => {
            let duration = run.duration_ms.expect("finished run has a duration");
            let end = run.end_time.expect("finished run has an end time");
            assert_eq!((end - run.start_time).num_milliseconds(), duration as i64);
            assert_eq!(run.sla_met, duration < sla_threshold_ms);
        }
    }
}

/// Names of `runs`, in order.
#[allow(dead_code)]
pub fn names(runs: &[&PipelineRun]) -> Vec<String> {
    runs.iter().map(|r| r.name.clone()).collect()
}
