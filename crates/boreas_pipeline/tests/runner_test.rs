// End-to-end pipeline runs over stubbed collaborators, through to the
// written CSV report.

mod test_utils;

use boreas_core::{RunConfig, SamplerConfig};
use boreas_pipeline::{Dataset, ObservationPair, PipelineRunner};
use test_utils::ScriptedGenerator;

const VALID_REPLY: &str = r#"{"prob_new": [0.05, 0.2, 0.5, 0.2, 0.05]}"#;

fn synthetic_dataset(len: usize) -> Dataset {
    Dataset::from_pairs(
        (0..len)
            .map(|i| ObservationPair::new(i as f64, i as f64 + 0.5))
            .collect(),
    )
}

fn read_report(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("report should open");
    reader
        .records()
        .map(|record| {
            record
                .expect("report record should parse")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[tokio::test]
async fn two_windows_ten_trials_yield_twenty_ordered_rows() -> anyhow::Result<()> {
    let narrative_stub = ScriptedGenerator::fixed("a narrative");
    let extraction_stub = ScriptedGenerator::fixed(VALID_REPLY);

    // 5-row windows over 10 rows bounded at 6: offsets 0 and 1 fit
    let config = RunConfig::builder()
        .sampler(
            SamplerConfig::builder()
                .window_length(5)
                .start_offset(0)
                .upper_bound(6)
                .build(),
        )
        .build();

    let runner = PipelineRunner::new(&narrative_stub, &extraction_stub, config);
    let results = runner.run(&synthetic_dataset(10)).await?;

    assert_eq!(results.len(), 20);

    // window ascending, trial ascending within window
    let expected: Vec<(usize, u32)> = (0..2).flat_map(|w| (1..=10).map(move |t| (w, t))).collect();
    let actual: Vec<(usize, u32)> = results
        .records()
        .iter()
        .map(|record| (*record.window_index(), *record.trial_index()))
        .collect();
    assert_eq!(actual, expected);

    let dir = tempfile::tempdir()?;
    let path = results.write_report(dir.path())?;
    assert!(path.ends_with("probs_stub-model.csv"));

    let rows = read_report(&path);
    assert_eq!(rows.len(), 21); // header + 20 trials
    assert_eq!(
        rows[0],
        vec![
            "window",
            "model",
            "trial",
            "prob_new_1",
            "prob_new_2",
            "prob_new_3",
            "prob_new_4",
            "prob_new_5"
        ]
    );
    assert_eq!(rows[1], vec!["0", "stub-model", "1", "0.05", "0.2", "0.5", "0.2", "0.05"]);
    assert_eq!(rows[20][0], "1");
    assert_eq!(rows[20][2], "10");
    Ok(())
}

#[tokio::test]
async fn single_window_dataset_yields_ten_rows_at_window_zero() -> anyhow::Result<()> {
    let narrative_stub = ScriptedGenerator::fixed("a narrative");
    let extraction_stub = ScriptedGenerator::fixed(VALID_REPLY);

    // Reference geometry: 48 rows admit only 28+20 <= 48
    let runner = PipelineRunner::new(&narrative_stub, &extraction_stub, RunConfig::default());
    let results = runner.run(&synthetic_dataset(48)).await?;

    assert_eq!(results.len(), 10);
    assert!(
        results
            .records()
            .iter()
            .all(|record| *record.window_index() == 0)
    );
    assert_eq!(narrative_stub.call_count(), 10);
    Ok(())
}

#[tokio::test]
async fn short_dataset_yields_an_empty_report() -> anyhow::Result<()> {
    let narrative_stub = ScriptedGenerator::fixed("a narrative");
    let extraction_stub = ScriptedGenerator::fixed(VALID_REPLY);

    let runner = PipelineRunner::new(&narrative_stub, &extraction_stub, RunConfig::default());
    let results = runner.run(&synthetic_dataset(40)).await?;

    assert!(results.is_empty());
    assert_eq!(narrative_stub.call_count(), 0);

    let dir = tempfile::tempdir()?;
    let path = results.write_report(dir.path())?;
    let rows = read_report(&path);
    assert_eq!(rows.len(), 1); // header only
    Ok(())
}

#[tokio::test]
async fn a_fatal_trial_aborts_the_whole_run() {
    let narrative_stub = ScriptedGenerator::fixed("a narrative");
    // valid for window 0, then permanently unparseable
    let mut replies = vec![Ok(VALID_REPLY.to_string()); 10];
    replies.push(Ok("no json here".to_string()));
    let extraction_stub = ScriptedGenerator::new(replies);

    let config = RunConfig::builder()
        .sampler(
            SamplerConfig::builder()
                .window_length(5)
                .start_offset(0)
                .upper_bound(6)
                .build(),
        )
        .build();

    let runner = PipelineRunner::new(&narrative_stub, &extraction_stub, config);
    let result = runner.run(&synthetic_dataset(10)).await;

    assert!(result.is_err());
    // window 0 completed, window 1 burned both attempts of trial 1
    assert_eq!(narrative_stub.call_count(), 12);
}
