use serde::Deserialize;
use sortviz_core::{Algorithm, SnapshotRecorder, SortOrder, Sorter};
use sortviz_test_fixtures::scenarios;

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    algorithm: Algorithm,
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    input: Vec<i64>,
    order: SortOrder,
    expected: Vec<i64>,
    metrics: ExpectedMetrics,
}

#[derive(Debug, Deserialize)]
struct ExpectedMetrics {
    comparisons: u64,
    swaps: u64,
    function_calls: u64,
    loop_iterations: u64,
    max_recursion_depth: u32,
}

fn check_file(name: &str) -> anyhow::Result<()> {
    let file: ScenarioFile = scenarios::load(name)?;
    assert_eq!(file.algorithm.name(), name);

    let mut sorter: Sorter<i64, SnapshotRecorder<i64>> =
        Sorter::with_algorithm(file.algorithm, SnapshotRecorder::new());
    for case in &file.cases {
        sorter.set_data(&case.input);
        sorter.set_sort_order(case.order);
        let report = sorter.execute_sort(0, false);

        let ctx = format!("{name} {:?} {}", case.input, case.order);
        assert_eq!(sorter.data(), case.expected.as_slice(), "{ctx}");
        assert_eq!(report.comparisons, case.metrics.comparisons, "{ctx}");
        assert_eq!(report.swaps, case.metrics.swaps, "{ctx}");
        assert_eq!(report.function_calls, case.metrics.function_calls, "{ctx}");
        assert_eq!(
            report.loop_iterations, case.metrics.loop_iterations,
            "{ctx}"
        );
        assert_eq!(
            report.max_recursion_depth, case.metrics.max_recursion_depth,
            "{ctx}"
        );
    }
    Ok(())
}

#[test]
fn every_manifest_scenario_matches_its_oracle() -> anyhow::Result<()> {
    let keys = scenarios::keys();
    assert_eq!(keys.len(), Algorithm::ALL.len());
    for key in keys {
        check_file(&key)?;
    }
    Ok(())
}

#[test]
fn heap_sort_regression_oracle() -> anyhow::Result<()> {
    let file: ScenarioFile = scenarios::load("heap")?;
    let case = file
        .cases
        .iter()
        .find(|c| c.input == [4, 10, 3, 5, 1] && c.order == SortOrder::Ascending)
        .expect("heap fixture should contain [4,10,3,5,1] ascending");
    assert_eq!(case.expected, vec![1, 3, 4, 5, 10]);
    assert_eq!(case.metrics.swaps, 9);
    check_file("heap")
}
