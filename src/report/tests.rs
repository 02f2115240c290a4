use crate::report::{format_levels, format_solution, format_summary};
use crate::solver::{Solution, ValueStore};

fn two_levels() -> ValueStore {
    let mut store = ValueStore::new(3);
    store.push_level();
    store.push_level();
    store
}

#[test]
fn test_format_solution() {
    let solution = Solution {
        target: 0,
        path: "(4-4)".to_string(),
        uses: 2,
    };
    assert_eq!(format_solution(&solution), "0 = (4-4) (uses 2)");
}

#[test]
fn test_format_levels() {
    let report = format_levels(&two_levels());
    assert_eq!(report, "\nUsed 3, 1 times:\n\n3 = 3\n\nUsed 3, 2 times:\n\n33 = 33\n");
}

#[test]
fn test_format_summary() {
    let report = format_summary(&two_levels());
    assert_eq!(
        report,
        "\nTotal Report:\nNumbers produced with 1, 3s: 1\nNumbers produced with 2, 3s: 1\n"
    );
}

#[test]
fn test_format_empty_store() {
    let store = ValueStore::new(4);
    assert_eq!(format_levels(&store), "");
    assert_eq!(format_summary(&store), "\nTotal Report:\n");
}

#[test]
fn test_format_levels_sorted_by_value() {
    let result = crate::calculate_with_store(4, &[2]);
    assert!(result.is_ok());
    if let Ok(calculation) = result {
        let report = format_levels(&calculation.store);
        let lines: Vec<_> = report.lines().filter(|l| l.contains(" = ")).collect();
        assert_eq!(
            lines,
            vec![
                "-24 = (-(4!))",
                "-4 = (-4)",
                "-2 = (-(√4))",
                "2 = (√4)",
                "4 = 4",
                "24 = (4!)"
            ]
        );
    }
}
