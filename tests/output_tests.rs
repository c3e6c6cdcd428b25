use ladder_paths::output::{format_ladder, format_path, LadderSummary, RouteSummary};

#[test]
fn test_format_path() {
    assert_eq!(format_path(&[0, 1, 2, 3], 4.0), "0 1 2 3 \nTotal cost is 4");
    assert_eq!(format_path(&[2], 0.0), "2 \nTotal cost is 0");
    assert_eq!(format_path(&[0, 1], 2.5), "0 1 \nTotal cost is 2.5");
}

#[test]
fn test_format_empty_path() {
    assert_eq!(format_path(&[], f64::INFINITY), "No path found");
}

#[test]
fn test_format_ladder() {
    let ladder = vec!["hit", "hot", "dot", "dog", "cog"];
    assert_eq!(format_ladder(&ladder), "Word ladder found: hit hot dot dog cog ");
    assert_eq!(format_ladder::<String>(&[]), "No word ladder found.");
}

#[test]
fn test_summaries_display() {
    let route = RouteSummary { path: &[0, 3], total: 7.0 };
    assert_eq!(route.to_string(), "0 3 \nTotal cost is 7");

    let words = vec!["cat".to_string(), "cot".to_string()];
    let ladder = LadderSummary { ladder: &words };
    assert_eq!(format!("{}", ladder), "Word ladder found: cat cot ");
}
