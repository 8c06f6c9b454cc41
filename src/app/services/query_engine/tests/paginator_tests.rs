//! Tests for result pagination

use super::*;
use crate::app::services::query_engine::paginator::{paginate, sort_rows_desc};

#[test]
fn test_twenty_three_rows_make_three_pages_of_ten() {
    let rows = create_daily_run("wind1", "2024-01-01", 23, 2000.0);
    let page = paginate(&rows, 10, 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.rows.len(), 10);
    assert_eq!(page.start_index, 0);
    assert_eq!(page.end_index, 10);
}

#[test]
fn test_last_page_holds_remainder() {
    let rows = create_daily_run("wind1", "2024-01-01", 23, 2000.0);
    let page = paginate(&rows, 10, 3);
    assert_eq!(page.rows.len(), 3);
    assert_eq!(page.start_index, 20);
    assert_eq!(page.end_index, 23);
}

#[test]
fn test_page_past_end_clamps_to_last() {
    let rows = create_daily_run("wind1", "2024-01-01", 23, 2000.0);
    let page = paginate(&rows, 10, 10);
    assert_eq!(page.page, 3);
    assert_eq!(page.rows.len(), 3);
    assert_eq!(page.start_index, 20);
}

#[test]
fn test_page_zero_clamps_to_first() {
    let rows = create_daily_run("wind1", "2024-01-01", 23, 2000.0);
    let page = paginate(&rows, 10, 0);
    assert_eq!(page.page, 1);
    assert_eq!(page.start_index, 0);
}

#[test]
fn test_empty_rows_give_single_empty_page() {
    let page = paginate(&[], 10, 5);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 0);
    assert!(page.rows.is_empty());
    assert_eq!(page.start_index, 0);
    assert_eq!(page.end_index, 0);
}

#[test]
fn test_exact_multiple_has_no_ragged_page() {
    let rows = create_daily_run("wind1", "2024-01-01", 30, 2000.0);
    let page = paginate(&rows, 10, 3);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.rows.len(), 10);
}

#[test]
fn test_zero_page_size_treated_as_one() {
    let rows = create_daily_run("wind1", "2024-01-01", 5, 2000.0);
    let page = paginate(&rows, 0, 2);
    assert_eq!(page.page_size, 1);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.rows.len(), 1);
}

#[test]
fn test_sort_desc_is_stable_for_equal_dates() {
    // Two stations sharing every date: stable sort keeps wind1 rows ahead
    // of wind2 rows within each date, as generated.
    let mut rows = Vec::new();
    for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
        rows.push(create_test_sample("wind1", day, 2000.0, SampleStatus::Normal));
        rows.push(create_test_sample("wind2", day, 3000.0, SampleStatus::Normal));
    }
    sort_rows_desc(&mut rows);

    let order: Vec<(&str, String)> = rows
        .iter()
        .map(|s| (s.station_id.as_str(), s.date.to_string()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("wind1", "2024-01-03".to_string()),
            ("wind2", "2024-01-03".to_string()),
            ("wind1", "2024-01-02".to_string()),
            ("wind2", "2024-01-02".to_string()),
            ("wind1", "2024-01-01".to_string()),
            ("wind2", "2024-01-01".to_string()),
        ]
    );
}

#[test]
fn test_pagination_deterministic_over_sorted_rows() {
    let mut rows = create_daily_run("wind1", "2024-01-01", 23, 2000.0);
    sort_rows_desc(&mut rows);
    let first: Vec<_> = paginate(&rows, 10, 2).rows.to_vec();
    let second: Vec<_> = paginate(&rows, 10, 2).rows.to_vec();
    assert_eq!(first, second);
}
