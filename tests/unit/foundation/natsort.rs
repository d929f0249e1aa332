use super::*;

#[test]
fn embedded_numbers_compare_numerically() {
    let mut names = vec!["drone10", "drone2", "drone1"];
    natural_sort(&mut names);
    assert_eq!(names, vec!["drone1", "drone2", "drone10"]);
}

#[test]
fn plain_text_falls_back_to_code_point_order() {
    assert_eq!(natural_cmp("alpha", "beta"), Ordering::Less);
    assert_eq!(natural_cmp("Beta", "alpha"), Ordering::Less);
    assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
}

#[test]
fn prefix_sorts_first() {
    assert_eq!(natural_cmp("drone", "drone1"), Ordering::Less);
    assert_eq!(natural_cmp("d1", "d1a"), Ordering::Less);
}

#[test]
fn multiple_numeric_runs() {
    let mut names = vec!["row2-col10", "row10-col1", "row2-col9", "row1-col99"];
    natural_sort(&mut names);
    assert_eq!(
        names,
        vec!["row1-col99", "row2-col9", "row2-col10", "row10-col1"]
    );
}

#[test]
fn leading_zeros_tie_break_is_total() {
    assert_eq!(natural_cmp("d01", "d1"), "d01".cmp("d1"));
    assert_ne!(natural_cmp("d01", "d1"), Ordering::Equal);
    assert_eq!(natural_cmp("d002", "d10"), Ordering::Less);
}

#[test]
fn very_long_digit_runs_do_not_overflow() {
    let a = "uav99999999999999999999999999";
    let b = "uav100000000000000000000000000";
    assert_eq!(natural_cmp(a, b), Ordering::Less);
}

#[test]
fn digits_sort_before_text() {
    assert_eq!(natural_cmp("1", "a"), Ordering::Less);
    assert_eq!(natural_cmp("x-a", "x-1"), Ordering::Greater);
}
