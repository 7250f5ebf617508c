use super::{PaginationParams, DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Tests clamping of out-of-range pagination input.
///
/// Expected: page floored at 1, per_page clamped into 1..=50
#[test]
fn clamp_bounds_pagination() {
    let (page, per_page) = PaginationParams { page: 0, per_page: 0 }.clamp();
    assert_eq!(page, 1);
    assert_eq!(per_page, 1);

    let (page, per_page) = PaginationParams {
        page: 7,
        per_page: 10_000,
    }
    .clamp();
    assert_eq!(page, 7);
    assert_eq!(per_page, MAX_PER_PAGE);
}

/// Tests that in-range values pass through unchanged.
///
/// Expected: defaults are already in range
#[test]
fn clamp_keeps_valid_values() {
    let (page, per_page) = PaginationParams {
        page: 1,
        per_page: DEFAULT_PER_PAGE,
    }
    .clamp();
    assert_eq!(page, 1);
    assert_eq!(per_page, DEFAULT_PER_PAGE);
}
