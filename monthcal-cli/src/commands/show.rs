use anyhow::Result;
use monthcal_core::storage::Storage;
use monthcal_core::{CalendarView, Month};

use crate::render::render_month;

/// Print the month grid for `month` (or the current one), moved by `shift`
/// months.
pub fn run<S: Storage>(view: &mut CalendarView<S>, month: Option<Month>, shift: i64) -> Result<()> {
    if let Some(month) = month {
        view.go_to_month(month);
    }

    if shift != 0 {
        let from = view.current_month();
        let Some(target) = from.checked_shift(shift) else {
            anyhow::bail!(
                "Cannot move {} months from {}: outside the supported date range",
                shift,
                from
            );
        };
        view.go_to_month(target);
    }

    let month = view.current_month();
    let week_start = view.week_start();
    let days = view.days();

    println!("{}", render_month(month, week_start, days));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::view;
    use super::*;

    #[test]
    fn shift_moves_the_shown_month() {
        let mut view = view();
        run(&mut view, Month::new(2024, 11), 3).unwrap();
        assert_eq!(view.current_month(), Month::new(2025, 2).unwrap());

        run(&mut view, None, -2).unwrap();
        assert_eq!(view.current_month(), Month::new(2024, 12).unwrap());
    }

    #[test]
    fn shift_past_the_date_range_is_an_error() {
        let mut view = view();
        let before = view.current_month();

        let err = run(&mut view, None, 3_200_000).unwrap_err();
        assert!(err.to_string().contains("outside the supported date range"));
        assert_eq!(view.current_month(), before);

        assert!(run(&mut view, None, -i64::from(u32::MAX)).is_err());
        assert_eq!(view.current_month(), before);
    }
}
