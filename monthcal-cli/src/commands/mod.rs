pub mod config;
pub mod day;
pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod show;

use anyhow::Result;
use monthcal_core::CalendarView;
use monthcal_core::storage::Storage;

/// Resolve a full event id from an exact id or a unique prefix of one.
pub fn resolve_id<S: Storage>(view: &CalendarView<S>, input: &str) -> Result<String> {
    let input = input.trim();

    if input.is_empty() {
        anyhow::bail!("Event id must not be empty");
    }

    if view.store().get(input).is_some() {
        return Ok(input.to_string());
    }

    let matches: Vec<&str> = view
        .events()
        .iter()
        .map(|e| e.id.as_str())
        .filter(|id| id.starts_with(input))
        .collect();

    match matches.as_slice() {
        [id] => Ok(id.to_string()),
        [] => anyhow::bail!("No event with id '{}'. Run `monthcal list` to see ids.", input),
        _ => anyhow::bail!(
            "Id prefix '{}' is ambiguous, it matches {} events",
            input,
            matches.len()
        ),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{add, view};
    use super::*;

    #[test]
    fn resolve_exact_id() {
        let mut view = view();
        let event = add(&mut view, "A", "2024-03-05T09:00", "2024-03-05T10:00");
        assert_eq!(resolve_id(&view, &event.id).unwrap(), event.id);
    }

    #[test]
    fn resolve_unique_prefix() {
        let mut view = view();
        let event = add(&mut view, "A", "2024-03-05T09:00", "2024-03-05T10:00");
        assert_eq!(resolve_id(&view, &event.id[..8]).unwrap(), event.id);
    }

    #[test]
    fn resolve_unknown_id_fails() {
        let mut view = view();
        add(&mut view, "A", "2024-03-05T09:00", "2024-03-05T10:00");
        assert!(resolve_id(&view, "zzzz-not-an-id").is_err());
        assert!(resolve_id(&view, "  ").is_err());
    }
}
