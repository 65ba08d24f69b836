use anyhow::Result;
use monthcal_core::CalendarView;
use monthcal_core::storage::Storage;
use owo_colors::OwoColorize;

use super::resolve_id;

pub fn run<S: Storage>(view: &mut CalendarView<S>, id: &str) -> Result<()> {
    let id = resolve_id(view, id)?;
    let title = view
        .store()
        .get(&id)
        .map(|e| e.title.clone())
        .unwrap_or_default();

    if !view.delete_event(&id) {
        anyhow::bail!("No event with id '{}'", id);
    }

    println!("{}", format!("  Deleted: {}", title).red());

    Ok(())
}
