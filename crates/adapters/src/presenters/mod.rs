use calc_study_application::SearchView;
use calc_study_domain::{CatalogEntry, DisguisePreset, PresetKey, ViewerState};

use crate::headless::HeadlessSnapshot;

pub fn present_entry_row(entry: &CatalogEntry) -> String {
    format!("{}\t{}\t{}", entry.id, entry.title, entry.url)
}

pub fn present_search_view(view: &SearchView<'_>) -> Vec<String> {
    match view {
        SearchView::NotLoaded => vec!["catalog not loaded".to_string()],
        SearchView::NoMatches => vec!["No resources available".to_string()],
        SearchView::Matches(entries) => entries
            .iter()
            .map(|entry| present_entry_row(entry))
            .collect(),
    }
}

pub fn present_preset_row(preset: &DisguisePreset, active: PresetKey) -> String {
    let marker = if preset.key == active { "*" } else { " " };
    format!(
        "{marker} {:<12}{:<10}{}\t{}",
        preset.key.as_str(),
        preset.short_label(),
        preset.display_title,
        preset.icon_uri
    )
}

pub fn present_viewer(state: &ViewerState) -> String {
    match state.selected_entry() {
        None => "viewer closed".to_string(),
        Some(entry) => format!(
            "viewing {} ({}){}",
            entry.title,
            entry.url,
            if state.is_fullscreen() {
                " [fullscreen]"
            } else {
                ""
            }
        ),
    }
}

pub fn present_snapshot(snapshot: &HeadlessSnapshot) -> Vec<String> {
    let mut lines = vec![
        format!("title={}", snapshot.title),
        format!("favicon={}", snapshot.favicon.as_deref().unwrap_or("-")),
        format!("location={}", snapshot.location),
        format!("history={}", snapshot.history_len),
    ];
    if let Some(frame) = &snapshot.frame {
        lines.push(format!(
            "frame={} fullscreen={}",
            frame.src, snapshot.frame_fullscreen
        ));
    }
    for (index, popup) in snapshot.popups.iter().enumerate() {
        lines.push(format!(
            "popup[{index}] frame={} closed={}",
            popup.frame_src.as_deref().unwrap_or("-"),
            popup.closed
        ));
    }
    for tab in &snapshot.tabs {
        lines.push(format!("tab={tab}"));
    }
    for alert in &snapshot.alerts {
        lines.push(format!("alert={alert}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use calc_study_domain::EntryId;

    use super::*;

    #[test]
    fn empty_result_renders_empty_state_message() {
        assert_eq!(
            present_search_view(&SearchView::NoMatches),
            vec!["No resources available".to_string()]
        );
        assert_eq!(
            present_search_view(&SearchView::NotLoaded),
            vec!["catalog not loaded".to_string()]
        );
    }

    #[test]
    fn active_preset_is_marked() {
        let row = present_preset_row(&PresetKey::Classroom.preset(), PresetKey::Classroom);
        assert!(row.starts_with("* classroom"));
        let row = present_preset_row(&PresetKey::Canvas.preset(), PresetKey::Classroom);
        assert!(row.starts_with("  canvas"));
    }

    #[test]
    fn viewer_line_mentions_fullscreen() {
        let mut state = ViewerState::default();
        assert_eq!(present_viewer(&state), "viewer closed");
        state.select(CatalogEntry {
            id: EntryId::new(1),
            title: "Chess".to_string(),
            description: String::new(),
            thumbnail: String::new(),
            url: "https://content.example/chess/".to_string(),
        });
        state.toggle_fullscreen();
        assert_eq!(
            present_viewer(&state),
            "viewing Chess (https://content.example/chess/) [fullscreen]"
        );
    }
}
