//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → stdout
//! ```

use crate::app::AppState;
use crate::store::IdGenerator;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI for a `rows` x `cols` pane to stdout.
pub fn render<G: IdGenerator>(state: &AppState<G>, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.entry_bar {
        Some(entry) => components::render_entry_mode(vm, entry, theme, cols, rows),
        None => components::render_normal_mode(vm, theme, cols, rows),
    }
}
