use super::*;

/// Selection palette across the top plus the info overlay for the current
/// selection. A click sets the focus synchronously; the camera picks it up
/// on the next follow step.
pub fn update_ui(mut contexts: EguiContexts, mut followed: ResMut<Followed>) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    egui::Window::new("Bodies")
        .anchor(egui::Align2::CENTER_TOP, [0.0, 8.0])
        .title_bar(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for focus in Focus::ALL {
                    if ui.button(focus.label()).clicked() {
                        followed.0 = focus;
                    }
                }
            });
        });

    let focus = followed.0;
    if let Some(blurb) = focus.blurb() {
        egui::Window::new(focus.label())
            .anchor(egui::Align2::LEFT_BOTTOM, [12.0, -12.0])
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(blurb);
            });
    }
}
