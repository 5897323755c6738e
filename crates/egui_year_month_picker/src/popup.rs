use egui::{Area, Context, Frame, Id, InnerResponse, Order, Pos2, Ui, UiKind};

/// Show `add_contents` floating above everything else, with its top-left corner at `pos`.
///
/// Only call this while the popup is open: a popup that is not shown has no layout,
/// no interaction and nothing to clean up.
pub fn show_popup<R>(
    ctx: &Context,
    id: Id,
    pos: Pos2,
    frame: Option<Frame>,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    Area::new(id)
        .kind(UiKind::Picker)
        .order(Order::Foreground)
        .fixed_pos(pos)
        .constrain(false)
        .show(ctx, |ui| {
            let frame = frame.unwrap_or_else(|| Frame::popup(ui.style()));
            frame.show(ui, add_contents).inner
        })
}
