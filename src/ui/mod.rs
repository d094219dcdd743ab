pub mod widget;

pub use widget::MapWidget;

use crate::core::state::ViewerState;

pub trait UiMapExt {
    fn road_map(&mut self, widget: &mut MapWidget, state: &mut ViewerState) -> egui::Response;
}

impl UiMapExt for egui::Ui {
    fn road_map(&mut self, widget: &mut MapWidget, state: &mut ViewerState) -> egui::Response {
        widget.show(self, state)
    }
}
