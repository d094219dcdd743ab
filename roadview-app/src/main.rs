use std::time::Duration;

use crossbeam_channel::Receiver;
use roadview::{
    ui::UiMapExt, MapWidget, RoadLoader, RoadSegment, ViewerConfig, ViewerState,
};

/// Start/finish viewer with Overpass road overlays
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ViewerConfig::paris();
    let (tx, rx) = crossbeam_channel::bounded(1);
    let loader = RoadLoader::overpass(config.roads.clone());
    let loading = loader
        .spawn_startup_load(&tokio::runtime::Handle::current(), tx)
        .is_some();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("roadview"),
        ..Default::default()
    };

    eframe::run_native(
        "roadview-app",
        options,
        Box::new(move |_cc| Box::new(RoadviewApp::new(config, rx, loading))),
    )?;

    Ok(())
}

struct RoadviewApp {
    state: ViewerState,
    widget: MapWidget,
    roads_rx: Receiver<Vec<RoadSegment>>,
    loading: bool,
}

impl RoadviewApp {
    fn new(config: ViewerConfig, roads_rx: Receiver<Vec<RoadSegment>>, loading: bool) -> Self {
        Self {
            state: ViewerState::from_config(&config),
            widget: MapWidget::new(&config),
            roads_rx,
            loading,
        }
    }

    fn poll_roads(&mut self, ctx: &egui::Context) {
        if let Ok(segments) = self.roads_rx.try_recv() {
            log::info!("received {} roads for the overlay", segments.len());
            self.state.set_roads(segments);
            self.loading = false;
        }
        if self.loading {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

impl eframe::App for RoadviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_roads(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let start = self.state.markers().start().position();
                let finish = self.state.markers().finish().position();
                ui.label(format!("Start: {:.4}, {:.4}", start.lat, start.lng));
                ui.separator();
                ui.label(format!("Finish: {:.4}, {:.4}", finish.lat, finish.lng));
                ui.separator();
                if self.loading {
                    ui.spinner();
                    ui.label("Loading roads...");
                } else {
                    ui.label(format!("Roads: {}", self.state.roads().len()));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let viewport = self.widget.viewport();
                    ui.label(format!(
                        "Center: {:.4}, {:.4} | Zoom: {:.2}",
                        viewport.center.lat, viewport.center.lng, viewport.zoom
                    ));
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                ui.road_map(&mut self.widget, &mut self.state);
            });
    }
}
