use eframe::egui;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};
use tracing::{info, warn};

use launch_intel::analysis::{self, MissionFilter, CORRELATION_FIELDS};
use launch_intel::dataset::{
    MissionCatalog, MissionRecord, MissionType, Vehicle, DEFAULT_SEED, SCHEMA,
};
use launch_intel::shell::{Focus, Page, Role, Screen, Shell};
use launch_intel::sim::{slider_defaults, Advisory, LaunchParams, SLIDERS};

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    // Computed once, shared by reference for the lifetime of the window.
    let catalog = MissionCatalog::new(DEFAULT_SEED);
    info!(records = catalog.len(), "dataset generated");

    let app = Dashboard::new(catalog);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 820.0]),
        ..Default::default()
    };
    eframe::run_native("Rocket Launch Intelligence", options, Box::new(|_| Ok(Box::new(app))))
}

struct Dashboard {
    catalog: MissionCatalog,
    shell: Shell,
    // login form
    name: String,
    role: Option<Role>,
    focus: Focus,
    // page state
    filter: MissionFilter,
    sliders: [f64; 6],
    message: Option<String>,
}

impl Dashboard {
    fn new(catalog: MissionCatalog) -> Self {
        Self {
            catalog,
            shell: Shell::new(),
            name: String::new(),
            role: None,
            focus: Focus::default(),
            filter: MissionFilter::default(),
            sliders: slider_defaults(),
            message: None,
        }
    }
}

impl eframe::App for Dashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.shell.screen() {
            Screen::Welcome => self.welcome(ctx),
            Screen::Login => self.login(ctx),
            Screen::Dashboard(page) => {
                self.nav(ctx, page);
                egui::CentralPanel::default().show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| match page {
                        Page::Home => self.home(ui),
                        Page::MissionData => self.mission_data(ui),
                        Page::PhysicsSim => self.physics_sim(ui),
                        Page::Insights => self.insights(ui),
                        Page::About => about(ui),
                    });
                });
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Welcome / login
// ---------------------------------------------------------------------------

impl Dashboard {
    fn welcome(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.heading("Rocket Launch Intelligence");
                ui.label(
                    "Explore mission data, simulate ascent trajectories, and compare the two.",
                );
                ui.add_space(20.0);
                if ui.button("Get Started").clicked() {
                    self.shell.begin();
                }
            });
        });
    }

    fn login(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Mission Control Login");
            ui.add_space(8.0);
            ui.label("Name");
            ui.text_edit_singleline(&mut self.name);

            let selected = self.role.map_or("Select a role", Role::label);
            egui::ComboBox::from_label("Role").selected_text(selected).show_ui(ui, |ui| {
                for r in Role::ALL {
                    ui.selectable_value(&mut self.role, Some(r), r.label());
                }
            });

            ui.label("Focus");
            for f in Focus::ALL {
                ui.radio_value(&mut self.focus, f, f.label());
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Enter Dashboard").clicked() {
                    match self.shell.login(&self.name, self.role, self.focus) {
                        Ok(_) => self.message = None,
                        Err(e) => self.message = Some(e.to_string()),
                    }
                }
                if ui.button("Back").clicked() {
                    self.shell.back();
                    self.message = None;
                }
            });
            if let Some(msg) = &self.message {
                ui.colored_label(egui::Color32::LIGHT_RED, msg);
            }
        });
    }

    fn nav(&mut self, ctx: &egui::Context, current: Page) {
        egui::SidePanel::left("nav").show(ctx, |ui| {
            if let Some(user) = self.shell.user() {
                ui.heading(&user.name);
                ui.label(user.role.label());
                ui.label(format!("Focus: {}", user.focus));
            }
            ui.separator();
            let mut target = current;
            for p in Page::ALL {
                ui.radio_value(&mut target, p, p.label());
            }
            if target != current {
                self.shell.navigate(target);
            }
            ui.separator();
            if ui.button("Logout").clicked() {
                self.shell.logout();
                self.name.clear();
                self.role = None;
                self.message = None;
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

impl Dashboard {
    fn home(&self, ui: &mut egui::Ui) {
        ui.heading("Dashboard");
        let records = self.catalog.records();
        let all: Vec<&MissionRecord> = records.iter().collect();
        let s = analysis::FilterSummary::from_selection(&all);
        ui.label(format!(
            "Total missions: {}   Success rate: {}%   Avg payload: {} kg",
            s.count, s.success_rate_pct, s.avg_payload_kg
        ));
        ui.separator();
        ui.label(
            "Newton's second law governs the ascent: thrust pushes up, gravity and drag pull \
             back, and burning propellant lightens the vehicle.",
        );
        if let Some(user) = self.shell.user() {
            ui.separator();
            ui.strong(user.focus.label());
            ui.label(user.focus.description());
            for p in user.focus.recommended_pages() {
                ui.label(format!("• {}", p.label()));
            }
        }
    }

    fn mission_data(&mut self, ui: &mut egui::Ui) {
        ui.heading("Mission Data");
        ui.horizontal(|ui| {
            let type_text = self.filter.mission_type.map_or("All", MissionType::name);
            egui::ComboBox::from_label("Mission Type").selected_text(type_text).show_ui(ui, |ui| {
                ui.selectable_value(&mut self.filter.mission_type, None, "All");
                for t in MissionType::ALL {
                    ui.selectable_value(&mut self.filter.mission_type, Some(t), t.name());
                }
            });
            let vehicle_text = self.filter.vehicle.map_or("All", Vehicle::name);
            egui::ComboBox::from_label("Vehicle").selected_text(vehicle_text).show_ui(ui, |ui| {
                ui.selectable_value(&mut self.filter.vehicle, None, "All");
                for v in Vehicle::ALL {
                    ui.selectable_value(&mut self.filter.vehicle, Some(v), v.name());
                }
            });
        });
        ui.add(
            egui::Slider::new(&mut self.filter.max_cost_million, 10.0..=500.0)
                .step_by(10.0)
                .text("Max Cost ($M)"),
        );
        ui.add(
            egui::Slider::new(&mut self.filter.max_distance_km, 100.0..=500_000.0)
                .step_by(1_000.0)
                .text("Max Distance (km)"),
        );

        let selection = self.filter.apply(self.catalog.records());
        let s = analysis::FilterSummary::from_selection(&selection);
        ui.label(format!(
            "Filtered: {}   Avg payload: {} kg   Success: {}%   Avg fuel: {:.1} t",
            s.count, s.avg_payload_kg, s.success_rate_pct, s.avg_fuel_tons
        ));
        if selection.is_empty() {
            ui.colored_label(egui::Color32::YELLOW, "No missions match the current filters.");
            return;
        }

        let ok: PlotPoints = selection
            .iter()
            .filter(|r| r.success)
            .map(|r| [r.payload_kg, r.fuel_tons])
            .collect();
        let fail: PlotPoints = selection
            .iter()
            .filter(|r| !r.success)
            .map(|r| [r.payload_kg, r.fuel_tons])
            .collect();
        Plot::new("payload_fuel").height(240.0).x_axis_label("Payload (kg)").show(ui, |plot_ui| {
            plot_ui.points(Points::new("Success", ok).radius(4.0));
            plot_ui.points(Points::new("Failure", fail).radius(4.0));
        });

        let line: PlotPoints = analysis::duration_vs_distance(&selection)
            .into_iter()
            .map(|(d, t)| [d, t])
            .collect();
        Plot::new("duration_distance").height(200.0).x_axis_label("Distance (km)").show(
            ui,
            |plot_ui| {
                plot_ui.line(Line::new("Duration (days)", line));
            },
        );

        let yields = analysis::yield_vs_cost(&selection);
        Plot::new("yield_cost").height(220.0).x_axis_label("Cost ($M)").show(ui, |plot_ui| {
            for t in MissionType::ALL {
                let pts: PlotPoints = yields
                    .iter()
                    .filter(|(_, _, ty)| *ty == t)
                    .map(|&(cost, y, _)| [cost, y])
                    .collect();
                plot_ui.points(Points::new(t.name(), pts).radius(4.0));
            }
        });

        let crew = analysis::crew_by_type_and_outcome(&selection);
        let ok_bars: Vec<Bar> = crew
            .iter()
            .enumerate()
            .map(|(i, c)| Bar::new(i as f64 - 0.2, c.success_avg).width(0.35))
            .collect();
        let fail_bars: Vec<Bar> = crew
            .iter()
            .enumerate()
            .map(|(i, c)| Bar::new(i as f64 + 0.2, c.failure_avg).width(0.35))
            .collect();
        Plot::new("crew")
            .height(200.0)
            .x_axis_label("Orbital · Lunar · Mars · Deep Space · ISS")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("Success (avg crew)", ok_bars));
                plot_ui.bar_chart(BarChart::new("Failure (avg crew)", fail_bars));
            });
    }

    fn physics_sim(&mut self, ui: &mut egui::Ui) {
        ui.heading("Rocket Physics Simulation");
        for (value, r) in self.sliders.iter_mut().zip(SLIDERS) {
            ui.add(egui::Slider::new(value, r.min..=r.max).step_by(r.step).text(r.label));
        }

        if ui.button("Launch Simulation").clicked() {
            let params = LaunchParams::from_slider_values(self.sliders);
            match self.shell.run_simulation(&params) {
                Ok(r) => {
                    if r.advisory == Some(Advisory::NoPropellant) {
                        warn!("simulation ran without propellant");
                    }
                    self.message = Some(format!(
                        "Simulation complete! Max altitude: {:.1} km",
                        r.max_altitude_km()
                    ));
                }
                Err(e) => self.message = Some(e.to_string()),
            }
        }
        if let Some(msg) = &self.message {
            ui.label(msg);
        }

        let Some(res) = self.shell.last_result() else {
            ui.label("Configure parameters and launch to see altitude and velocity charts.");
            return;
        };
        ui.label(format!(
            "Max altitude: {:.1} km   Max velocity: {:.0} m/s   Fuel burnout: {} s   TWR: {}",
            res.max_altitude_km(),
            res.max_velocity,
            res.burnout_time_step(),
            res.twr
        ));
        let alt: PlotPoints =
            res.times().zip(res.altitudes()).map(|(t, a)| [f64::from(t), a]).collect();
        let vel: PlotPoints =
            res.times().zip(res.velocities()).map(|(t, v)| [f64::from(t), v]).collect();
        Plot::new("altitude").height(240.0).x_axis_label("Time (s)").show(ui, |plot_ui| {
            plot_ui.line(Line::new("Altitude (m)", alt));
        });
        Plot::new("velocity").height(240.0).x_axis_label("Time (s)").show(ui, |plot_ui| {
            plot_ui.line(Line::new("Velocity (m/s)", vel));
        });
    }

    fn insights(&self, ui: &mut egui::Ui) {
        ui.heading("Comparative Insights");
        let corr = analysis::correlation_matrix(self.catalog.records());
        egui::Grid::new("corr").striped(true).show(ui, |ui| {
            ui.label("");
            for f in CORRELATION_FIELDS {
                ui.strong(f);
            }
            ui.end_row();
            for (i, row) in CORRELATION_FIELDS.iter().enumerate() {
                ui.strong(*row);
                for j in 0..CORRELATION_FIELDS.len() {
                    let v = corr[(i, j)];
                    let color = if v >= 0.0 {
                        egui::Color32::LIGHT_BLUE
                    } else {
                        egui::Color32::LIGHT_RED
                    };
                    ui.colored_label(color, format!("{v:.2}"));
                }
                ui.end_row();
            }
        });
        ui.separator();
        egui::Grid::new("by_type").striped(true).show(ui, |ui| {
            for h in ["Type", "Avg payload (kg)", "Avg fuel (t)"] {
                ui.strong(h);
            }
            ui.end_row();
            for a in analysis::averages_by_type(self.catalog.records()) {
                ui.label(a.mission_type.name());
                ui.label(a.avg_payload_kg.to_string());
                ui.label(format!("{:.1}", a.avg_fuel_tons));
                ui.end_row();
            }
        });
    }
}

fn about(ui: &mut egui::Ui) {
    ui.heading("About");
    ui.label(
        "Mission records are synthetic: 48 launches sampled from five mission-type profiles \
         with a fixed seed.",
    );
    ui.label(
        "The ascent model is one-dimensional: constant thrust until the tank is dry, gravity \
         on the current mass, and quadratic drag in an exponential atmosphere (scale height \
         8.5 km), integrated with explicit Euler at 1 s steps.",
    );
    ui.label(
        "Drag is computed from v² and always subtracted from the upward force, so it also \
         slows a falling vehicle's descent the wrong way. This is a known simplification of \
         the model.",
    );

    ui.separator();
    ui.strong("Data Schema");
    egui::Grid::new("schema").striped(true).show(ui, |ui| {
        for h in ["Field", "Type", "Description"] {
            ui.strong(h);
        }
        ui.end_row();
        for f in SCHEMA {
            ui.monospace(f.name);
            ui.label(f.kind);
            ui.label(f.description);
            ui.end_row();
        }
    });
}
