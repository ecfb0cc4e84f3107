#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Legend, Line, Plot, PlotPoints};
use image::GenericImageView;
use std::{env, fs, path::Path};
use water_hammer_estimator::{
    chart::{ChartData, ChartHandle, ChartRenderer, ChartSlot},
    config, conversion,
    form::FormInput,
    i18n::{self, keys},
    logging,
    quantity::QuantityKind,
    water_hammer::{self, transient::TIME_STEP_S, InputField, Simulation},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang = String::from("auto");
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = val.to_string();
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = args[i + 1].clone();
            i += 1;
        }
        i += 1;
    }

    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        eprintln!("Config error: {e}");
        config::Config::default()
    });
    logging::init(&app_cfg.log_level);
    let lang = i18n::resolve_language(&cli_lang, Some(app_cfg.language.as_str()));
    tracing::info!(language = %lang, "starting GUI");

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Water Hammer Estimator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font setup: {e}");
            }
            Box::new(GuiApp::new(app_cfg, &lang))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, name.to_string());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(name.to_string());
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 시스템 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래 폰트 2) OS 별 시스템 한글 폰트. 모두 없으면 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![
        "assets/fonts/malgun.ttf".to_string(),
        "assets/fonts/NanumGothic.ttf".to_string(),
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf".to_string(),
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".to_string(),
        "/System/Library/Fonts/AppleSDGothicNeo.ttc".to_string(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc"] {
            candidates.push(fonts.join(cand).display().to_string());
        }
    }
    for cand in candidates {
        let p = Path::new(&cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font ({cand}): {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; Hangul labels may not render.".into())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

/// egui_plot 으로 그리는 차트의 핸들. 데이터와 좌표를 보관한다.
struct PlotHandle {
    plot_id: u64,
    data: ChartData,
    points: Vec<[f64; 2]>,
}

impl ChartHandle for PlotHandle {
    fn dispose(self) {
        tracing::debug!(plot_id = self.plot_id, points = self.points.len(), "plot disposed");
    }
}

#[derive(Default)]
struct PlotRenderer {
    next_id: u64,
}

impl ChartRenderer for PlotRenderer {
    type Handle = PlotHandle;

    fn render(&mut self, data: &ChartData) -> PlotHandle {
        self.next_id += 1;
        PlotHandle {
            plot_id: self.next_id,
            data: data.clone(),
            points: data.points(TIME_STEP_S),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Simulate,
    Converter,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    tab: Tab,
    show_formula_modal: bool,
    show_settings_modal: bool,
    settings_status: Option<String>,
    lang_input: String,
    // 수격 계산
    form: FormInput,
    simulation: Option<Simulation>,
    error: Option<String>,
    renderer: PlotRenderer,
    chart: ChartSlot<PlotHandle>,
    // 단위 변환
    conv_kind: QuantityKind,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, lang: &str) -> Self {
        let tr = i18n::Translator::new_with_pack(lang, config.language_pack_dir.as_deref());
        let form = FormInput::from_inputs(&config.defaults);
        let codes = QuantityKind::Length.unit_codes();
        Self {
            lang_input: config.language.clone(),
            config,
            tr,
            tab: Tab::Simulate,
            show_formula_modal: false,
            show_settings_modal: false,
            settings_status: None,
            form,
            simulation: None,
            error: None,
            renderer: PlotRenderer::default(),
            chart: ChartSlot::new(),
            conv_kind: QuantityKind::Length,
            conv_value: 1.0,
            conv_from: codes[2].to_string(),
            conv_to: codes[0].to_string(),
            conv_result: None,
        }
    }

    /// 폼 제출: 검증 → 계산 → 이전 차트 폐기 후 새 차트.
    /// 잘못된 입력이면 차트를 남기지 않는다.
    fn submit(&mut self) {
        match self
            .form
            .parse()
            .and_then(|inputs| water_hammer::simulate(&inputs))
        {
            Ok(sim) => {
                let data = ChartData::from_series(&sim.series);
                self.chart.show(&mut self.renderer, &data);
                self.simulation = Some(sim);
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "rejected form input");
                self.chart.clear();
                self.simulation = None;
                self.error = Some(self.tr.describe_error(&err));
            }
        }
    }

    fn reset_form(&mut self) {
        self.form = FormInput::from_inputs(&self.config.defaults);
        self.error = None;
    }

    fn apply_language(&mut self, code: &str) {
        self.config.language = code.to_string();
        let lang = i18n::resolve_language("auto", Some(code));
        self.tr = i18n::Translator::new_with_pack(&lang, self.config.language_pack_dir.as_deref());
        tracing::info!(language = %lang, "language changed");
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_INPUTS_HEADING));
        ui.add_space(6.0);
        let mut submit = false;
        egui::Grid::new("hammer_inputs")
            .num_columns(3)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                for field in InputField::ALL {
                    label_with_tip(ui, &self.tr.field_label(field), field.form_name());
                    let resp = ui.add(
                        egui::TextEdit::singleline(self.form.field_mut(field)).desired_width(90.0),
                    );
                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                    ui.label(field.unit_label());
                    ui.end_row();
                }
            });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(self.tr.t(keys::GUI_BUTTON_SIMULATE)).clicked() {
                submit = true;
            }
            if ui.button(self.tr.t(keys::GUI_BUTTON_RESET)).clicked() {
                self.reset_form();
            }
        });
        if submit {
            self.submit();
        }
        if let Some(err) = &self.error {
            ui.add_space(6.0);
            ui.colored_label(egui::Color32::LIGHT_RED, err.as_str());
        }
        if let Some(sim) = &self.simulation {
            ui.separator();
            self.ui_derived(ui, sim);
        }
    }

    fn ui_derived(&self, ui: &mut egui::Ui, sim: &Simulation) {
        let d = &sim.derived;
        ui.heading(self.tr.t(keys::GUI_DERIVED_HEADING));
        let v = |key: &str, value: String| self.tr.tf(key, &[("value", value)]);
        let mut lines = vec![
            v(keys::RESULT_AREA, format!("{:.6}", d.area_m2)),
            v(keys::RESULT_VELOCITY, format!("{:.4}", d.velocity_m_s)),
            v(keys::RESULT_WAVE_SPEED, format!("{:.2}", d.speed_of_sound_m_s)),
            v(keys::RESULT_EFFECTIVE_FACTOR, format!("{:.4}", d.effective_factor)),
            v(keys::RESULT_EFFECTIVE_VELOCITY, format!("{:.4}", d.effective_velocity_m_s)),
            self.tr.tf(
                keys::RESULT_DELTA_P,
                &[
                    ("pa", format!("{:.0}", d.delta_p_pa)),
                    ("psi", format!("{:.2}", d.delta_p_psi)),
                ],
            ),
            v(keys::RESULT_FREQUENCY, format!("{:.3}", d.frequency_hz)),
            v(keys::RESULT_DAMPING, format!("{}", d.damping_per_s)),
        ];
        if let Some(tc) = d.critical_time_s {
            lines.push(v(keys::RESULT_CRITICAL_TIME, format!("{tc:.4}")));
        }
        for line in lines {
            ui.label(line);
        }
        if !sim.advisories.is_empty() {
            ui.add_space(6.0);
            ui.strong(self.tr.t(keys::GUI_ADVISORIES_HEADING));
            for advisory in &sim.advisories {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(self.tr.describe_advisory(advisory)).small(),
                    )
                    .wrap(true),
                );
            }
        }
    }

    fn ui_chart(&self, ui: &mut egui::Ui) {
        let Some(handle) = self.chart.current() else {
            ui.centered_and_justified(|ui| {
                ui.label(self.tr.t(keys::GUI_CHART_EMPTY));
            });
            return;
        };
        ui.heading(handle.data.title);
        let points: PlotPoints = handle.points.clone().into();
        Plot::new(("pressure_plot", handle.plot_id))
            .legend(Legend::default())
            .x_axis_label(handle.data.x_axis_title)
            .y_axis_label(handle.data.y_axis_title)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(points).name(handle.data.series_label));
            });
    }

    fn ui_converter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::GUI_TAB_CONVERTER));
        egui::Grid::new("unit_converter")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::GUI_CONVERTER_QUANTITY));
                let before = self.conv_kind;
                egui::ComboBox::from_id_source("conv_kind")
                    .selected_text(quantity_label(&tr, self.conv_kind))
                    .show_ui(ui, |ui| {
                        for kind in QuantityKind::ALL {
                            ui.selectable_value(&mut self.conv_kind, kind, quantity_label(&tr, kind));
                        }
                    });
                if before != self.conv_kind {
                    let codes = self.conv_kind.unit_codes();
                    self.conv_from = codes[0].to_string();
                    self.conv_to = codes[codes.len() - 1].to_string();
                    self.conv_result = None;
                }
                ui.end_row();

                ui.label(tr.t(keys::GUI_CONVERTER_VALUE));
                ui.horizontal(|ui| {
                    ui.add(egui::DragValue::new(&mut self.conv_value).speed(0.1));
                    unit_combo(ui, "conv_from", &mut self.conv_from, self.conv_kind.unit_codes());
                    ui.label("→");
                    unit_combo(ui, "conv_to", &mut self.conv_to, self.conv_kind.unit_codes());
                });
                ui.end_row();
            });
        if ui.button(tr.t(keys::GUI_CONVERTER_CONVERT)).clicked() {
            self.conv_result = Some(
                match conversion::convert(self.conv_kind, self.conv_value, &self.conv_from, &self.conv_to) {
                    Ok(v) => format!("{v:.6} {}", self.conv_to),
                    Err(e) => format!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
                },
            );
        }
        if let Some(result) = &self.conv_result {
            ui.label(result.as_str());
        }
    }

    fn ui_settings_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        let tr = self.tr.clone();
        let mut new_lang: Option<String> = None;
        let mut save = false;
        egui::Window::new(tr.t(keys::GUI_BUTTON_SETTINGS))
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(tr.t(keys::GUI_SETTINGS_LANGUAGE));
                    let before = self.lang_input.clone();
                    egui::ComboBox::from_id_source("lang_combo")
                        .selected_text(self.lang_input.clone())
                        .show_ui(ui, |ui| {
                            for code in ["auto", "ko", "en"] {
                                ui.selectable_value(&mut self.lang_input, code.to_string(), code);
                            }
                        });
                    if before != self.lang_input {
                        new_lang = Some(self.lang_input.clone());
                    }
                });
                ui.horizontal(|ui| {
                    ui.label(tr.t(keys::GUI_SETTINGS_ALPHA));
                    ui.add(egui::Slider::new(&mut self.config.window_alpha, 0.3..=1.0));
                });
                if ui.button(tr.t(keys::GUI_SETTINGS_SAVE)).clicked() {
                    save = true;
                }
                if let Some(status) = &self.settings_status {
                    ui.small(status.as_str());
                }
            });
        self.show_settings_modal = open;
        if let Some(code) = new_lang {
            self.apply_language(&code);
        }
        if save {
            self.settings_status = Some(match self.config.save() {
                Ok(()) => self.tr.t(keys::GUI_SETTINGS_SAVED),
                Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
            });
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용
        let alpha = self.config.window_alpha.clamp(0.3, 1.0);
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = egui::Visuals::default().window_fill.linear_multiply(alpha);
        style.visuals.panel_fill = egui::Visuals::default().panel_fill.linear_multiply(alpha);
        ctx.set_style(style);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::GUI_APP_TITLE));
                ui.separator();
                ui.selectable_value(&mut self.tab, Tab::Simulate, self.tr.t(keys::GUI_TAB_SIMULATE));
                ui.selectable_value(&mut self.tab, Tab::Converter, self.tr.t(keys::GUI_TAB_CONVERTER));
                ui.separator();
                if ui.button(self.tr.t(keys::GUI_BUTTON_FORMULA)).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(self.tr.t(keys::GUI_BUTTON_SETTINGS)).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        if self.show_formula_modal {
            egui::Window::new(self.tr.t(keys::GUI_FORMULA_TITLE))
                .collapsible(false)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.monospace(self.tr.t(keys::GUI_FORMULA_BODY));
                });
        }
        if self.show_settings_modal {
            self.ui_settings_window(ctx);
        }

        match self.tab {
            Tab::Simulate => {
                egui::SidePanel::left("inputs_panel")
                    .resizable(true)
                    .default_width(360.0)
                    .show(ctx, |ui| {
                        egui::ScrollArea::vertical().show(ui, |ui| self.ui_inputs(ui));
                    });
                egui::CentralPanel::default().show(ctx, |ui| self.ui_chart(ui));
            }
            Tab::Converter => {
                egui::CentralPanel::default().show(ctx, |ui| self.ui_converter(ui));
            }
        }
    }
}

fn quantity_label(tr: &i18n::Translator, kind: QuantityKind) -> String {
    tr.t(match kind {
        QuantityKind::Length => keys::QUANTITY_LENGTH,
        QuantityKind::VolumeFlow => keys::QUANTITY_FLOW,
        QuantityKind::Pressure => keys::QUANTITY_PRESSURE,
        QuantityKind::Time => keys::QUANTITY_TIME,
    })
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String, options: &[&str]) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.clone())
        .show_ui(ui, |ui| {
            for opt in options {
                ui.selectable_value(value, opt.to_string(), *opt);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GuiApp {
        GuiApp::new(config::Config::default(), "en")
    }

    #[test]
    fn submit_replaces_previous_plot() {
        let mut app = app();
        app.submit();
        assert_eq!(app.chart.current().map(|h| h.plot_id), Some(1));
        app.form.closure_time = "800".into();
        app.submit();
        let handle = app.chart.current().unwrap();
        assert_eq!(handle.plot_id, 2);
        assert_eq!(handle.points.len(), 1001);
        assert_eq!(handle.data.labels[1000], "2.000");
    }

    #[test]
    fn invalid_submit_clears_chart() {
        let mut app = app();
        app.submit();
        assert!(app.chart.is_live());
        app.form.wall_thickness = "0".into();
        app.submit();
        assert!(!app.chart.is_live());
        assert!(app.simulation.is_none());
        assert_eq!(
            app.error.as_deref(),
            Some("Invalid input - Wall thickness [in]: must be greater than 0.")
        );
    }
}
