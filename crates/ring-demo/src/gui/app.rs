use crate::config::WindowOptions;
use crate::gui::theme::ThemeColors;
use gtk::prelude::*;
use gtk4 as gtk;
use progress_ring::{Outcome, ProgressConfig, ProgressWidget, Size, view};
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub struct AppModel {
    pub widget: Rc<RefCell<ProgressWidget>>,
    pub drawing_area: gtk::DrawingArea,
    tick: Rc<RefCell<Option<gtk::TickCallbackId>>>,
}

#[derive(Debug)]
pub enum AppMsg {
    Play(Outcome),
    Resize(i32, i32),
    Quit,
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (ProgressConfig, WindowOptions);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Progress Ring"),
            set_default_size: (window_options.width, window_options.height),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,
                set_margin_all: 12,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,

                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::Resize(width, height));
                    }
                },

                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 12,
                    set_halign: gtk::Align::Center,

                    gtk::Button {
                        set_label: "Success",
                        connect_clicked => AppMsg::Play(Outcome::Success),
                    },

                    gtk::Button {
                        set_label: "Failure",
                        connect_clicked => AppMsg::Play(Outcome::Failure),
                    },
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, window_options) = init;

        let widget = Rc::new(RefCell::new(ProgressWidget::new(config)));

        let model = AppModel {
            widget: widget.clone(),
            drawing_area: gtk::DrawingArea::default(),
            tick: Rc::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let widget_draw = widget.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let widget = widget_draw.borrow();
                // nothing to draw until the first resize lands
                let Some(scene) = widget.scene() else {
                    return;
                };
                let theme = ThemeColors::from_context(&drawing_area.style_context());
                let palette = widget.config().palette(theme.palette());
                if let Err(e) = view::draw(cr, &scene, &palette) {
                    log::error!("Drawing error: {}", e);
                }
            });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Play(outcome) => {
                self.widget.borrow_mut().play(outcome);
                self.drawing_area.queue_draw();
                self.ensure_ticking();
            }
            AppMsg::Resize(width, height) => {
                if self.widget.borrow_mut().resize(Size::new(width, height)) {
                    self.drawing_area.queue_draw();
                }
                // a play requested before the first size starts here
                self.ensure_ticking();
            }
            AppMsg::Quit => relm4::main_application().quit(),
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        if let Some(tick) = self.tick.borrow_mut().take() {
            tick.remove();
        }
        self.widget.borrow_mut().release();
        log::debug!("Progress ring released");
    }
}

impl AppModel {
    fn ensure_ticking(&self) {
        if self.tick.borrow().is_some() || !self.widget.borrow().is_animating() {
            return;
        }
        let id = start_ticking(&self.drawing_area, self.widget.clone(), self.tick.clone());
        *self.tick.borrow_mut() = Some(id);
    }
}

fn start_ticking(
    drawing_area: &gtk::DrawingArea,
    widget: Rc<RefCell<ProgressWidget>>,
    slot: Rc<RefCell<Option<gtk::TickCallbackId>>>,
) -> gtk::TickCallbackId {
    let clock_delta = RefCell::new(FrameDelta::default());
    drawing_area.add_tick_callback(move |drawing_area, clock| {
        let dt = clock_delta.borrow_mut().next(clock.frame_time());
        let (redraw, flow) = step(&mut widget.borrow_mut(), dt);
        if redraw {
            drawing_area.queue_draw();
        }
        if flow == glib::ControlFlow::Break {
            log::debug!("Animation idle, stopping frame clock");
            slot.borrow_mut().take();
        }
        flow
    })
}

#[derive(Debug, Default)]
struct FrameDelta {
    last: Option<i64>,
}

impl FrameDelta {
    // frame times are in microseconds; the first frame has no delta
    fn next(&mut self, now: i64) -> Duration {
        self.last
            .replace(now)
            .map(|prev| Duration::from_micros(now.saturating_sub(prev).max(0) as u64))
            .unwrap_or_default()
    }
}

fn step(widget: &mut ProgressWidget, dt: Duration) -> (bool, glib::ControlFlow) {
    let redraw = widget.advance(dt);
    let flow = if widget.is_animating() {
        glib::ControlFlow::Continue
    } else {
        glib::ControlFlow::Break
    };
    (redraw, flow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_widget() -> ProgressWidget {
        let mut widget = ProgressWidget::new(ProgressConfig {
            animation_duration: Duration::from_millis(100),
            ..Default::default()
        });
        widget.resize(Size::new(300, 300));
        widget.play(Outcome::Success);
        widget
    }

    #[test]
    fn test_frame_clock_stops_once_animation_settles() {
        let mut widget = playing_widget();
        let frame = Duration::from_millis(16);

        let mut frames = 0;
        loop {
            let (redraw, flow) = step(&mut widget, frame);
            frames += 1;
            assert!(redraw);
            if flow == glib::ControlFlow::Break {
                break;
            }
            assert!(frames < 100, "frame clock never stopped");
        }

        assert!(!widget.is_animating());
        assert_eq!(step(&mut widget, frame), (false, glib::ControlFlow::Break));
    }

    #[test]
    fn test_idle_widget_does_not_keep_clock_running() {
        let mut widget = ProgressWidget::new(ProgressConfig::default());
        widget.resize(Size::new(300, 300));
        assert_eq!(
            step(&mut widget, Duration::from_millis(16)),
            (false, glib::ControlFlow::Break)
        );
    }

    #[test]
    fn test_frame_delta_starts_at_zero() {
        let mut delta = FrameDelta::default();
        assert_eq!(delta.next(1_000_000), Duration::ZERO);
        assert_eq!(delta.next(1_016_000), Duration::from_millis(16));
        assert_eq!(delta.next(1_010_000), Duration::ZERO);
    }
}
