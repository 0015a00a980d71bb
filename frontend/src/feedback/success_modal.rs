use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::content::icons::{Icon, IconId};
use crate::feedback::celebration::{Burst, Celebration, Tick, TICK_MS};
use crate::i18n::use_translator;

const COLORS: [&str; 5] = ["#d4af37", "#f5e6c4", "#1e293b", "#f8fafc", "#b8860b"];

#[derive(Clone, Debug, PartialEq)]
struct Particle {
    id: u32,
    left: f64,
    top: f64,
    drift: f64,
    color: &'static str,
}

#[derive(Default, PartialEq)]
struct Confetti {
    particles: Vec<Particle>,
    next_id: u32,
}

impl Reducible for Confetti {
    type Action = [Burst; 2];

    fn reduce(self: Rc<Self>, bursts: Self::Action) -> Rc<Self> {
        let mut particles = self.particles.clone();
        let mut next_id = self.next_id;
        for burst in bursts {
            for _ in 0..burst.particle_count {
                let spread = js_sys::Math::random() - 0.5;
                particles.push(Particle {
                    id: next_id,
                    left: (burst.x + spread * 0.1) * 100.0,
                    top: burst.y.max(0.0) * 100.0,
                    drift: spread * 240.0,
                    color: COLORS[next_id as usize % COLORS.len()],
                });
                next_id = next_id.wrapping_add(1);
            }
        }
        Rc::new(Confetti { particles, next_id })
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub on_close: Callback<()>,
}

/// Mounted only while open. The celebration starts on mount and its interval
/// is dropped on unmount, so nothing fires after dismissal.
#[function_component]
pub fn SuccessModal(props: &SuccessModalProps) -> Html {
    let tr = use_translator();
    let confetti = use_reducer(Confetti::default);

    {
        let confetti = confetti.dispatcher();
        use_effect_with_deps(
            move |_| {
                let celebration = Rc::new(RefCell::new(Celebration::start(js_sys::Date::now())));
                let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

                let handle = {
                    let celebration = celebration.clone();
                    let interval = interval.clone();
                    Interval::new(TICK_MS, move || {
                        let tick = celebration
                            .borrow_mut()
                            .tick(js_sys::Date::now(), &mut js_sys::Math::random);
                        match tick {
                            Tick::Fire(bursts) => confetti.dispatch(bursts),
                            Tick::Stop => {
                                // the interval can't be dropped from inside its own callback
                                let interval = interval.clone();
                                wasm_bindgen_futures::spawn_local(async move {
                                    interval.borrow_mut().take();
                                });
                            }
                        }
                    })
                };
                *interval.borrow_mut() = Some(handle);

                move || {
                    celebration.borrow_mut().cancel();
                    interval.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    html! {
        <>
            <div class="confetti-layer" aria-hidden="true">
                { for confetti.particles.iter().map(|p| html! {
                    <span
                        key={p.id}
                        class="confetti"
                        style={format!(
                            "left:{:.2}%;top:{:.2}%;background:{};--drift:{:.0}px;",
                            p.left, p.top, p.color, p.drift
                        )}
                    />
                }) }
            </div>
            <Modal on_close={props.on_close.clone()} class="success-modal">
                <div class="centered">
                    <Icon icon={IconId::Sparkles} class="success-icon" />
                    <h2 class="serif">{ tr.t("success_modal.title") }</h2>
                    <p class="muted">{ tr.t("success_modal.message") }</p>
                    <button class="btn btn-dark" onclick={on_button}>{ tr.t("success_modal.button") }</button>
                </div>
            </Modal>
        </>
    }
}
