use std::time::Duration;

use js_sys::Promise;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::sections::{SectionObserver, SectionTracker};
use crate::theme::{apply_theme, persist_theme, resolve_theme, Theme};
use crate::typing::{TypingCycle, TypingTimings};

const HERO_PHRASES: &[&str] = &[
    "Engineering backend systems that scale effortlessly",
    "Building clean APIs with purpose and precision",
    "Turning ideas into resilient cloud-native solutions",
    "Automating the boring, architecting the essential",
];

const SECTION_IDS: &[&str] = &[
    "hero",
    "about",
    "stack",
    "skills",
    "experience",
    "certs",
    "contact",
];

const NAV_LINKS: &[(&str, &str)] = &[
    ("hero", "Home"),
    ("about", "About"),
    ("stack", "Tech"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("certs", "Certifications"),
    ("contact", "Contact"),
];

const STACK_BADGES: &[&str] = &[
    "Java",
    "Spring Boot",
    "PostgreSQL",
    "AWS",
    "Docker",
    "Jenkins",
    "React",
    "Git",
];

const SKILLS: &[&str] = &[
    "Microservices & REST API design",
    "Cloud deployments (AWS ECS/EKS, Lambda)",
    "CI/CD pipelines & Infrastructure as Code",
    "SQL/NoSQL data modeling and tuning",
    "Observability (logs, metrics, traces)",
    "Containerization & orchestration",
];

const CERTIFICATIONS: &[&str] = &[
    "AWS Certified Cloud Practitioner (in progress)",
    "Oracle Certified Java Programmer (OCJP)",
    "Docker Essentials & Kubernetes Basics",
];

const EXPERIENCE_HIGHLIGHTS: &[&str] = &[
    "Designed and shipped scalable REST services with Java + Spring Boot.",
    "Implemented CI/CD with Jenkins and Git, reducing release friction.",
    "Deployed containerized workloads to AWS with robust monitoring.",
];

const SEND_SIMULATION: Duration = Duration::from_millis(900);

struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    fn schedule(delay: Duration, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::<dyn FnMut()>::new(callback);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay.as_millis() as i32,
            )
            .ok()?;

        Some(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

async fn sleep(delay: Duration) {
    let promise = Promise::new(&mut |resolve, _reject| {
        let scheduled = window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                delay.as_millis() as i32,
            )
            .ok()
        });

        if scheduled.is_none() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });

    let _ = JsFuture::from(promise).await;
}

#[hook]
fn use_theme() -> (Theme, Callback<MouseEvent>) {
    let theme = use_state(resolve_theme);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            persist_theme(next);
            apply_theme(next);
            theme.set(next);
        })
    };

    (*theme, on_toggle)
}

#[hook]
fn use_typing_cycle(phrases: &'static [&'static str], timings: TypingTimings) -> String {
    let machine = use_mut_ref(|| TypingCycle::new(phrases));
    let tick = use_state(|| 0u64);

    {
        let machine = machine.clone();
        let tick = tick.clone();
        use_effect_with(*tick, move |_| {
            let delay = machine.borrow().delay(timings);
            let timer = {
                let machine = machine.clone();
                let tick = tick.clone();
                Timeout::schedule(delay, move || {
                    machine.borrow_mut().advance();
                    tick.set(*tick + 1);
                })
            };

            move || drop(timer)
        });
    }

    machine.borrow().displayed().to_string()
}

#[hook]
fn use_active_section(sections: &'static [&'static str]) -> &'static str {
    let tracker = use_mut_ref(|| SectionTracker::new(sections));
    let active = use_state(|| sections[0]);

    {
        let tracker = tracker.clone();
        let active = active.clone();
        use_effect_with((), move |_| {
            let observer = SectionObserver::register(sections, move |batch| {
                let mut tracker = tracker.borrow_mut();
                tracker.apply(
                    batch
                        .iter()
                        .map(|(id, intersecting)| (id.as_str(), *intersecting)),
                );
                active.set(tracker.active());
            });

            move || drop(observer)
        });
    }

    *active
}

#[derive(Properties, PartialEq)]
struct NavProps {
    active: &'static str,
    theme: Theme,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(Nav)]
fn nav(props: &NavProps) -> Html {
    html! {
        <header class="site-nav">
            <a class="brand" href="#hero">{"Alankar Jamle"}</a>
            <nav class="nav-links" aria-label="Section navigation">
                {
                    NAV_LINKS.iter().map(|(id, label)| {
                        let class = if *id == props.active {
                            "nav-link nav-active"
                        } else {
                            "nav-link"
                        };
                        html! {
                            <a key={*id} class={class} href={format!("#{id}")}>{*label}</a>
                        }
                    }).collect::<Html>()
                }
            </nav>
            <div class="nav-actions">
                <a class="icon-link" href="https://github.com/" aria-label="GitHub">{"GitHub"}</a>
                <a class="icon-link" href="https://www.linkedin.com/" aria-label="LinkedIn">{"LinkedIn"}</a>
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={props.theme.toggle_label()}
                    aria-pressed={props.theme.pressed().to_string()}
                    onclick={props.on_toggle.clone()}
                >
                    <span aria-hidden="true">{props.theme.icon()}</span>
                </button>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct QuoteCardProps {
    text: &'static str,
    author: &'static str,
}

#[function_component(QuoteCard)]
fn quote_card(props: &QuoteCardProps) -> Html {
    html! {
        <figure class="quote-card">
            <blockquote>{props.text}</blockquote>
            <figcaption class="muted">{format!("— {}", props.author)}</figcaption>
        </figure>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
}

impl SubmitStatus {
    fn label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending…",
            Self::Sent => "Sent ✓",
        }
    }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let status = use_state(|| SubmitStatus::Idle);

    let onsubmit = {
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if *status != SubmitStatus::Idle {
                return;
            }

            status.set(SubmitStatus::Sending);
            let status = status.clone();
            spawn_local(async move {
                sleep(SEND_SIMULATION).await;
                status.set(SubmitStatus::Sent);
            });
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="field-row">
                <div class="field">
                    <label for="name">{"Name"}</label>
                    <input id="name" name="name" required=true placeholder="Your name" />
                </div>
                <div class="field">
                    <label for="email">{"Email"}</label>
                    <input id="email" name="email" type="email" required=true placeholder="you@example.com" />
                </div>
            </div>
            <div class="field">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    required=true
                    placeholder="Tell me about your project or role"
                />
            </div>
            <button class="btn-primary" type="submit" disabled={*status != SubmitStatus::Idle}>
                {(*status).label()}
            </button>
        </form>
    }
}

#[function_component(App)]
fn app() -> Html {
    let (theme, on_toggle) = use_theme();
    let typed = use_typing_cycle(HERO_PHRASES, TypingTimings::default());
    let active = use_active_section(SECTION_IDS);

    html! {
        <>
            <a class="skip-link" href="#about">{"Skip to main content"}</a>
            <Nav active={active} theme={theme} on_toggle={on_toggle} />

            <main class="page-shell">
                <section id="hero" class="hero" aria-labelledby="hero-heading">
                    <p class="eyebrow">{"Open to backend & cloud roles"}</p>
                    <h1 id="hero-heading">
                        {"Hi, I'm Alankar Jamle"}
                        <span class="accent">{"Software Engineer"}</span>
                    </h1>
                    <p class="typed-line">
                        {typed}
                        <span class="caret" aria-hidden="true"></span>
                    </p>
                    <div class="cta-row">
                        <a class="btn-primary" href="#contact">{"Contact Me"}</a>
                        <a class="btn-ghost" href="/resume.pdf">{"Download Resume"}</a>
                    </div>
                    <div class="quote-grid">
                        <QuoteCard
                            text="Any fool can write code that a computer can understand. Good programmers write code that humans can understand."
                            author="Martin Fowler"
                        />
                        <QuoteCard
                            text="Code is like humor. When you have to explain it, it's bad."
                            author="Cory House"
                        />
                        <QuoteCard
                            text="The function of good software is to make the complex appear to be simple."
                            author="Grady Booch"
                        />
                    </div>
                    <div class="hero-visual" aria-hidden="true"></div>
                </section>

                <section id="about" class="section-block" aria-labelledby="about-heading">
                    <h2 id="about-heading">{"About Me"}</h2>
                    <p>
                        {"Backend-focused engineer with 2.5 years of experience designing robust APIs, \
                          crafting microservices, and deploying to cloud environments."}
                    </p>
                    <p>
                        {"I enjoy transforming complex requirements into elegant systems with thoughtful \
                          abstractions, observability, and automation."}
                    </p>
                    <p class="soft-note">
                        {"\"I believe software should be like a well-written sentence — clear, purposeful, \
                          and readable. I aim to build systems that don't just work but evolve gracefully.\""}
                    </p>
                </section>

                <section id="stack" class="section-block" aria-labelledby="stack-heading">
                    <h2 id="stack-heading">{"Tech Stack"}</h2>
                    <ul class="badge-list">
                        {
                            STACK_BADGES.iter().map(|badge| html! {
                                <li key={*badge} class="badge">{*badge}</li>
                            }).collect::<Html>()
                        }
                    </ul>
                </section>

                <section id="skills" class="section-block" aria-labelledby="skills-heading">
                    <h2 id="skills-heading">{"Skills"}</h2>
                    <ul class="card-grid">
                        {
                            SKILLS.iter().map(|skill| html! {
                                <li key={*skill} class="card">{*skill}</li>
                            }).collect::<Html>()
                        }
                    </ul>
                </section>

                <section id="experience" class="section-block" aria-labelledby="experience-heading">
                    <h2 id="experience-heading">{"Experience"}</h2>
                    <article class="card role-card">
                        <div class="role-header">
                            <div>
                                <h3>{"Software Engineer"}</h3>
                                <p class="muted">{"Backend · Cloud · APIs"}</p>
                            </div>
                            <span class="chip">{"2022 — Present"}</span>
                        </div>
                        <ul class="role-highlights">
                            {
                                EXPERIENCE_HIGHLIGHTS.iter().map(|highlight| html! {
                                    <li key={*highlight}>{*highlight}</li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </article>
                </section>

                <section id="certs" class="section-block" aria-labelledby="certs-heading">
                    <h2 id="certs-heading">{"Certifications"}</h2>
                    <ul class="card-grid">
                        {
                            CERTIFICATIONS.iter().map(|cert| html! {
                                <li key={*cert} class="card">{*cert}</li>
                            }).collect::<Html>()
                        }
                    </ul>
                </section>

                <section id="contact" class="section-block" aria-labelledby="contact-heading">
                    <h2 id="contact-heading">{"Contact"}</h2>
                    <div class="contact-grid">
                        <div class="contact-copy">
                            <h3>{"Let's build something reliable."}</h3>
                            <p class="muted">{"Have an opportunity or idea? I'm all ears."}</p>
                            <div class="cta-row">
                                <a class="btn-primary" href="https://github.com/">{"GitHub"}</a>
                                <a class="btn-ghost" href="https://www.linkedin.com/">{"LinkedIn"}</a>
                            </div>
                        </div>
                        <ContactForm />
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <p class="muted">{"Crafted with logic and caffeine ☕"}</p>
                <div class="cta-row">
                    <a class="icon-link" href="#hero">{"Back to top"}</a>
                    <a class="icon-link" href="https://github.com/" aria-label="GitHub">{"GitHub"}</a>
                    <a class="icon-link" href="https://www.linkedin.com/" aria-label="LinkedIn">{"LinkedIn"}</a>
                </div>
            </footer>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
