use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::modal::Notice;
use crate::components::reveal;
use crate::components::sections::{FeaturesGrid, ServicesGrid, TestimonialsGrid};
use crate::components::typed::TypedText;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_notify: Callback<Notice>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Entrance reveal for the sections and cards rendered below.
    {
        use_effect_with_deps(
            move |_| {
                let observer = reveal::observe_sections();
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <main class="landing">
            <style>
                {r#"body {
                    margin: 0;
                    font-family: 'Segoe UI', system-ui, sans-serif;
                    background: #1a1a1a;
                    color: #eee;
                }
                section {
                    padding: 5rem 1.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                section.animate-fade-in,
                .service-card.animate-fade-in,
                .feature-card.animate-fade-in,
                .testimonial-card.animate-fade-in {
                    opacity: 1;
                    transform: translateY(0);
                }
                .hero {
                    min-height: 90vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .typed-text {
                    color: #7EB2FF;
                    border-right: 2px solid #7EB2FF;
                    padding-right: 2px;
                }
                .hero p {
                    color: #bbb;
                    font-size: 1.2rem;
                    max-width: 640px;
                    margin: 0 auto;
                }
                .section-title {
                    text-align: center;
                    font-size: 2.2rem;
                    margin-bottom: 2.5rem;
                }
                .services__grid,
                .features__grid,
                .testimonials__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .service-card,
                .feature-card,
                .testimonial-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.75rem;
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .service-card__icon,
                .feature-card__icon {
                    font-size: 2rem;
                }
                .service-card__features {
                    list-style: none;
                    padding: 0;
                    color: #aaa;
                }
                .service-card__features li::before {
                    content: '✓ ';
                    color: #7EB2FF;
                }
                .testimonial-card__rating .star {
                    color: #f5c518;
                    font-size: 1.1rem;
                }
                .testimonial-card__author {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .testimonial-card__avatar {
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    background: #1e90ff;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                }
                .testimonial-card__info h4 { margin: 0; }
                .testimonial-card__info span { color: #999; font-size: 0.9rem; }
                .contact__form {
                    max-width: 560px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .form-control {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    color: #eee;
                    font-size: 1rem;
                    box-sizing: border-box;
                }
                .form-control.error {
                    border-color: #e25555;
                }
                .error-message {
                    color: #e25555;
                    font-size: 0.85rem;
                    min-height: 1em;
                    display: block;
                }
                .contact__submit {
                    padding: 0.9rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    background: #1e90ff;
                    color: #fff;
                    font-size: 1.05rem;
                    cursor: pointer;
                }
                .contact__submit:disabled {
                    opacity: 0.7;
                    cursor: default;
                }
                .footer {
                    text-align: center;
                    color: #777;
                    padding: 2rem 0 3rem;
                }"#}
            </style>

            <section id="home" class="hero">
                <h1>
                    {"Engineering Student "}
                    <TypedText />
                </h1>
                <p>
                    {"Future Minds builds final-year projects with students, from IoT \
                      prototypes to machine-learning applications, with documentation \
                      and walkthroughs included."}
                </p>
            </section>

            <section id="services">
                <h2 class="section-title">{"Project Categories"}</h2>
                <ServicesGrid />
            </section>

            <section id="features">
                <h2 class="section-title">{"Why Choose Us"}</h2>
                <FeaturesGrid />
            </section>

            <section id="testimonials">
                <h2 class="section-title">{"What Students Say"}</h2>
                <TestimonialsGrid />
            </section>

            <section id="contact">
                <h2 class="section-title">{"Start Your Project"}</h2>
                <ContactForm on_notify={props.on_notify.clone()} />
            </section>

            <footer class="footer">
                {"© 2025 Future Minds. All rights reserved."}
            </footer>
        </main>
    }
}
