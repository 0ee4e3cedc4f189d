//! Grid renderers projecting the content catalog into the three landing
//! sections. Each render fully replaces the grid's children; a page without
//! one of these sections simply never mounts the component.

use yew::prelude::*;

use crate::content::{self, FeatureEntry, ProjectEntry, TestimonialEntry};
use crate::text::{initials, star_glyphs};

#[function_component(ServicesGrid)]
pub fn services_grid() -> Html {
    html! {
        <div id="services-grid" class="services__grid">
            { for content::PROJECTS.iter().map(service_card) }
        </div>
    }
}

fn service_card(project: &ProjectEntry) -> Html {
    html! {
        <div class="service-card">
            <span class="service-card__icon">{ project.icon }</span>
            <h3 class="service-card__title">{ project.title }</h3>
            <p class="service-card__description">{ project.description }</p>
            <ul class="service-card__features">
                { for project.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
            </ul>
        </div>
    }
}

#[function_component(FeaturesGrid)]
pub fn features_grid() -> Html {
    html! {
        <div id="features-grid" class="features__grid">
            { for content::FEATURES.iter().map(feature_card) }
        </div>
    }
}

fn feature_card(feature: &FeatureEntry) -> Html {
    html! {
        <div class="feature-card">
            <span class="feature-card__icon">{ feature.icon }</span>
            <h3 class="feature-card__title">{ feature.title }</h3>
            <p class="feature-card__description">{ feature.description }</p>
        </div>
    }
}

#[function_component(TestimonialsGrid)]
pub fn testimonials_grid() -> Html {
    html! {
        <div id="testimonials-grid" class="testimonials__grid">
            { for content::TESTIMONIALS.iter().map(testimonial_card) }
        </div>
    }
}

fn testimonial_card(t: &TestimonialEntry) -> Html {
    html! {
        <div class="testimonial-card">
            <div class="testimonial-card__rating">
                { for star_glyphs(t.rating).chars().map(|star| html! {
                    <span class="star">{ star }</span>
                }) }
            </div>
            <p class="testimonial-card__feedback">{ format!("\u{201c}{}\u{201d}", t.feedback) }</p>
            <div class="testimonial-card__author">
                <div class="testimonial-card__avatar">{ initials(t.name) }</div>
                <div class="testimonial-card__info">
                    <h4>{ t.name }</h4>
                    <span>{ t.course }</span>
                </div>
            </div>
        </div>
    }
}
