//! The page's animation bindings.
//!
//! Built once at startup and handed to [`super::register_all`]. Everything
//! here is plain data so the whole set can be inspected in tests.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use crate::consts::COUNTER_SECS;
use crate::util::easing::Ease;

use super::binding::{
    AnimationBinding, Effect, Props, Scalar, Scope, ScrollEdge, Step, Target, Trigger, Tween,
};

/// Scrub smoothing used by every parallax binding.
const PARALLAX_LAG_S: f64 = 1.0;

fn enter(selector: &'static str, line: f64) -> Trigger {
    Trigger::Enter { anchor: Target::Selector(selector), line }
}

fn enter_self(line: f64) -> Trigger {
    Trigger::Enter { anchor: Target::Scope, line }
}

fn passage(anchor: Target) -> Trigger {
    Trigger::Scrub {
        anchor,
        start: ScrollEdge::TOP_BOTTOM,
        end: ScrollEdge::BOTTOM_TOP,
        lag_s: PARALLAX_LAG_S,
    }
}

fn sel(selector: &'static str) -> Target {
    Target::Selector(selector)
}

fn rise(y: f64) -> Props {
    Props::new().y(y).opacity(0.0)
}

fn slide(x: f64) -> Props {
    Props::new().x(x).opacity(0.0)
}

/// Every binding on the page, in registration order.
#[must_use]
pub fn page_bindings() -> Vec<AnimationBinding> {
    let mut bindings = vec![hero_intro(), hero_parallax()];
    bindings.extend(section_bindings());
    bindings.extend(stat_bindings());
    bindings.extend(project_bindings());
    bindings.extend(contact_bindings());
    bindings.extend(ambient_bindings());
    bindings
}

fn hero_intro() -> AnimationBinding {
    let hero = Ease::Power3Out;
    AnimationBinding {
        name: "hero-intro",
        scope: Scope::Document,
        trigger: Trigger::Load,
        effect: Effect::Timeline(vec![
            Step::new(sel(".eyebrow"), Tween::from(rise(30.0), 0.8).ease(hero)),
            Step::new(sel(".hero-title"), Tween::from(rise(100.0), 1.2).ease(hero).stagger(0.1)).overlap(0.4),
            Step::new(
                sel(".text-reveal"),
                Tween::from(
                    Props::new().css("backgroundPosition", "0% 100%").css("backgroundSize", "0% 100%"),
                    1.2,
                )
                .ease(Ease::Power2InOut),
            )
            .overlap(0.8),
            Step::new(sel(".hero-subtitle"), Tween::from(rise(30.0), 1.0).ease(hero)).overlap(0.6),
            Step::new(sel(".cta-container a"), Tween::from(rise(30.0), 0.8).ease(hero).stagger(0.2)).overlap(0.5),
            Step::new(
                sel(".abstract-shape"),
                Tween::from(Props::new().scale(0.5).opacity(0.0).rotation(180.0), 1.5).ease(Ease::SPRING),
            )
            .overlap(1.2),
        ]),
    }
}

fn hero_parallax() -> AnimationBinding {
    AnimationBinding::tween(
        "hero-parallax",
        Scope::Document,
        Trigger::Scrub {
            anchor: sel(".hero-section"),
            start: ScrollEdge::TOP_TOP,
            end: ScrollEdge::BOTTOM_TOP,
            lag_s: PARALLAX_LAG_S,
        },
        sel(".abstract-shape"),
        Tween::to(Props::new().y(200.0), 1.0).additive(),
    )
}

fn section_bindings() -> Vec<AnimationBinding> {
    vec![
        AnimationBinding {
            name: "section-header",
            scope: Scope::Each(".section-header"),
            trigger: enter_self(0.85),
            effect: Effect::Timeline(vec![
                Step::new(sel(".section-tag"), Tween::from(slide(-30.0), 0.6)),
                Step::new(sel(".section-title"), Tween::from(rise(40.0), 0.8)).overlap(0.3),
            ]),
        },
        AnimationBinding::tween(
            "about-text",
            Scope::Document,
            enter(".about-text", 0.8),
            sel(".about-text p"),
            Tween::from(rise(30.0), 1.0).stagger(0.2),
        ),
        AnimationBinding::tween(
            "skills-heading",
            Scope::Document,
            enter(".skills-wrapper", 0.95),
            sel(".skills-wrapper h3"),
            Tween::from(Props::new().y(20.0), 0.8).ease(Ease::Power3Out),
        ),
        AnimationBinding::tween(
            "skill-tags",
            Scope::Document,
            enter(".skill-tags", 0.95),
            sel(".skill-tags span"),
            Tween::from(Props::new().y(10.0).scale(0.95), 0.6).ease(Ease::Power2Out).stagger(0.05),
        ),
    ]
}

fn stat_bindings() -> Vec<AnimationBinding> {
    vec![
        AnimationBinding::tween(
            "stat-item",
            Scope::Each(".stat-item"),
            enter_self(0.9),
            Target::Scope,
            Tween::from(Props::new().scale(0.5).opacity(0.0), 0.8)
                .ease(Ease::POP)
                .delay(Scalar::Stagger { base: 0.0, step: 0.1 }),
        ),
        AnimationBinding {
            name: "stat-counter",
            scope: Scope::Each(".stat-number"),
            trigger: enter_self(0.9),
            effect: Effect::Counter { target: Target::Scope, duration_s: COUNTER_SECS, ease: Ease::Power1Out },
        },
    ]
}

fn project_bindings() -> Vec<AnimationBinding> {
    vec![
        AnimationBinding::tween(
            "project-card",
            Scope::Each(".project-card"),
            enter_self(0.9),
            Target::Scope,
            Tween::from(rise(80.0).rotation(Scalar::Alternate { even: 5.0, odd: -5.0 }), 1.0).ease(Ease::Power3Out),
        ),
        AnimationBinding::tween(
            "project-card-parallax",
            Scope::Each(".project-card"),
            passage(Target::Scope),
            Target::Scope,
            Tween::to(Props::new().y(-30.0), 1.0).additive(),
        ),
        AnimationBinding::tween(
            "testimonial-card",
            Scope::Each(".testimonial-card"),
            enter_self(0.85),
            Target::Scope,
            Tween::from(rise(60.0).rotation(Scalar::Stagger { base: -3.0, step: 3.0 }), 1.0)
                .ease(Ease::Power3Out)
                .delay(Scalar::Stagger { base: 0.0, step: 0.15 }),
        ),
        AnimationBinding::tween(
            "quote",
            Scope::Document,
            enter(".testimonials-grid", 0.8),
            sel(".quote"),
            Tween::from(Props::new().opacity(0.0), 1.2).stagger(0.2),
        ),
    ]
}

fn contact_bindings() -> Vec<AnimationBinding> {
    vec![
        AnimationBinding::tween(
            "form-groups",
            Scope::Document,
            enter(".contact-form-clean", 0.85),
            sel(".form-group"),
            Tween::from(slide(50.0), 0.8).ease(Ease::Power3Out).stagger(0.15),
        ),
        AnimationBinding::tween(
            "contact-header",
            Scope::Document,
            enter(".contact-wrapper", 0.85),
            sel(".contact-header"),
            Tween::from(slide(-80.0), 1.0).ease(Ease::Power3Out),
        ),
        AnimationBinding::tween(
            "footer",
            Scope::Document,
            enter("footer", 0.95),
            sel("footer"),
            Tween::from(rise(50.0), 1.0),
        ),
        AnimationBinding::tween(
            "social-links",
            Scope::Document,
            enter(".social-links", 0.95),
            sel(".social-links a"),
            Tween::from(rise(20.0), 0.6).stagger(0.1),
        ),
    ]
}

fn ambient_bindings() -> Vec<AnimationBinding> {
    vec![
        AnimationBinding::tween(
            "floating-shape",
            Scope::Document,
            Trigger::Load,
            sel(".shape-inner"),
            Tween::to(Props::new().y(20.0), 3.0).ease(Ease::SineInOut).forever(true),
        ),
        AnimationBinding::tween(
            "page-fade-in",
            Scope::Document,
            Trigger::Load,
            sel("body"),
            Tween::from(Props::new().opacity(0.0), 0.6).ease(Ease::Power2Out),
        ),
        AnimationBinding::tween(
            "section-parallax",
            Scope::Each(".section-container"),
            passage(Target::Scope),
            Target::Scope,
            Tween::to(Props::new().y(-50.0), 1.0).additive(),
        ),
    ]
}
