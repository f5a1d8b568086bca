//! Static page sections. Class names here are the selectors the animation
//! registry binds to.

use leptos::prelude::*;

use crate::components::navbar::on_anchor_click;
use crate::components::pointer_effects::{MagneticLink, ProjectCard};

const SKILLS: &[&str] = &["Rust", "TypeScript", "WebAssembly", "Leptos", "PostgreSQL", "Motion design", "Figma"];

const STATS: [(&str, &str); 3] = [("150+", "Projects shipped"), ("8+", "Years of practice"), ("40+", "Happy clients")];

struct Project {
    title: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
    accent: &'static str,
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "Realtime Whiteboard",
        summary: "Collaborative canvas with live cursors and conflict-free edits.",
        tags: &["Rust", "WebSockets"],
        accent: "linear-gradient(135deg, #3b82f6, #8b5cf6)",
    },
    Project {
        title: "Studio Site",
        summary: "Scroll-driven storytelling for a design studio launch.",
        tags: &["Leptos", "Motion"],
        accent: "linear-gradient(135deg, #f59e0b, #ef4444)",
    },
    Project {
        title: "Metrics Console",
        summary: "Dense dashboards that stay responsive on a phone.",
        tags: &["WebAssembly", "Charts"],
        accent: "linear-gradient(135deg, #10b981, #3b82f6)",
    },
    Project {
        title: "Field Notes",
        summary: "An offline-first journal that syncs when it can.",
        tags: &["PWA", "SQLite"],
        accent: "linear-gradient(135deg, #ec4899, #f59e0b)",
    },
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("A rare mix of craft and pace. The launch landed a week early.", "Maya Chen", "Product Lead"),
    ("Every interaction feels considered. Our users noticed immediately.", "Tom Alvarez", "Founder"),
    ("Clear communication, careful engineering, no surprises.", "Priya Nair", "Engineering Manager"),
];

#[component]
fn SectionHeader(tag: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <span class="section-tag">{tag}</span>
            <h2 class="section-title">{title}</h2>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero-section">
            <div class="hero-content">
                <span class="eyebrow">"Designer & developer"</span>
                <h1>
                    <span class="hero-title">"Building calm,"</span>
                    <span class="hero-title">
                        "fast "
                        <span class="text-reveal">"interfaces"</span>
                    </span>
                </h1>
                <p class="hero-subtitle">
                    "I design and build web products that feel effortless, from first sketch to production."
                </p>
                <div class="cta-container">
                    <MagneticLink href="#work" class="btn-primary">
                        "View work"
                    </MagneticLink>
                    <MagneticLink href="#contact" class="btn-secondary">
                        "Get in touch"
                    </MagneticLink>
                </div>
            </div>
            <div class="abstract-shape">
                <div class="shape-inner"></div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about-section">
            <div class="section-container">
                <SectionHeader tag="About" title="A little about me" />
                <div class="about-text">
                    <p>
                        "I have spent the last few years helping teams turn rough ideas into products people enjoy using."
                    </p>
                    <p>"I care about the details: motion that explains, type that breathes, and code that lasts."</p>
                </div>
                <div class="skills-wrapper">
                    <h3>"Toolbox"</h3>
                    <div class="skill-tags">
                        {SKILLS.iter().map(|skill| view! { <span>{*skill}</span> }).collect_view()}
                    </div>
                </div>
                <div class="stats">
                    {STATS
                        .iter()
                        .map(|(number, label)| {
                            view! {
                                <div class="stat-item">
                                    <span class="stat-number">{*number}</span>
                                    <span class="stat-label">{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Work() -> impl IntoView {
    view! {
        <section id="work" class="work-section">
            <div class="section-container">
                <SectionHeader tag="Work" title="Selected projects" />
                <div class="projects-grid">
                    {PROJECTS
                        .iter()
                        .map(|p| {
                            view! { <ProjectCard title=p.title summary=p.summary tags=p.tags accent=p.accent /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials-section">
            <div class="section-container">
                <SectionHeader tag="Testimonials" title="Kind words" />
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|(quote, name, role)| {
                            view! {
                                <figure class="testimonial-card">
                                    <blockquote class="quote">{*quote}</blockquote>
                                    <figcaption>
                                        <strong>{*name}</strong>
                                        <span>{*role}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="social-links">
                <a href="https://github.com" target="_blank" rel="noopener">
                    "GitHub"
                </a>
                <a href="https://www.linkedin.com" target="_blank" rel="noopener">
                    "LinkedIn"
                </a>
                <a href="#home" on:click=on_anchor_click>
                    "Back to top"
                </a>
            </div>
            <p>"Designed and built with care."</p>
        </footer>
    }
}
