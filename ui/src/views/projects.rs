use dioxus::prelude::*;

use crate::components::ContentUnavailable;
use crate::content::{self, OutputKind, Project, ProjectImage, ProjectOutput};
use crate::core::links::LinkTarget;
use crate::t;

#[component]
pub fn Projects() -> Element {
    let lang_marker = super::use_lang_marker();

    let site = match content::site() {
        Ok(site) => site,
        Err(err) => return rsx! { ContentUnavailable { reason: err.to_string() } },
    };
    let page = &site.page_config.projects;

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-projects",
            header { class: "page__header",
                h1 { "{page.title}" }
            }

            hr { class: "separator" }

            div { class: "projects",
                for project in site.projects.iter() {
                    {render_project(project, &page.sections.presentations_articles)}
                }
            }
        }
    }
}

fn render_project(project: &Project, outputs_heading: &str) -> Element {
    rsx! {
        article { id: "{project.id}", class: "project-card",
            header { class: "project-card__header",
                span { class: "badge badge--secondary project-card__period", "{project.period}" }
                h2 { class: "project-card__title", "{project.title}" }
                if let Some(institution) = project.institution.as_ref() {
                    p { class: "project-card__institution", "{institution}" }
                }
            }

            hr { class: "separator" }

            div { class: "project-card__body",
                if let Some(description) = project.description.as_ref() {
                    div { class: "project-card__description", "{description}" }
                }

                if let Some(funding) = project.funding.as_ref() {
                    p { class: "project-card__funding", "{funding}" }
                }

                if let Some(image) = project.image.as_ref() {
                    div { class: "project-card__image",
                        img { src: "{image}", alt: "{project.title}" }
                    }
                }

                if !project.images.is_empty() {
                    div { class: "project-card__gallery",
                        for image in project.images.iter() {
                            {render_figure(image, &project.title)}
                        }
                    }
                }

                if !project.publications.is_empty() {
                    div { class: "project-card__outputs",
                        hr { class: "separator" }
                        h3 { class: "project-card__outputs-heading", "{outputs_heading}" }
                        ul { class: "project-outputs",
                            for output in project.publications.iter() {
                                {render_output(output)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_figure(image: &ProjectImage, project_title: &str) -> Element {
    let alt = image.alt_or(project_title);

    rsx! {
        figure { class: "project-card__figure",
            div { class: "project-card__image",
                img { src: "{image.src}", alt: "{alt}" }
            }
            if let Some(caption) = image.caption.as_ref() {
                figcaption { class: "project-card__caption", "{caption}" }
            }
        }
    }
}

fn render_output(output: &ProjectOutput) -> Element {
    let link = LinkTarget::resolve(output.url.as_deref());

    match output.output_kind() {
        OutputKind::Link => rsx! {
            li { class: "project-output project-output--link",
                a { class: "project-output__title", href: "{link.href}", "{output.title}" }
            }
        },
        OutputKind::Presentation => rsx! {
            li { class: "project-output project-output--presentation",
                span { class: "badge badge--outline", {t!("projects-presentation-badge")} }
                a {
                    class: "project-output__title",
                    href: "{link.href}",
                    target: link.target(),
                    rel: link.rel(),
                    "{output.title}"
                }
                div { class: "project-output__meta",
                    if let Some(venue) = output.venue.as_ref() {
                        div { class: "project-output__venue", "{venue}" }
                    }
                    if let Some(location) = output.location.as_ref() {
                        div { "{location}" }
                    }
                }
            }
        },
        OutputKind::Article => {
            let place_and_year = output.place_and_year();
            rsx! {
                li { class: "project-output project-output--article",
                    a {
                        class: "project-output__title",
                        href: "{link.href}",
                        target: link.target(),
                        rel: link.rel(),
                        "{output.title}"
                    }
                    div { class: "project-output__meta",
                        if let Some(venue) = output.venue.as_ref() {
                            div { class: "project-output__venue", "{venue}" }
                        }
                        if let Some(line) = place_and_year {
                            div { "{line}" }
                        }
                    }
                }
            }
        }
    }
}
