use showcasy_core::content::Project;

use super::block::{Block, LinkKind};
use super::{PageBuilder, Target};

const GALLERY: [(&str, &str); 3] = [
    ("/images/project-wepay-phone.jpg", "Project screenshot 1"),
    ("/images/project-payrole-phone.jpg", "Project screenshot 2"),
    ("/images/project-estatery-laptop-2.jpg", "Project full view"),
];

pub(super) fn build(b: &mut PageBuilder<'_>, project: &Project) {
    b.gap(2)
        .reveal(0, Block::Eyebrow(project.title.to_string()))
        .heading(0, "Unleash Your Potential and Push Beyond Limits")
        .gap(1)
        .image(100, project.image, &format!("{} hero image", project.title), 12)
        .gap(2);

    sidebar(b, project);

    for (title, body) in [
        ("About", Some(project.about)),
        ("Our Clients", Some(project.clients)),
        ("Challenge", Some(project.challenge)),
        ("Results", project.results),
    ] {
        let Some(body) = body else { continue };
        b.heading(0, title).paragraph(0, body).gap(1);
    }

    if !project.metrics.is_empty() {
        b.gap(1);
        for metric in project.metrics {
            b.metric(0, metric).gap(1);
        }
    }

    b.gap(1);
    for (path, alt) in GALLERY {
        b.image(0, path, alt, 8).gap(1);
    }

    if let Some(testimonial) = &project.testimonial {
        b.gap(1).reveal(0, Block::Quote(testimonial.clone()));
    }

    whats_next(b, project);
}

fn sidebar(b: &mut PageBuilder<'_>, project: &Project) {
    b.reveal(
        0,
        Block::Facts(vec![
            ("Date", vec![project.display_date()]),
            ("Client Name", vec![project.client.to_string()]),
            (
                "Services",
                project.services.iter().map(|s| s.to_string()).collect(),
            ),
        ]),
    )
    .gap(1);

    let target = b.target(Target::External(project.website_url()));
    b.reveal(
        0,
        Block::Link {
            label: "Visit Website".to_string(),
            target,
            kind: LinkKind::Arrow,
        },
    )
    .gap(2);
}

fn whats_next(b: &mut PageBuilder<'_>, project: &Project) {
    b.gap(2)
        .heading(0, "What's next?")
        .link(0, "View All Works", "/works", LinkKind::Arrow)
        .gap(1);
    let catalog = b.catalog();
    for (i, other) in catalog.other_projects(project.slug, 2).into_iter().enumerate() {
        b.card(i as u64 * 100, other, false).gap(1);
    }
    b.gap(2);
}
