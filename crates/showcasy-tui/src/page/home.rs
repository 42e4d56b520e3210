use super::block::{Block, LinkKind};
use super::PageBuilder;

pub(super) fn build(b: &mut PageBuilder<'_>) {
    hero(b);
    about_preview(b);
    featured_projects(b);
    clients(b);
    testimonials(b);
    awards(b);
    insights(b);
}

fn hero(b: &mut PageBuilder<'_>) {
    b.gap(2)
        .reveal(0, Block::Badge("Available for Freelance"))
        .gap(1)
        .reveal(
            80,
            Block::Title(vec![
                ("Frontend developer with a passion for ", false),
                ("great design", true),
            ]),
        )
        .gap(1)
        .paragraph(
            140,
            "I'm Brandon, a Frontend Developer living in Saline County, and I focus on making \
             digital experiences that are easy to use, enjoyable, and get the job done.",
        )
        .gap(1)
        .link(200, "Let's Talk", "/contact", LinkKind::Button)
        .gap(2)
        .image(
            250,
            "/images/TherapyMockup.png",
            "Safe Space therapy platform mockup showcasing frontend development work",
            12,
        )
        .gap(3);
}

fn about_preview(b: &mut PageBuilder<'_>) {
    b.image(
        0,
        "/images/brandon.png",
        "Portrait of Brandon Torres, a frontend developer",
        10,
    )
    .gap(1)
    .heading(150, "Design that sparks engagement and inspires action")
    .gap(1)
    .paragraph(
        150,
        "Concentrate on your primary objective which is expanding your business, and leave it \
         to me to ensure that your business is attracting the digital users and standing itself \
         from the rivalry.",
    )
    .gap(1)
    .link(150, "About Me", "/about", LinkKind::Arrow)
    .gap(3);
}

fn featured_projects(b: &mut PageBuilder<'_>) {
    let catalog = b.catalog();
    let featured: Vec<_> = catalog.featured().collect();

    b.heading(0, "Discover my latest works").gap(1);
    for (i, project) in featured.iter().take(2).enumerate() {
        b.card(i as u64 * 100, project, false).gap(1);
    }
    if let Some(project) = featured.get(2) {
        b.card(0, project, true).gap(1);
    }
    b.link(0, "View All Works", "/works", LinkKind::Arrow).gap(3);
}

fn clients(b: &mut PageBuilder<'_>) {
    b.heading(0, "A visual partner for brands, companies, and agencies")
        .gap(1);
    let catalog = b.catalog();
    for (i, client) in catalog.clients.iter().enumerate() {
        b.reveal(
            i as u64 * 100,
            Block::Row {
                title: client.name.to_string(),
                detail: Some("UI/UX & Branding".to_string()),
                aside: "2022".to_string(),
            },
        );
    }
    b.gap(3);
}

fn testimonials(b: &mut PageBuilder<'_>) {
    b.heading(0, "Let's see what my clients say").gap(1);
    let catalog = b.catalog();
    for (i, testimonial) in catalog.testimonials.iter().enumerate() {
        b.reveal(i as u64 * 100, Block::Quote(testimonial.clone()))
            .gap(1);
    }
    b.gap(2);
}

pub(super) fn awards(b: &mut PageBuilder<'_>) {
    b.image(0, "/images/award-trophy.jpg", "Design award trophy", 8)
        .gap(1)
        .heading(0, "Awwards Winning - Independent of The Year")
        .reveal(0, Block::Text("Brandon Torres - 2022".to_string()))
        .gap(1);
    let catalog = b.catalog();
    for (i, award) in catalog.awards.iter().enumerate() {
        b.reveal(
            i as u64 * 80,
            Block::Row {
                title: award.title.to_string(),
                detail: Some(format!("{} - {}", award.year, award.org)),
                aside: "↗".to_string(),
            },
        );
    }
    b.gap(3);
}

fn insights(b: &mut PageBuilder<'_>) {
    b.heading(0, "Latest Insights").gap(1);
    let catalog = b.catalog();
    for (i, post) in catalog.blog_posts.iter().enumerate() {
        b.image(i as u64 * 100, post.image, post.title, 5).reveal(
            i as u64 * 100,
            Block::Row {
                title: post.title.to_string(),
                detail: None,
                aside: post.date.to_string(),
            },
        );
        b.gap(1);
    }
    b.gap(2);
}
