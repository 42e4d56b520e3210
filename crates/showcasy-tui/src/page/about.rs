use super::block::Block;
use super::PageBuilder;

pub(super) fn build(b: &mut PageBuilder<'_>) {
    b.gap(2)
        .reveal(
            0,
            Block::Title(vec![
                ("About me,", true),
                ("a Frontend Developer living in Saline County.", false),
            ]),
        )
        .gap(1)
        .paragraph(
            100,
            "With a background rooted in web design and development, I've built up 5+ years of \
             experience that shape the way I approach every project, creating websites that feel \
             right on every screen, for every person using them.",
        )
        .gap(2)
        .image(
            0,
            "/images/about.jpg",
            "Portrait of Brandon Torres, a frontend developer",
            12,
        )
        .gap(3)
        .heading(0, "Let's build something your customers will enjoy using")
        .gap(1)
        .paragraph(
            100,
            "I work closely with the people I build for, taking time to understand what your \
             business actually needs before writing a single line of code. Every decision, from \
             layout to functionality, is made with your goals and your customers in mind.",
        )
        .gap(1)
        .paragraph(
            100,
            "When I'm not building, I'm staying busy. Outside of work, life is full and I wouldn't \
             have it any other way. I'm a husband to my beautiful wife and dad to 5 kids, plus two \
             dogs and a cat who keep things interesting. Most evenings you'll find me surrounded \
             by noise, laughter, and probably someone asking for a snack. It's chaos, but it's my \
             favorite kind.",
        )
        .gap(3);

    approach(b);
    skills(b);
    experience(b);
    clients(b);
    super::home::awards(b);
}

fn approach(b: &mut PageBuilder<'_>) {
    b.anchor("approach")
        .heading(0, "My Approach")
        .paragraph(
            0,
            "No guesswork, no surprises. Here's exactly how we go from first conversation to a \
             finished product you're proud of.",
        )
        .gap(1);
    let catalog = b.catalog();
    for step in &catalog.approach_steps {
        b.reveal(100, Block::Step(step.clone())).gap(1);
    }
    b.gap(2);
}

fn skills(b: &mut PageBuilder<'_>) {
    b.heading(0, "Skills & Tech Stack").gap(1);
    let catalog = b.catalog();
    let pills = catalog
        .skills
        .iter()
        .map(|skill| format!("{} {}", skill.glyph, skill.name))
        .collect();
    b.reveal(60, Block::Pills(pills)).gap(3);
}

fn experience(b: &mut PageBuilder<'_>) {
    b.heading(0, "Experience").gap(1);
    let catalog = b.catalog();
    for job in &catalog.experience {
        b.reveal(
            80,
            Block::Row {
                title: job.period.to_string(),
                detail: Some(job.role.to_string()),
                aside: job.duration.to_string(),
            },
        );
    }
    b.gap(3);
}

fn clients(b: &mut PageBuilder<'_>) {
    b.heading(0, "Clients").gap(1);
    let catalog = b.catalog();
    for (i, client) in catalog.clients.iter().enumerate() {
        b.reveal(
            i as u64 * 80,
            Block::Row {
                title: client.label.to_string(),
                detail: Some(client.date.to_string()),
                aside: format!("{} ↗", client.name),
            },
        );
    }
    b.gap(3);
}
