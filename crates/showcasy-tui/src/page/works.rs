use super::block::Block;
use super::PageBuilder;

/// Every project once, the first one full width
pub(super) fn build(b: &mut PageBuilder<'_>) {
    b.gap(2)
        .reveal(
            0,
            Block::Title(vec![
                ("What I've been", false),
                ("working on", true),
                ("so far", false),
            ]),
        )
        .gap(2);

    let catalog = b.catalog();
    for (i, project) in catalog.projects.iter().enumerate() {
        let delay = if i % 2 == 1 { 100 } else { 0 };
        b.card(delay, project, i == 0).gap(1);
    }
    b.gap(2);
}
