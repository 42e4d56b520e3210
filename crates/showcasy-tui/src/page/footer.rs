use super::block::{Block, LinkKind};
use super::{PageBuilder, Target};

const NAV: [(&str, &str); 3] = [("ABOUT ME", "/about"), ("WORKS", "/works"), ("CONTACT", "/contact")];

pub(super) fn build(b: &mut PageBuilder<'_>) {
    b.plain(Block::Rule).gap(2);

    let links = NAV
        .iter()
        .map(|(label, path)| (*label, b.target(Target::Route(path.to_string()))))
        .collect();
    b.reveal(0, Block::NavLinks(links))
        .gap(1)
        .reveal(
            0,
            Block::Title(vec![("Want to create something", false), ("awesome?", true)]),
        )
        .gap(1)
        .link(0, "Let's Talk", "/contact", LinkKind::Button)
        .gap(3)
        .plain(Block::Logo("A freelance frontend developer currently based in Berlin"))
        .gap(1);
}
