use showcasy_core::contact::Field;
use showcasy_core::content::data::{BUDGET_RANGES, SERVICES};

use super::block::{Block, ChipKind};
use super::{PageBuilder, Target};

pub(super) fn build(b: &mut PageBuilder<'_>) {
    b.gap(2)
        .reveal(
            0,
            Block::Title(vec![
                ("Say Hi!", true),
                ("and tell me about your idea", false),
            ]),
        )
        .gap(1)
        .paragraph(100, "Have a nice works? Reach out and let's chat.")
        .gap(2);

    field(b, 0, Field::Name);
    field(b, 50, Field::Email);
    field(b, 100, Field::Company);

    let services = SERVICES
        .iter()
        .map(|s| (*s, b.target(Target::Service(*s))))
        .collect();
    b.reveal(
        150,
        Block::Chips {
            label: "What's in your mind?",
            kind: ChipKind::Service,
            options: services,
        },
    )
    .gap(1);

    let budgets = BUDGET_RANGES
        .iter()
        .map(|r| (*r, b.target(Target::Budget(*r))))
        .collect();
    b.reveal(
        200,
        Block::Chips {
            label: "How much your budget range?",
            kind: ChipKind::Budget,
            options: budgets,
        },
    )
    .gap(1);

    field(b, 250, Field::Message);

    let target = b.target(Target::Submit);
    b.reveal(300, Block::Submit { target }).gap(3);
}

fn field(b: &mut PageBuilder<'_>, delay_ms: u64, field: Field) {
    let target = b.target(Target::Field(field));
    b.reveal(delay_ms, Block::Field { field, target }).gap(1);
}
