use anyhow::Result;
use tracing::warn;

use showcasy_core::{AppConfig, AssetResolver, Catalog};
use showcasy_tui::keymap::parse_key_binding;

pub fn run(config: &AppConfig, catalog: &Catalog) -> Result<()> {
    println!(
        "Content: {} projects ({} featured), {} clients, {} testimonials, {} posts",
        catalog.projects.len(),
        catalog.featured().count(),
        catalog.clients.len(),
        catalog.testimonials.len(),
        catalog.blog_posts.len(),
    );
    println!("  Slugs: ok");

    let assets = AssetResolver::from_config(config);
    let paths = catalog.image_paths();
    let broken = assets.broken(paths.iter().copied());
    println!("\nImages under {}:", assets.root().display());
    if broken.is_empty() {
        println!("  All {} images readable", paths.len());
    } else {
        println!(
            "  {} of {} images will show a placeholder:",
            broken.len(),
            paths.len()
        );
        for path in &broken {
            println!("    {}", path);
        }
    }
    if assets.resolve(&config.assets.placeholder).is_fallback() {
        warn!(placeholder = %config.assets.placeholder, "Placeholder image is not readable");
        println!("  Placeholder {} is missing, a text frame is drawn instead", config.assets.placeholder);
    }

    let keymap = &config.keymap;
    let bindings = [
        ("quit", &keymap.quit),
        ("scroll_down", &keymap.scroll_down),
        ("scroll_up", &keymap.scroll_up),
        ("scroll_half_down", &keymap.scroll_half_down),
        ("scroll_half_up", &keymap.scroll_half_up),
        ("scroll_page_down", &keymap.scroll_page_down),
        ("scroll_page_up", &keymap.scroll_page_up),
        ("jump_to_top", &keymap.jump_to_top),
        ("jump_to_bottom", &keymap.jump_to_bottom),
        ("next_link", &keymap.next_link),
        ("prev_link", &keymap.prev_link),
        ("follow", &keymap.follow),
        ("menu", &keymap.menu),
        ("go_home", &keymap.go_home),
        ("go_about", &keymap.go_about),
        ("go_works", &keymap.go_works),
        ("go_contact", &keymap.go_contact),
        ("history_back", &keymap.history_back),
        ("history_forward", &keymap.history_forward),
        ("toggle_theme", &keymap.toggle_theme),
        ("open_website", &keymap.open_website),
    ];
    let invalid: Vec<_> = bindings
        .iter()
        .filter(|(_, key)| key.as_str() != "gg" && parse_key_binding(key).is_none())
        .collect();

    println!("\nKey bindings:");
    if invalid.is_empty() {
        println!("  ok");
    } else {
        for (name, key) in invalid {
            println!("  {} = {:?} is not a valid binding", name, key);
        }
    }

    Ok(())
}
