use std::sync::Arc;

use anyhow::Result;

use showcasy_core::Catalog;
use showcasy_tui::Router;

pub fn run(catalog: &Arc<Catalog>) -> Result<()> {
    let router = Router::new(Arc::clone(catalog), "/");
    let paths = router.all_paths();

    println!("Routes ({}):\n", paths.len());
    for path in &paths {
        let route = router.resolve(path).location().route.clone();
        println!("  {:<28} {}", path, route.title(catalog));
    }

    Ok(())
}
