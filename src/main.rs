use bevy::prelude::*;

use the_bistro::catalog::CatalogPlugin;
use the_bistro::configure_system_sets;
use the_bistro::crafting::CraftingPlugin;
use the_bistro::progression::ProgressionPlugin;

fn main() {
    let mut app = App::new();
    configure_system_sets(&mut app);
    app.add_plugins(DefaultPlugins)
        .add_plugins((CatalogPlugin, ProgressionPlugin, CraftingPlugin))
        .run();
}
