use bevy::prelude::*;

use the_bistro::{
    catalog::{Catalog, CatalogPlugin},
    configure_system_sets,
    crafting::{CraftResolved, CraftingPlugin},
    invariants::InvariantPlugin,
    progression::ProgressionPlugin,
    GameplaySet,
};

/// Capture of craft responses, standing in for the presentation layer.
#[derive(Resource, Default)]
pub struct ResolvedCrafts(pub Vec<CraftResolved>);

fn capture_craft_resolutions(
    mut resolved: MessageReader<CraftResolved>,
    mut captured: ResMut<ResolvedCrafts>,
) {
    for message in resolved.read() {
        captured.0.push(message.clone());
    }
}

fn base_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    configure_system_sets(&mut app);
    app.init_resource::<ResolvedCrafts>();
    app.add_systems(
        Update,
        capture_craft_resolutions.in_set(GameplaySet::UIUpdate),
    );
    app
}

/// Headless app on the shipped content set.
pub fn headless_app() -> App {
    let mut app = base_app();
    app.add_plugins((CatalogPlugin, ProgressionPlugin, CraftingPlugin));
    app.add_plugins(InvariantPlugin);
    app
}

/// Headless app on a caller-supplied catalog instead of the shipped assets.
pub fn headless_app_with_catalog(catalog: Catalog) -> App {
    let mut app = base_app();
    app.insert_resource(catalog);
    app.add_plugins((ProgressionPlugin, CraftingPlugin));
    app.add_plugins(InvariantPlugin);
    app
}
