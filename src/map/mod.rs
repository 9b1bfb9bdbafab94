//! World map renderer
//!
//! Draws the station and the reference passover marker on an equirectangular
//! world map, then idles until the window is closed.

use crate::config::TrackerConfig;
use crate::coord::Coordinate;
use crate::open_notify::OpenNotifyClient;
use crate::report::report_passover;
use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowPosition, WindowResolution};

pub mod cursor;
pub mod images;
pub mod systems;

pub use images::PendingImages;

/// Renderer lifecycle. Each stage is entered exactly once, in declaration order.
#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderStage {
    #[default]
    Uninitialized,
    ScreenConfigured,
    IconRegistered,
    ReferenceMarked,
    PositionShown,
    AwaitingClose,
}

impl RenderStage {
    pub fn next(self) -> Option<Self> {
        match self {
            RenderStage::Uninitialized => Some(RenderStage::ScreenConfigured),
            RenderStage::ScreenConfigured => Some(RenderStage::IconRegistered),
            RenderStage::IconRegistered => Some(RenderStage::ReferenceMarked),
            RenderStage::ReferenceMarked => Some(RenderStage::PositionShown),
            RenderStage::PositionShown => Some(RenderStage::AwaitingClose),
            RenderStage::AwaitingClose => None,
        }
    }
}

/// Live station coordinate from the position fetch
#[derive(Resource, Clone, Copy, Debug)]
pub struct StationPosition(pub Coordinate);

/// Passover display string written next to the reference dot
#[derive(Resource, Clone, Debug)]
pub struct PassoverLabel(pub String);

/// Plugin driving the render stages
pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<RenderStage>()
            .add_systems(
                OnEnter(RenderStage::Uninitialized),
                (systems::configure_screen, systems::advance_stage).chain(),
            )
            .add_systems(
                OnEnter(RenderStage::ScreenConfigured),
                (systems::register_icon, systems::advance_stage).chain(),
            )
            .add_systems(
                OnEnter(RenderStage::IconRegistered),
                (systems::mark_reference_location, systems::advance_stage).chain(),
            )
            .add_systems(
                OnEnter(RenderStage::ReferenceMarked),
                (systems::show_station, systems::advance_stage).chain(),
            )
            .add_systems(OnEnter(RenderStage::PositionShown), systems::advance_stage)
            .add_systems(OnEnter(RenderStage::AwaitingClose), systems::await_close);
    }
}

/// Load the map images, fetch the reference passover, then show the map until
/// the window is closed.
pub fn run(
    config: TrackerConfig,
    runtime: &tokio::runtime::Runtime,
    client: &OpenNotifyClient,
    station: Coordinate,
) -> Result<()> {
    let images = PendingImages::load(&config.assets)?;
    let label = runtime.block_on(report_passover(
        client,
        &config.reference,
        &mut std::io::stdout(),
    ))?;

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(primary_window(&config)),
        ..default()
    }));
    app.insert_resource(ClearColor(Color::BLACK))
        .insert_resource(config)
        .insert_resource(images)
        .insert_resource(StationPosition(station))
        .insert_resource(PassoverLabel(label))
        .add_plugins(MapPlugin);

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow::anyhow!("map window exited with code {}", code))
            .context("rendering ISS map"),
    }
}

fn primary_window(config: &TrackerConfig) -> Window {
    let window = &config.window;
    Window {
        title: window.title.clone(),
        resolution: WindowResolution::new(window.width, window.height)
            .with_scale_factor_override(1.0),
        position: WindowPosition::At(window.start),
        resizable: false,
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
