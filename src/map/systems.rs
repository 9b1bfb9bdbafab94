//! Render stage systems, one per `RenderStage`

use crate::config::TrackerConfig;
use crate::coord::WorldFrame;
use crate::map::cursor::{Cursor, mark_reference};
use crate::map::images::PendingImages;
use crate::map::{PassoverLabel, RenderStage, StationPosition};
use bevy::prelude::*;
use bevy::sprite::Anchor;

const BACKGROUND_Z: f32 = 0.0;
pub(crate) const DOT_Z: f32 = 1.0;
const LABEL_Z: f32 = 2.0;
pub(crate) const ICON_Z: f32 = 3.0;

#[derive(Component)]
pub struct StationIcon;

#[derive(Component)]
pub struct ReferenceDot;

#[derive(Component)]
pub struct PassoverText;

/// Canvas mapping derived from the window size
#[derive(Resource, Clone, Copy, Deref)]
pub struct Frame(pub WorldFrame);

/// Move on to the next stage unless the current one is terminal
pub fn advance_stage(stage: Res<State<RenderStage>>, mut next: ResMut<NextState<RenderStage>>) {
    if let Some(following) = stage.get().next() {
        next.set(following);
    }
}

pub fn configure_screen(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    mut pending: ResMut<PendingImages>,
    config: Res<TrackerConfig>,
) {
    let frame = WorldFrame::new(config.window.width, config.window.height);
    commands.insert_resource(Frame(frame));
    commands.spawn(Camera2d);

    let Some(map) = pending.map.take() else {
        warn!("configure_screen: world map image already consumed");
        return;
    };
    commands.spawn((
        Sprite {
            image: images.add(map),
            custom_size: Some(frame.size()),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
        Name::new("World Map"),
    ));
    let scale = frame.pixels_per_degree();
    info!(
        "Screen configured: {}x{} px, {:.1}x{:.1} px per degree",
        config.window.width, config.window.height, scale.x, scale.y
    );
}

pub fn register_icon(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    mut pending: ResMut<PendingImages>,
) {
    let cursor = Cursor::for_icon();
    let hidden = visibility_of(&cursor);
    commands.insert_resource(cursor);

    let Some(icon) = pending.icon.take() else {
        warn!("register_icon: station icon image already consumed");
        return;
    };
    let size = icon.size().as_vec2();

    commands.spawn((
        Sprite {
            image: images.add(icon),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, ICON_Z),
        hidden,
        StationIcon,
        Name::new("ISS"),
    ));
}

pub fn mark_reference_location(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut cursor: ResMut<Cursor>,
    frame: Res<Frame>,
    config: Res<TrackerConfig>,
    label: Res<PassoverLabel>,
) {
    let marker = mark_reference(
        &mut cursor,
        &config.reference,
        &config.marker,
        label.0.clone(),
    );

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(marker.dot_diameter / 2.0))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(marker.dot_color))),
        Transform::from_translation(frame.to_translation(marker.dot_at).extend(DOT_Z)),
        ReferenceDot,
        Name::new(config.reference.name.clone()),
    ));
    commands.spawn((
        Text2d::new(marker.label),
        TextFont {
            font_size: config.marker.font_size,
            ..default()
        },
        TextColor(marker.label_color),
        Anchor::BOTTOM_LEFT,
        Transform::from_translation(frame.to_translation(marker.label_at).extend(LABEL_Z)),
        PassoverText,
    ));
    info!(
        "Marked {} at lat {} lon {}",
        config.reference.name, config.reference.latitude, config.reference.longitude
    );
}

pub fn show_station(
    mut cursor: ResMut<Cursor>,
    frame: Res<Frame>,
    station: Res<StationPosition>,
    mut icons: Query<(&mut Transform, &mut Visibility), With<StationIcon>>,
) {
    cursor.goto(station.0.as_dvec2());
    cursor.show();

    let Ok((mut transform, mut visibility)) = icons.single_mut() else {
        warn!("show_station: station icon not found");
        return;
    };
    transform.translation = frame.to_translation(cursor.position).extend(ICON_Z);
    *visibility = visibility_of(&cursor);
    let (lon, lat) = station.0.lon_lat();
    info!("ISS shown at lon {} lat {}", lon, lat);
}

pub fn await_close() {
    info!("Map ready; close the window to exit");
}

fn visibility_of(cursor: &Cursor) -> Visibility {
    if cursor.visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}
