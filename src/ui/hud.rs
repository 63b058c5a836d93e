//! HUD: title bar, score badge, key hints, game-over panel and restart

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;
use log::error;

use super::components::{
    ControlsHint, GameOverPanel, HostResource, HudText, RestartButton, RestartRequested,
    SessionVisual, VoxelPalette,
};
use super::spawner::spawn_session_visuals;

const PANEL_COLOR: Color = Color::srgba(0.06, 0.09, 0.16, 0.9);
const BADGE_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.3);
const SCORE_COLOR: Color = Color::srgb(0.43, 0.91, 0.72);
const BUTTON_COLOR: Color = Color::srgb(0.06, 0.73, 0.51);
const BUTTON_HOVER_COLOR: Color = Color::srgb(0.2, 0.83, 0.6);
const BUTTON_PRESSED_COLOR: Color = Color::srgb(0.02, 0.59, 0.41);

/// System to setup the HUD
pub fn setup_hud(mut commands: Commands) {
    // Title bar across the top of the screen
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(56.0),
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                padding: UiRect::horizontal(Val::Px(16.0)),
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.06, 0.09, 0.16, 0.8)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Lane Crosser"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new("Voxel blocks - Dodge traffic"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.84, 0.88)),
            ));
        });

    // Score badge and movement hint under the title bar
    commands
        .spawn((Node {
            width: Val::Percent(100.0),
            height: Val::Auto,
            position_type: PositionType::Absolute,
            top: Val::Px(72.0),
            padding: UiRect::horizontal(Val::Px(16.0)),
            justify_content: JustifyContent::SpaceBetween,
            ..default()
        },))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                        ..default()
                    },
                    BackgroundColor(BADGE_COLOR),
                ))
                .with_children(|badge| {
                    badge.spawn((
                        HudText::Score,
                        Text::new("Farthest row: 0"),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(SCORE_COLOR),
                    ));
                });
            parent
                .spawn((
                    Node {
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                        ..default()
                    },
                    BackgroundColor(BADGE_COLOR),
                ))
                .with_children(|badge| {
                    badge.spawn((
                        Text::new("Use arrows / WASD to move"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
        });

    // Key hints at the bottom, hidden once the run is over
    commands
        .spawn((
            ControlsHint,
            Node {
                width: Val::Percent(100.0),
                height: Val::Auto,
                position_type: PositionType::Absolute,
                bottom: Val::Px(16.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            for key in ["W", "A", "S", "D"] {
                spawn_key_hint(parent, key);
            }
            parent.spawn((
                Text::new("or"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgba(0.89, 0.91, 0.94, 0.5)),
            ));
            for key in ["\u{2190}", "\u{2192}", "\u{2191}", "\u{2193}"] {
                spawn_key_hint(parent, key);
            }
        });

    // Game-over panel, shown by `update_hud`
    commands
        .spawn((
            GameOverPanel,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        padding: UiRect::all(Val::Px(32.0)),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(12.0),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BackgroundColor(PANEL_COLOR),
                    BorderColor::all(Color::srgb(0.2, 0.25, 0.33)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("Game Over"),
                        TextFont {
                            font_size: 32.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                    panel.spawn((
                        HudText::FinalScore,
                        Text::new(""),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.8, 0.84, 0.88)),
                    ));
                    spawn_restart_button(panel);
                });
        });
}

fn spawn_key_hint(parent: &mut ChildSpawnerCommands, key: &str) {
    parent
        .spawn((
            Node {
                padding: UiRect::axes(Val::Px(6.0), Val::Px(2.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.4)),
            BorderColor::all(Color::srgb(0.2, 0.25, 0.33)),
        ))
        .with_children(|hint| {
            hint.spawn((
                Text::new(key),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgba(0.89, 0.91, 0.94, 0.8)),
            ));
        });
}

fn spawn_restart_button(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn((
            RestartButton,
            Button,
            Node {
                padding: UiRect::axes(Val::Px(20.0), Val::Px(10.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BorderColor::all(BUTTON_COLOR),
            BackgroundColor(BUTTON_COLOR),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new("Restart"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::BLACK),
            ));
        });
}

/// System to handle restart button clicks
pub fn handle_restart_button(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor, &mut BorderColor),
        (Changed<Interaction>, With<RestartButton>),
    >,
    mut restart: MessageWriter<RestartRequested>,
) {
    for (interaction, mut bg_color, mut border_color) in interaction_query.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                bg_color.0 = BUTTON_PRESSED_COLOR;
                restart.write(RestartRequested);
            }
            Interaction::Hovered => {
                bg_color.0 = BUTTON_HOVER_COLOR;
                *border_color = BorderColor::all(Color::WHITE);
            }
            Interaction::None => {
                bg_color.0 = BUTTON_COLOR;
                *border_color = BorderColor::all(BUTTON_COLOR);
            }
        }
    }
}

/// System to rebuild the session and its whole scene on restart
pub fn apply_restart(
    mut commands: Commands,
    mut requests: MessageReader<RestartRequested>,
    mut host: ResMut<HostResource>,
    palette: Res<VoxelPalette>,
    visuals: Query<Entity, With<SessionVisual>>,
) {
    if requests.read().count() == 0 {
        return;
    }

    if let Err(err) = host.0.restart() {
        error!("Restart failed: {:#}", err);
        return;
    }

    for entity in visuals.iter() {
        commands.entity(entity).despawn();
    }
    spawn_session_visuals(&mut commands, &palette, host.0.session());
}
