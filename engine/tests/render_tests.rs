//! Render Tests - Playfield Mesh, Frame View and Shader Validation
//!
//! Everything here runs without a GPU: mesh generation is pure CPU work and
//! the overlay shader is validated with naga.

use glam::Vec2;
use umbrella_launcher_engine::game::render::palette;
use umbrella_launcher_engine::game::{LauncherConfig, Session, build_playfield_mesh};
use umbrella_launcher_engine::render::{Color, PLAYFIELD_SHADER_SOURCE, Vertex};

// ============================================================================
// Shader
// ============================================================================

#[test]
fn test_playfield_shader_parses_and_validates() {
    let module = naga::front::wgsl::parse_str(PLAYFIELD_SHADER_SOURCE)
        .unwrap_or_else(|e| panic!("playfield.wgsl failed to parse: {e}"));

    let entry_points: Vec<&str> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
    assert!(entry_points.contains(&"vs_main"));
    assert!(entry_points.contains(&"fs_main"));

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    )
    .validate(&module)
    .unwrap_or_else(|e| panic!("playfield.wgsl failed validation: {e:?}"));
}

#[test]
fn test_vertex_layout_matches_shader_inputs() {
    // vec2 position + vec4 color
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    let v = Vertex {
        position: [0.5, -0.5],
        color: [1.0, 0.0, 1.0, 1.0],
    };
    let bytes: &[u8] = bytemuck::bytes_of(&v);
    assert_eq!(bytes.len(), 24);
}

// ============================================================================
// Frame view
// ============================================================================

#[test]
fn test_frame_reflects_session_state() {
    let mut session = Session::new(LauncherConfig::default());
    {
        let frame = session.frame();
        assert!(!frame.shows_band());
        assert_eq!(frame.standing_targets().count(), 5);
        assert_eq!(frame.background(), Color::rgb(0x0a, 0x0a, 0x0f));
        assert_eq!(
            frame.ground(),
            (Vec2::new(0.0, 540.0), Vec2::new(800.0, 60.0))
        );
    }

    session.pointer_down(150.0, 400.0);
    session.pointer_move(120.0, 440.0);
    let frame = session.frame();
    assert!(frame.shows_band());
    assert_eq!(
        frame.band(),
        [
            Vec2::new(130.0, 340.0),
            Vec2::new(120.0, 440.0),
            Vec2::new(170.0, 340.0)
        ]
    );
}

// ============================================================================
// Playfield mesh
// ============================================================================

fn triangles(session: &Session) -> usize {
    build_playfield_mesh(&session.frame()).triangle_count()
}

#[test]
fn test_mesh_adds_band_only_while_aiming() {
    let mut session = Session::new(LauncherConfig::default());
    let ready = triangles(&session);

    session.pointer_down(150.0, 400.0);
    session.pointer_move(120.0, 440.0);
    let aiming = triangles(&session);
    // two band segments, two triangles each
    assert_eq!(aiming, ready + 4);

    session.pointer_up();
    assert_eq!(triangles(&session), ready);
}

#[test]
fn test_mesh_drops_destroyed_targets() {
    let mut config = LauncherConfig::default();
    config.physics.gravity = 0.0;
    config.physics.friction = 1.0;
    config.slingshot.anchor = Vec2::new(500.0, 510.0);
    let mut session = Session::new(config);
    let before = triangles(&session);

    session.pointer_down(500.0, 510.0);
    session.pointer_move(450.0, 510.0);
    session.pointer_up();
    // from (450, 510) at 10 per tick, inside the first box on tick 11
    for _ in 0..11 {
        session.tick();
    }
    assert_eq!(session.score(), 100);
    // fill (2) plus four outline bars (8)
    assert_eq!(triangles(&session), before - 10);
}

#[test]
fn test_mesh_uses_palette_colors() {
    let session = Session::new(LauncherConfig::default());
    let mesh = build_playfield_mesh(&session.frame());
    let ground = palette::GROUND.to_linear();
    let outline = palette::TARGET_OUTLINE.to_linear();
    assert!(mesh.vertices.iter().any(|v| v.color == ground));
    assert!(mesh.vertices.iter().any(|v| v.color == outline));
    for target in session.targets() {
        let fill = target.color.to_linear();
        assert!(mesh.vertices.iter().any(|v| v.color == fill));
    }
}

#[test]
fn test_mesh_stays_in_clip_space() {
    let session = Session::new(LauncherConfig::default());
    let mesh = build_playfield_mesh(&session.frame());
    assert_eq!(mesh.viewport(), Vec2::new(800.0, 600.0));
    for v in &mesh.vertices {
        assert!(v.position[0] >= -1.01 && v.position[0] <= 1.01);
        assert!(v.position[1] >= -1.01 && v.position[1] <= 1.01);
    }
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
}
