//! Per-frame scene state and the geometry derived from it.

use glam::{Vec3, Vec4};
use rayfrustum_core::{
    build_cascade, fit_directional_light_cascade, resolve_draw_order, Camera, DirectionalLight,
    FrustumsCascade, OrbitInput, ProjectionKind, Result, SceneOptions,
};
use rayfrustum_structures::{
    cascade_volumes, cascade_wireframe, CameraShell, FrustumVolume, LIGHT_WIRE_COLOR,
};

/// Range a perspective field of view is clamped to, in degrees.
const FOVY_RANGE: (f32, f32) = (1.0, 179.0);

/// Smallest orthographic view height, in world units.
const MIN_ORTHO_HEIGHT: f32 = 0.001;

/// Clamps `fovy` to what `projection` can use: an angle in
/// [`FOVY_RANGE`] for perspective, a positive height for orthographic.
fn clamp_fovy(projection: ProjectionKind, fovy: f32) -> f32 {
    match projection {
        ProjectionKind::Perspective => fovy.clamp(FOVY_RANGE.0, FOVY_RANGE.1),
        ProjectionKind::Orthographic => fovy.max(MIN_ORTHO_HEIGHT),
    }
}

/// Everything the viewer needs to know between frames: both cameras, the
/// light, and the cascade configuration.
///
/// The scene is plain state owned by the caller. The geometry for a frame is
/// recomputed from it by [`Scene::frame`] every time.
#[derive(Debug, Clone)]
pub struct Scene {
    options: SceneOptions,
    shell: CameraShell,
}

/// Geometry for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGeometry {
    /// Cascade of the observed camera.
    pub camera_cascade: FrustumsCascade,
    /// Light frustum fitted to each camera cascade frustum.
    pub light_cascade: FrustumsCascade,
    /// Paint order of the camera cascade as seen by the viewer.
    pub draw_order: Vec<usize>,
    /// Direction the light travels in.
    pub light_direction: Vec3,
}

impl FrameGeometry {
    /// Filled, colored camera cascade volumes in paint order.
    #[must_use]
    pub fn camera_volumes(&self) -> Vec<FrustumVolume> {
        cascade_volumes(&self.camera_cascade, &self.draw_order)
    }

    /// Light cascade wireframe as `(nodes, edges)`, and its color.
    #[must_use]
    pub fn light_wireframe(&self) -> (Vec<Vec3>, Vec<[u32; 2]>, Vec4) {
        let (nodes, edges) = cascade_wireframe(&self.light_cascade);
        (nodes, edges, LIGHT_WIRE_COLOR)
    }
}

impl Scene {
    /// Creates a scene from options.
    ///
    /// # Errors
    ///
    /// Returns an error if the cascade planes are invalid.
    pub fn new(options: SceneOptions) -> Result<Self> {
        options.validate()?;
        let shell = CameraShell::from_camera(&options.observed_camera);
        log::info!(
            "scene created: {}x{}, {} cascade planes",
            options.screen_width,
            options.screen_height,
            options.planes.len()
        );
        Ok(Self { options, shell })
    }

    /// Current options, reflecting every change made through the scene.
    #[must_use]
    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    /// The free-orbit camera the scene is viewed through.
    #[must_use]
    pub fn viewer_camera(&self) -> &Camera {
        &self.options.viewer_camera
    }

    /// The camera whose frustums are visualized.
    #[must_use]
    pub fn observed_camera(&self) -> &Camera {
        &self.options.observed_camera
    }

    /// The observed camera's shell.
    #[must_use]
    pub fn camera_shell(&self) -> &CameraShell {
        &self.shell
    }

    /// The directional light.
    #[must_use]
    pub fn light(&self) -> &DirectionalLight {
        &self.options.light
    }

    /// Advances the viewer camera by one frame of input.
    pub fn update(&mut self, input: &OrbitInput) {
        self.options
            .controller
            .update(&mut self.options.viewer_camera, input);
    }

    /// Moves and rotates the observed camera, as a gizmo would.
    pub fn manipulate_observed(&mut self, translation: Vec3, axis: Vec3, angle: f32) {
        self.shell.apply_delta(translation, axis, angle);
        self.shell.sync_camera(&mut self.options.observed_camera);
    }

    /// Sets the light angles in degrees.
    pub fn set_light_angles(&mut self, azimuth: f32, attitude: f32) {
        self.options.light = DirectionalLight::new(azimuth, attitude);
    }

    /// Sets the observed camera's field of view: degrees for a perspective
    /// camera, view height for an orthographic one.
    pub fn set_observed_fovy(&mut self, fovy: f32) {
        let camera = &mut self.options.observed_camera;
        camera.fovy = clamp_fovy(camera.projection, fovy);
    }

    /// Sets the observed camera's projection kind, re-clamping `fovy` for it.
    pub fn set_observed_projection(&mut self, projection: ProjectionKind) {
        let camera = &mut self.options.observed_camera;
        camera.projection = projection;
        camera.fovy = clamp_fovy(projection, camera.fovy);
    }

    /// Sets the viewport size in pixels.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.options.screen_width = width;
        self.options.screen_height = height;
    }

    /// Replaces the cascade planes.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the current planes in place, if the new
    /// planes are invalid.
    pub fn set_planes(&mut self, planes: Vec<f32>) -> Result<()> {
        rayfrustum_core::validate_planes(&planes)?;
        self.options.planes = planes;
        Ok(())
    }

    /// Computes this frame's cascades and draw order.
    pub fn frame(&self) -> Result<FrameGeometry> {
        let camera_cascade = build_cascade(
            &self.options.observed_camera,
            self.options.aspect_ratio(),
            &self.options.planes,
        )?;
        let light_direction = self.options.light.direction();
        let light_cascade = fit_directional_light_cascade(&camera_cascade, light_direction);
        let draw_order = resolve_draw_order(&camera_cascade, self.options.viewer_camera.position);

        Ok(FrameGeometry {
            camera_cascade,
            light_cascade,
            draw_order,
            light_direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rayfrustum_core::FrustumError;

    #[test]
    fn test_default_frame() {
        let scene = Scene::new(SceneOptions::default()).unwrap();
        let frame = scene.frame().unwrap();
        assert_eq!(frame.camera_cascade.n_frustums(), 3);
        assert_eq!(frame.light_cascade.planes(), frame.camera_cascade.planes());
        assert_eq!(frame.draw_order.len(), 3);
        assert_eq!(frame.camera_volumes().len(), 3);

        let (nodes, edges, color) = frame.light_wireframe();
        assert_eq!(nodes.len(), 24);
        assert_eq!(edges.len(), 36);
        assert_eq!(color, LIGHT_WIRE_COLOR);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = SceneOptions {
            planes: vec![1.0],
            ..Default::default()
        };
        assert!(matches!(
            Scene::new(options),
            Err(FrustumError::PlaneCount { count: 1, .. })
        ));
    }

    #[test]
    fn test_set_planes_keeps_old_on_error() {
        let mut scene = Scene::new(SceneOptions::default()).unwrap();
        assert!(scene.set_planes(vec![2.0, 1.0]).is_err());
        assert_eq!(scene.options().planes, vec![0.01, 2.0, 4.0, 16.0]);

        scene.set_planes(vec![0.5, 1.0, 2.0, 4.0, 8.0]).unwrap();
        assert_eq!(scene.frame().unwrap().camera_cascade.n_frustums(), 4);
    }

    #[test]
    fn test_fovy_clamped() {
        let mut scene = Scene::new(SceneOptions::default()).unwrap();
        scene.set_observed_fovy(500.0);
        assert_eq!(scene.observed_camera().fovy, 179.0);
        scene.set_observed_fovy(-3.0);
        assert_eq!(scene.observed_camera().fovy, 1.0);
    }

    #[test]
    fn test_orthographic_height_not_limited_to_angles() {
        let mut scene = Scene::new(SceneOptions::default()).unwrap();
        scene.set_observed_projection(ProjectionKind::Orthographic);
        scene.set_observed_fovy(500.0);
        assert_eq!(scene.observed_camera().fovy, 500.0);
        scene.set_observed_fovy(-3.0);
        assert_eq!(scene.observed_camera().fovy, MIN_ORTHO_HEIGHT);

        scene.set_observed_fovy(250.0);
        scene.set_observed_projection(ProjectionKind::Perspective);
        assert_eq!(scene.observed_camera().fovy, 179.0);
        assert!(scene.frame().is_ok());
    }

    #[test]
    fn test_update_moves_viewer_only() {
        let mut scene = Scene::new(SceneOptions::default()).unwrap();
        let observed = *scene.observed_camera();
        let viewer = *scene.viewer_camera();
        scene.update(&OrbitInput {
            wheel: 2.0,
            mouse_delta: Vec2::new(10.0, 5.0),
            middle_down: true,
            ..Default::default()
        });
        assert_ne!(*scene.viewer_camera(), viewer);
        assert_eq!(*scene.observed_camera(), observed);
    }

    #[test]
    fn test_manipulate_observed_updates_cascade() {
        let mut scene = Scene::new(SceneOptions::default()).unwrap();
        let before = scene.frame().unwrap();
        scene.manipulate_observed(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, 0.0);
        let after = scene.frame().unwrap();

        assert!((scene.observed_camera().position - Vec3::new(0.0, 4.0, -5.0)).length() < 1e-6);
        let shift = after.camera_cascade.frustums()[0].center()
            - before.camera_cascade.frustums()[0].center();
        assert!((shift - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_light_angles_change_light_cascade() {
        let mut scene = Scene::new(SceneOptions::default()).unwrap();
        let before = scene.frame().unwrap();
        scene.set_light_angles(120.0, 30.0);
        let after = scene.frame().unwrap();
        assert_eq!(after.camera_cascade, before.camera_cascade);
        assert_ne!(after.light_cascade, before.light_cascade);
        let expected = DirectionalLight::new(120.0, 30.0).direction();
        assert!((after.light_direction - expected).length() < 1e-6);
    }
}
