use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use glider::{
    components::{ExternalController, GliderBundle, GliderConfig, GliderControls, Thermal},
    plugins::{GliderPlugin, ThermalOverlapEvent},
    resources::{ExternalControls, RenderFrame},
};
use std::time::Duration;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    player: Option<GliderConfig>,
    frame: Option<RenderFrame>,
    time_step: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            player: None,
            frame: None,
            time_step: 1.0 / 60.0,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, config: GliderConfig) -> Self {
        self.player = Some(config);
        self
    }

    pub fn with_render_frame(mut self, frame: RenderFrame) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn build(self) -> TestApp {
        let mut plugin = GliderPlugin::new();
        if let Some(config) = self.player {
            plugin = plugin.with_player(config);
        }
        if let Some(frame) = self.frame {
            plugin = plugin.with_render_frame(frame);
        }

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(plugin)
            .insert_resource(TimeUpdateStrategy::ManualDuration(
                Duration::from_secs_f64(self.time_step),
            ));

        // Run an initial update to initialize everything, the clock starts here
        app.update();

        TestApp {
            app,
            time_step: self.time_step,
        }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub time_step: f64,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    /// Runs enough frames to cover `seconds` of simulated time.
    pub fn run_for(&mut self, seconds: f64) {
        self.run_steps((seconds / self.time_step).round() as usize);
    }

    /// Spawns a glider driven by [`ExternalControls`].
    pub fn spawn_glider(&mut self, config: GliderConfig) -> Entity {
        self.app
            .world_mut()
            .spawn((GliderBundle::new(config), ExternalController))
            .id()
    }

    pub fn spawn_thermal(&mut self) -> Entity {
        self.app
            .world_mut()
            .spawn((Thermal, Name::new("Test Thermal")))
            .id()
    }

    pub fn set_controls(&mut self, up: f64, right: f64) {
        self.app
            .world_mut()
            .insert_resource(ExternalControls(GliderControls::new(up, right)));
    }

    pub fn enter_thermal(&mut self, glider: Entity, thermal: Entity) {
        self.app
            .world_mut()
            .send_event(ThermalOverlapEvent::Begin { glider, thermal });
    }

    pub fn exit_thermal(&mut self, glider: Entity, thermal: Entity) {
        self.app
            .world_mut()
            .send_event(ThermalOverlapEvent::End { glider, thermal });
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.app.world().get::<T>(entity)
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<Mut<T>> {
        self.app.world_mut().get_mut::<T>(entity)
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }
}
